//! Brick model: kinds, hit points, and chained explosions
//!
//! Kinds are a tagged enum plus a small behavior table rather than a trait
//! hierarchy; adding a kind means one more arm in `initial_hit_points` and
//! `take_hit`, with no dynamic dispatch in the collision hot path.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};

/// Brick kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// One hit
    #[default]
    Normal,
    /// Two hits, with a visible "cracked" state in between
    Strong,
    /// One hit, takes its neighborhood with it
    Explosive,
    /// Never destroyed, only pinged
    Unbreakable,
}

impl BrickKind {
    /// Hit points a fresh brick of this kind starts with.
    /// Unbreakable bricks never spend theirs; the value is a placeholder.
    pub fn initial_hit_points(self) -> u8 {
        match self {
            BrickKind::Normal => 1,
            BrickKind::Strong => 2,
            BrickKind::Explosive => 1,
            BrickKind::Unbreakable => u8::MAX,
        }
    }
}

/// What a single `take_hit` call did, for the audio/render hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Hit points reached zero on this hit
    Destroyed,
    /// Strong brick survived but is down to its last hit point
    Cracked,
    /// Unbreakable brick absorbed the hit without damage
    ShruggedOff,
    /// The brick was already destroyed; nothing changed
    AlreadyDestroyed,
}

/// A brick on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub hp: u8,
    pub rect: Rect,
}

impl Brick {
    pub fn new(id: u32, kind: BrickKind, x: f32, y: f32) -> Self {
        Self {
            id,
            kind,
            hp: kind.initial_hit_points(),
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
        }
    }

    /// Destroyed means zero hit points, except Unbreakable which never is.
    pub fn is_destroyed(&self) -> bool {
        self.kind != BrickKind::Unbreakable && self.hp == 0
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Apply one hit. Idempotent on already-destroyed bricks.
    pub fn take_hit(&mut self) -> HitOutcome {
        if self.is_destroyed() {
            return HitOutcome::AlreadyDestroyed;
        }
        match self.kind {
            BrickKind::Unbreakable => HitOutcome::ShruggedOff,
            BrickKind::Explosive => {
                // Goes off on the first touch regardless of remaining hp
                self.hp = 0;
                HitOutcome::Destroyed
            }
            BrickKind::Normal | BrickKind::Strong => {
                self.hp -= 1;
                if self.hp == 0 {
                    HitOutcome::Destroyed
                } else {
                    HitOutcome::Cracked
                }
            }
        }
    }
}

/// Grid distance between two brick positions, in whole brick cells
fn grid_distance(a: Vec2, b: Vec2) -> (u32, u32) {
    let gx = ((a.x - b.x).abs() / BRICK_WIDTH) as u32;
    let gy = ((a.y - b.y).abs() / BRICK_HEIGHT) as u32;
    (gx, gy)
}

/// Detonate the (already destroyed) explosive brick at `origin` and chain
/// through any explosive bricks caught in a blast.
///
/// Implemented as a worklist over brick indices instead of recursion: each
/// blast destroys every live, non-Unbreakable brick within one grid cell on
/// both axes (a 3x3 neighborhood), and newly destroyed explosives join the
/// queue. The destroyed flag doubles as the visited set, so no brick is
/// processed twice and the chain terminates. Returns the indices of bricks
/// destroyed by the blasts, in detonation order; the origin itself is not
/// included.
pub fn explode(bricks: &mut [Brick], origin: usize) -> Vec<usize> {
    let mut destroyed = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(origin);

    while let Some(center_idx) = queue.pop_front() {
        let center = bricks[center_idx].rect.pos;
        for idx in 0..bricks.len() {
            let brick = &bricks[idx];
            if brick.is_destroyed() || brick.kind == BrickKind::Unbreakable {
                continue;
            }
            let (gx, gy) = grid_distance(brick.rect.pos, center);
            if gx <= 1 && gy <= 1 {
                bricks[idx].hp = 0;
                destroyed.push(idx);
                if bricks[idx].kind == BrickKind::Explosive {
                    queue.push_back(idx);
                }
            }
        }
    }

    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick(id: u32, kind: BrickKind, x: f32, y: f32) -> Brick {
        Brick::new(id, kind, x, y)
    }

    #[test]
    fn test_normal_brick_one_hit() {
        let mut b = brick(1, BrickKind::Normal, 0.0, 0.0);
        assert!(!b.is_destroyed());
        assert_eq!(b.take_hit(), HitOutcome::Destroyed);
        assert!(b.is_destroyed());
    }

    #[test]
    fn test_strong_brick_two_hits() {
        let mut b = brick(1, BrickKind::Strong, 0.0, 0.0);
        assert_eq!(b.take_hit(), HitOutcome::Cracked);
        assert!(!b.is_destroyed());
        assert_eq!(b.take_hit(), HitOutcome::Destroyed);
        assert!(b.is_destroyed());
    }

    #[test]
    fn test_explosive_brick_single_hit() {
        let mut b = brick(1, BrickKind::Explosive, 0.0, 0.0);
        assert_eq!(b.take_hit(), HitOutcome::Destroyed);
        assert!(b.is_destroyed());
    }

    #[test]
    fn test_unbreakable_never_destroyed() {
        let mut b = brick(1, BrickKind::Unbreakable, 0.0, 0.0);
        for _ in 0..100 {
            assert_eq!(b.take_hit(), HitOutcome::ShruggedOff);
        }
        assert!(!b.is_destroyed());
    }

    #[test]
    fn test_hit_on_destroyed_brick_is_noop() {
        let mut b = brick(1, BrickKind::Normal, 0.0, 0.0);
        b.take_hit();
        assert_eq!(b.take_hit(), HitOutcome::AlreadyDestroyed);
        assert_eq!(b.hp, 0);
    }

    #[test]
    fn test_explosion_destroys_vertical_neighbor() {
        // Two explosives stacked one cell apart: hitting the first takes both
        let mut bricks = vec![
            brick(1, BrickKind::Explosive, 40.0, 40.0),
            brick(2, BrickKind::Explosive, 40.0, 60.0),
        ];
        bricks[0].take_hit();
        let destroyed = explode(&mut bricks, 0);
        assert_eq!(destroyed, vec![1]);
        assert!(bricks[1].is_destroyed());
    }

    #[test]
    fn test_explosion_spares_unbreakable_and_far_bricks() {
        let mut bricks = vec![
            brick(1, BrickKind::Explosive, 80.0, 80.0),
            brick(2, BrickKind::Unbreakable, 80.0, 100.0),
            brick(3, BrickKind::Normal, 120.0, 80.0),
            brick(4, BrickKind::Normal, 200.0, 80.0), // 3 cells away
        ];
        bricks[0].take_hit();
        let destroyed = explode(&mut bricks, 0);
        assert_eq!(destroyed, vec![2]);
        assert!(!bricks[1].is_destroyed());
        assert!(bricks[2].is_destroyed());
        assert!(!bricks[3].is_destroyed());
    }

    #[test]
    fn test_explosion_chains_through_explosives() {
        // A line of explosives each one cell apart: the chain rolls down it
        let mut bricks = vec![
            brick(1, BrickKind::Explosive, 40.0, 40.0),
            brick(2, BrickKind::Explosive, 80.0, 40.0),
            brick(3, BrickKind::Explosive, 120.0, 40.0),
            brick(4, BrickKind::Normal, 160.0, 40.0),
        ];
        bricks[0].take_hit();
        let destroyed = explode(&mut bricks, 0);
        assert_eq!(destroyed.len(), 3);
        assert!(bricks.iter().skip(1).all(Brick::is_destroyed));
    }

    #[test]
    fn test_explosion_counts_each_brick_once() {
        // Overlapping blast zones must not double-report a victim
        let mut bricks = vec![
            brick(1, BrickKind::Explosive, 40.0, 40.0),
            brick(2, BrickKind::Explosive, 80.0, 40.0),
            brick(3, BrickKind::Normal, 60.0, 60.0),
        ];
        bricks[0].take_hit();
        let destroyed = explode(&mut bricks, 0);
        let hits_on_normal = destroyed.iter().filter(|&&i| i == 2).count();
        assert_eq!(hits_on_normal, 1);
    }
}
