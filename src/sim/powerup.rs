//! Power-up effect engine
//!
//! Destroyed bricks roll for a drop; drops fall at constant speed until the
//! paddle collects them or they leave the board. Collected effects are timed
//! against the sim clock and revert themselves on expiry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Ball, GameEvent, Paddle, RngState, SimClock};
use crate::consts::*;

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    ExpandPaddle,
    FastBall,
}

/// Kinds eligible to drop. The secondary spawn roll indexes this table, so
/// registering a new kind is one entry here plus an `apply` arm.
pub const DROP_TABLE: &[PowerUpKind] = &[PowerUpKind::ExpandPaddle, PowerUpKind::FastBall];

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub rect: Rect,
    /// Fall speed in px/s
    pub fall_speed: f32,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, center: Vec2) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(
                center.x - POWERUP_WIDTH / 2.0,
                center.y - POWERUP_HEIGHT / 2.0,
                POWERUP_WIDTH,
                POWERUP_HEIGHT,
            ),
            fall_speed: POWERUP_FALL_SPEED,
        }
    }
}

/// Roll for a drop at a destroyed brick's center.
///
/// First roll decides whether anything drops at all, second picks the kind
/// from the registered table. Returns None on a failed roll.
pub fn roll_drop(rng: &mut RngState, id: u32, center: Vec2) -> Option<PowerUp> {
    if rng.roll_f32() >= POWERUP_DROP_CHANCE {
        return None;
    }
    let kind = DROP_TABLE[rng.roll_index(DROP_TABLE.len())];
    Some(PowerUp::new(id, kind, center))
}

/// Apply a collected effect, or refresh its expiry if it is already active
pub fn apply(kind: PowerUpKind, ball: &mut Ball, paddle: &mut Paddle, now: f64) {
    match kind {
        PowerUpKind::ExpandPaddle => paddle.expand(now),
        PowerUpKind::FastBall => ball.boost(now),
    }
}

/// Advance all falling power-ups by one tick.
///
/// Pickups are applied immediately; drops that intersect the paddle or fall
/// past the bottom edge are removed.
pub fn update_drops(
    powerups: &mut Vec<PowerUp>,
    ball: &mut Ball,
    paddle: &mut Paddle,
    clock: &SimClock,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let now = clock.now();
    let mut collected: Vec<PowerUpKind> = Vec::new();

    powerups.retain_mut(|p| {
        p.rect.pos.y += p.fall_speed * dt;
        if p.rect.intersects(&paddle.rect) {
            collected.push(p.kind);
            false
        } else {
            p.rect.top() <= BOARD_HEIGHT
        }
    });

    for kind in collected {
        apply(kind, ball, paddle, now);
        events.push(GameEvent::PowerUpCollected { kind });
    }
}

/// Revert any timed effect whose expiry has passed
pub fn expire_effects(ball: &mut Ball, paddle: &mut Paddle, clock: &SimClock) {
    let now = clock.now();
    if paddle.expand_until.is_some_and(|t| now >= t) {
        paddle.end_expand();
    }
    if ball.boost_until.is_some_and(|t| now >= t) {
        ball.end_boost();
    }
}
