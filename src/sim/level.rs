//! Level layouts
//!
//! A level is an ordered list of brick specifications. The provider trait is
//! the seam for menus/editors to feed custom layouts in; the built-in
//! `ClassicLayouts` carries the five authored levels. Out-of-range requests
//! never fail, they fall back to the first layout.

use serde::{Deserialize, Serialize};

use super::brick::BrickKind;
use crate::consts::{BRICK_FIELD_TOP, BRICK_HEIGHT, BRICK_WIDTH, MAX_LEVEL};

/// One brick in a level layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickSpec {
    pub x: f32,
    pub y: f32,
    pub kind: BrickKind,
}

/// Source of level layouts, injected into the session
pub trait LevelProvider {
    /// Bricks for the given 1-based level index. Implementations must return
    /// some playable layout for any index; unknown levels get a fallback.
    fn level_layout(&self, level: u32) -> Vec<BrickSpec>;

    /// Highest level this provider knows; completing it wins the session
    fn max_level(&self) -> u32 {
        MAX_LEVEL
    }
}

/// The five built-in layouts
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicLayouts;

const COLS: u32 = 20;

fn cell(col: u32, row: u32) -> (f32, f32) {
    (
        col as f32 * BRICK_WIDTH,
        BRICK_FIELD_TOP + row as f32 * BRICK_HEIGHT,
    )
}

fn push(specs: &mut Vec<BrickSpec>, x: f32, y: f32, kind: BrickKind) {
    specs.push(BrickSpec { x, y, kind });
}

/// Full-width banded wall: an unbreakable cap, strong and explosive bands
fn level_banded() -> Vec<BrickSpec> {
    let mut specs = Vec::new();
    for row in 0..7 {
        for col in 0..COLS {
            let (x, y) = cell(col, row);
            let kind = match row {
                0 => BrickKind::Unbreakable,
                2 | 4 => BrickKind::Strong,
                3 => BrickKind::Explosive,
                _ => BrickKind::Normal,
            };
            push(&mut specs, x, y, kind);
        }
    }
    specs
}

/// Centered pyramid, narrowing one brick per row
fn level_pyramid() -> Vec<BrickSpec> {
    let mut specs = Vec::new();
    let rows = 10;
    for row in 0..rows {
        let bricks_in_row = rows - row;
        let offset_x = (COLS - bricks_in_row) as f32 * (BRICK_WIDTH / 2.0);
        for col in 0..bricks_in_row {
            let x = offset_x + col as f32 * BRICK_WIDTH;
            let y = BRICK_FIELD_TOP + row as f32 * BRICK_HEIGHT;
            let kind = if row % 3 == 0 {
                BrickKind::Strong
            } else if row % 4 == 0 {
                BrickKind::Explosive
            } else {
                BrickKind::Normal
            };
            push(&mut specs, x, y, kind);
        }
    }
    specs
}

/// Hollow box: unbreakable border, explosives sprinkled through the interior
fn level_fortress() -> Vec<BrickSpec> {
    let mut specs = Vec::new();
    let rows = 10;
    for row in 0..rows {
        for col in 0..COLS {
            let (x, y) = cell(col, row);
            let is_border = row == 0 || row == rows - 1 || col == 0 || col == COLS - 1;
            let kind = if is_border {
                BrickKind::Unbreakable
            } else if (row + col) % 4 == 0 {
                BrickKind::Explosive
            } else {
                BrickKind::Normal
            };
            push(&mut specs, x, y, kind);
        }
    }
    specs
}

/// Diagonal stripes cycling through all four kinds
fn level_checker() -> Vec<BrickSpec> {
    let mut specs = Vec::new();
    for row in 0..8 {
        for col in 0..COLS {
            let (x, y) = cell(col, row);
            let kind = match (row + col) % 4 {
                0 => BrickKind::Normal,
                1 => BrickKind::Strong,
                2 => BrickKind::Explosive,
                _ => BrickKind::Unbreakable,
            };
            push(&mut specs, x, y, kind);
        }
    }
    specs
}

/// Zigzag rows, alternating strong and normal
fn level_zigzag() -> Vec<BrickSpec> {
    let mut specs = Vec::new();
    for row in 0..8 {
        let offset_x = if row % 2 == 0 { 0.0 } else { BRICK_WIDTH / 2.0 };
        for col in 0..COLS {
            let x = offset_x + col as f32 * BRICK_WIDTH;
            let y = BRICK_FIELD_TOP + row as f32 * BRICK_HEIGHT;
            let kind = if row % 2 == 0 {
                BrickKind::Strong
            } else {
                BrickKind::Normal
            };
            push(&mut specs, x, y, kind);
        }
    }
    specs
}

impl LevelProvider for ClassicLayouts {
    fn level_layout(&self, level: u32) -> Vec<BrickSpec> {
        match level {
            1 => level_banded(),
            2 => level_pyramid(),
            3 => level_fortress(),
            4 => level_checker(),
            5 => level_zigzag(),
            other => {
                log::warn!("no layout for level {other}, falling back to level 1");
                level_banded()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOARD_WIDTH;

    #[test]
    fn test_every_level_has_breakable_bricks() {
        let layouts = ClassicLayouts;
        for level in 1..=layouts.max_level() {
            let specs = layouts.level_layout(level);
            assert!(!specs.is_empty(), "level {level} is empty");
            assert!(
                specs.iter().any(|s| s.kind != BrickKind::Unbreakable),
                "level {level} cannot be completed"
            );
        }
    }

    #[test]
    fn test_out_of_range_level_falls_back() {
        let layouts = ClassicLayouts;
        assert_eq!(layouts.level_layout(0), layouts.level_layout(1));
        assert_eq!(layouts.level_layout(99), layouts.level_layout(1));
    }

    #[test]
    fn test_bricks_stay_on_the_board() {
        let layouts = ClassicLayouts;
        for level in 1..=layouts.max_level() {
            for spec in layouts.level_layout(level) {
                assert!(spec.x >= 0.0 && spec.x + BRICK_WIDTH <= BOARD_WIDTH + BRICK_WIDTH / 2.0);
                assert!(spec.y >= BRICK_FIELD_TOP);
            }
        }
    }

    #[test]
    fn test_pyramid_narrows() {
        let specs = level_pyramid();
        let top_row: Vec<_> = specs
            .iter()
            .filter(|s| s.y == BRICK_FIELD_TOP)
            .collect();
        let bottom_row: Vec<_> = specs
            .iter()
            .filter(|s| s.y == BRICK_FIELD_TOP + 9.0 * BRICK_HEIGHT)
            .collect();
        assert_eq!(top_row.len(), 10);
        assert_eq!(bottom_row.len(), 1);
    }
}
