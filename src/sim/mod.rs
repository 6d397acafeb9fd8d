//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod brick;
pub mod collision;
pub mod level;
pub mod powerup;
pub mod rect;
pub mod state;
pub mod tick;

pub use brick::{Brick, BrickKind, HitOutcome};
pub use collision::{bounce_off_brick, bounce_off_paddle, bounce_off_walls};
pub use level::{BrickSpec, ClassicLayouts, LevelProvider};
pub use powerup::{PowerUp, PowerUpKind};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, SimClock};
pub use tick::{TickInput, load_level, start_new_game, tick};
