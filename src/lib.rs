//! Brickstorm - a deterministic brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, bricks, power-ups, session phases)
//! - `session`: Wires the sim to injected hooks (levels, audio, score sink, render pass)
//! - `audio` / `render`: fire-and-forget output hooks, no-op when absent
//! - `highscores`: top-10 leaderboard acting as the score sink
//! - `progress`: level-unlock tracking
//!
//! Rendering, asset decoding and window/input wiring are external
//! collaborators; the core only talks to them through the hook traits.

pub mod audio;
pub mod highscores;
pub mod progress;
pub mod render;
pub mod session;
pub mod sim;

pub use highscores::HighScores;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one external driver call per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Board dimensions (origin top-left, +y down)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_Y: f32 = 560.0;
    /// Paddle speed in px/s (12 px per 60 Hz tick)
    pub const PADDLE_SPEED: f32 = 720.0;
    /// Hard cap on expanded paddle width
    pub const PADDLE_MAX_WIDTH: f32 = 300.0;

    /// Ball defaults (square bounding box)
    pub const BALL_SIZE: f32 = 12.0;
    /// Initial velocity in px/s (4, -4 px per 60 Hz tick)
    pub const BALL_VEL_X: f32 = 240.0;
    pub const BALL_VEL_Y: f32 = -240.0;

    /// Brick grid cell size
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Top of the brick field
    pub const BRICK_FIELD_TOP: f32 = 50.0;

    /// Power-up defaults
    pub const POWERUP_WIDTH: f32 = 20.0;
    pub const POWERUP_HEIGHT: f32 = 12.0;
    /// Fall speed in px/s (3 px per 60 Hz tick)
    pub const POWERUP_FALL_SPEED: f32 = 180.0;
    /// Drop probability per destroyed brick
    pub const POWERUP_DROP_CHANCE: f32 = 0.15;
    /// Timed effect duration in seconds
    pub const EFFECT_DURATION_SECS: f64 = 5.0;
    /// FastBall velocity multiplier
    pub const FAST_BALL_FACTOR: f32 = 1.5;

    /// Session defaults
    pub const SCORE_PER_BRICK: u64 = 10;
    pub const STARTING_LIVES: u8 = 3;
    pub const MAX_LEVEL: u32 = 5;
    /// Countdown before auto-advancing past a completed level
    pub const LEVEL_COMPLETE_DELAY_SECS: f64 = 5.0;
}
