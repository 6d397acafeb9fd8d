//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::brick::{Brick, BrickKind};
use super::powerup::{PowerUp, PowerUpKind};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All breakable bricks cleared, countdown to the next level running
    LevelComplete,
    /// Game is paused, nothing mutates
    Paused,
    /// Out of lives
    GameOver,
    /// Final level cleared
    Win,
}

/// Things that happened during a tick, for the audio/score hooks.
///
/// The core never waits on these; a session drains them after each tick and
/// forwards them to whatever sinks are wired up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    /// Strong brick down to its last hit point
    BrickCracked,
    /// Unbreakable brick pinged, no damage
    BrickShruggedOff,
    BrickDestroyed { kind: BrickKind },
    /// An explosive brick went off (once per blast, not per victim)
    Explosion,
    PowerUpCollected { kind: PowerUpKind },
    LifeLost,
    LevelComplete { level: u32 },
    GameOver,
    Win,
    PauseToggled,
    /// Final total, emitted at most once per session
    ScoreSubmitted { total: u64 },
}

/// Simulation clock in seconds, advanced by `dt` on every simulated tick.
///
/// Timed effects store expiry timestamps against this clock instead of wall
/// time, so tests advance it directly and paused sessions freeze timers for
/// free.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    now_secs: f64,
}

impl SimClock {
    pub fn now(&self) -> f64 {
        self.now_secs
    }

    pub fn advance(&mut self, dt: f32) {
        self.now_secs += dt as f64;
    }

    /// Jump forward (tests use this instead of sleeping)
    pub fn advance_secs(&mut self, secs: f64) {
        self.now_secs += secs;
    }
}

/// Deterministic RNG state, serializable so a saved session replays identically.
///
/// Each draw seeds a fresh Pcg32 from the run seed and a draw counter; the
/// counter is the only thing that needs persisting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    fn next_rng(&mut self) -> Pcg32 {
        let stream = self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        self.draws += 1;
        Pcg32::seed_from_u64(self.seed ^ stream)
    }

    /// Uniform roll in [0, 1)
    pub fn roll_f32(&mut self) -> f32 {
        self.next_rng().random()
    }

    /// Uniform index into a table of `len` entries
    pub fn roll_index(&mut self, len: usize) -> usize {
        self.next_rng().random_range(0..len)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in px/s
    pub vel: Vec2,
    /// Per-axis speed magnitudes before a FastBall boost; restored on expiry
    pub base_speed: Vec2,
    pub boosted: bool,
    /// Clock timestamp when the boost reverts; None = inactive
    pub boost_until: Option<f64>,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                BOARD_WIDTH / 2.0 - BALL_SIZE / 2.0,
                BOARD_HEIGHT / 2.0,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(BALL_VEL_X, BALL_VEL_Y),
            base_speed: Vec2::new(BALL_VEL_X.abs(), BALL_VEL_Y.abs()),
            boosted: false,
            boost_until: None,
        }
    }

    /// Move by velocity for one tick
    pub fn advance(&mut self, dt: f32) {
        self.rect.pos += self.vel * dt;
    }

    /// Put the ball back at board center with the initial velocity.
    /// Any active boost goes with it; the replacement ball is not boosted.
    pub fn reset(&mut self) {
        *self = Ball::new();
    }

    /// Start or refresh a FastBall boost
    pub fn boost(&mut self, now: f64) {
        if !self.boosted {
            self.vel *= FAST_BALL_FACTOR;
            self.boosted = true;
        }
        self.boost_until = Some(now + EFFECT_DURATION_SECS);
    }

    /// Revert to the baseline per-axis speed, keeping current direction signs
    pub fn end_boost(&mut self) {
        let sx = if self.vel.x < 0.0 { -1.0 } else { 1.0 };
        let sy = if self.vel.y < 0.0 { -1.0 } else { 1.0 };
        self.vel = Vec2::new(sx * self.base_speed.x, sy * self.base_speed.y);
        self.boosted = false;
        self.boost_until = None;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub base_width: f32,
    pub expanded: bool,
    /// Clock timestamp when the expansion reverts; None = inactive
    pub expand_until: Option<f64>,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                BOARD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                PADDLE_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            base_width: PADDLE_WIDTH,
            expanded: false,
            expand_until: None,
        }
    }

    pub fn move_left(&mut self, dt: f32) {
        self.rect.pos.x = (self.rect.pos.x - PADDLE_SPEED * dt).max(0.0);
    }

    pub fn move_right(&mut self, dt: f32) {
        let max_x = BOARD_WIDTH - self.rect.size.x;
        self.rect.pos.x = (self.rect.pos.x + PADDLE_SPEED * dt).min(max_x);
    }

    /// Start or refresh an ExpandPaddle effect.
    ///
    /// A second pickup while already expanded only refreshes the expiry;
    /// the width never multiplies twice.
    pub fn expand(&mut self, now: f64) {
        if !self.expanded {
            self.rect.size.x = (self.rect.size.x * 2.0).min(PADDLE_MAX_WIDTH);
            self.expanded = true;
            // Keep the wider paddle on the board
            let max_x = BOARD_WIDTH - self.rect.size.x;
            self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
        }
        self.expand_until = Some(now + EFFECT_DURATION_SECS);
    }

    /// Revert to the base width
    pub fn end_expand(&mut self) {
        self.rect.size.x = self.base_width;
        self.expanded = false;
        self.expand_until = None;
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state (power-up rolls)
    pub rng: RngState,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u8,
    /// Per-level score
    pub score: u64,
    /// Cross-level total
    pub total_score: u64,
    /// Guards against submitting the total more than once per session
    pub score_saved: bool,
    pub phase: GamePhase,
    pub clock: SimClock,
    /// Clock timestamp when the level-complete countdown started
    pub level_complete_at: Option<f64>,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks (sorted by id for determinism)
    pub bricks: Vec<Brick>,
    /// Falling power-ups (sorted by id for determinism)
    pub powerups: Vec<PowerUp>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the last tick, drained by the session wrapper
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with no level loaded yet; call `load_level` next.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: RngState::new(seed),
            level: 1,
            lives: STARTING_LIVES,
            score: 0,
            total_score: 0,
            score_saved: false,
            phase: GamePhase::Playing,
            clock: SimClock::default(),
            level_complete_at: None,
            paddle: Paddle::new(),
            ball: Ball::new(),
            bricks: Vec::new(),
            powerups: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// True when no breakable brick remains. This alone is not the
    /// level-clear condition: an unloaded board is also vacuously clear, so
    /// the tick only consults it after a destruction actually happened.
    pub fn only_unbreakable_left(&self) -> bool {
        self.bricks.iter().all(|b| b.kind == BrickKind::Unbreakable)
    }
}
