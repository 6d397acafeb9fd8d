//! Render hook
//!
//! The simulation is draw-agnostic; a frontend implements `RenderSink` and
//! the session walks the state through it once per frame. Every method has
//! a no-op default so a sink only overrides what it draws.

use crate::sim::{Ball, Brick, GamePhase, Paddle, PowerUp};

/// Per-frame HUD snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub total_score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    /// Seconds until the next level loads, while the countdown runs
    pub next_level_in: Option<f64>,
}

/// Drawing seam, injected into the session
pub trait RenderSink {
    fn draw_ball(&mut self, _ball: &Ball) {}
    fn draw_paddle(&mut self, _paddle: &Paddle) {}
    fn draw_brick(&mut self, _brick: &Brick) {}
    fn draw_powerup(&mut self, _powerup: &PowerUp) {}
    fn draw_hud(&mut self, _hud: &Hud) {}
}

/// Sink that draws nothing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl RenderSink for NullRender {}
