//! Fixed timestep simulation tick
//!
//! One `tick` call advances the whole session: paddle/ball motion, collision
//! resolution, brick damage and chained explosions, power-up drops and timed
//! effects, and the phase transitions between Playing, LevelComplete, Paused,
//! GameOver and Win.

use glam::Vec2;

use super::brick::{self, Brick, BrickKind, HitOutcome};
use super::collision;
use super::level::LevelProvider;
use super::powerup;
use super::state::{Ball, GameEvent, GamePhase, GameState, Paddle};
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left-pressed flag, held
    pub left: bool,
    /// Right-pressed flag, held
    pub right: bool,
    /// Pause toggle, discrete
    pub pause: bool,
    /// Skip the level-complete countdown, discrete
    pub skip: bool,
    /// Start a fresh run from GameOver/Win, discrete
    pub restart: bool,
    /// Return to menu: submit any unsaved score and reset the session
    pub menu: bool,
}

/// Build a level's bricks and reset the per-level pieces.
///
/// This is the Loading transition: fresh bricks, centered ball and paddle,
/// per-level score and lives back to their defaults. Cross-level totals are
/// untouched.
pub fn load_level(state: &mut GameState, levels: &dyn LevelProvider, level: u32) {
    state.level = level;

    let specs = levels.level_layout(level);
    let mut bricks = Vec::with_capacity(specs.len());
    for spec in &specs {
        let id = state.next_entity_id();
        bricks.push(Brick::new(id, spec.kind, spec.x, spec.y));
    }
    state.bricks = bricks;

    state.paddle = Paddle::new();
    state.ball = Ball::new();
    state.powerups.clear();
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.phase = GamePhase::Playing;
    state.level_complete_at = None;

    log::info!(
        "loaded level {} ({} bricks), total score {}",
        level,
        state.bricks.len(),
        state.total_score
    );
}

/// Reset totals, lives and flags to a fresh session.
///
/// Deliberately does not load a level; an external menu/selection is
/// expected to call `load_level` before ticking again.
pub fn reset_session(state: &mut GameState) {
    state.score = 0;
    state.total_score = 0;
    state.lives = STARTING_LIVES;
    state.level = 1;
    state.score_saved = false;
    state.level_complete_at = None;
    state.phase = GamePhase::Playing;
    state.bricks.clear();
    state.powerups.clear();
    state.paddle = Paddle::new();
    state.ball = Ball::new();
    log::info!("session reset");
}

/// Fresh run from level 1 (restart input after GameOver/Win)
pub fn start_new_game(state: &mut GameState, levels: &dyn LevelProvider) {
    reset_session(state);
    load_level(state, levels, 1);
}

/// Emit the final total at most once per session
fn submit_score_once(state: &mut GameState) {
    if state.score_saved || state.total_score == 0 {
        return;
    }
    state.score_saved = true;
    state.push_event(GameEvent::ScoreSubmitted {
        total: state.total_score,
    });
    log::info!("submitting final score {}", state.total_score);
}

/// Score a destroyed brick and roll for a power-up drop at its center
fn award_brick_destruction(state: &mut GameState, center: Vec2) {
    state.score += SCORE_PER_BRICK;
    let id = state.next_entity_id();
    if let Some(drop) = powerup::roll_drop(&mut state.rng, id, center) {
        state.powerups.push(drop);
    }
}

/// Leave LevelComplete: next level, or Win after the last one
fn advance_level(state: &mut GameState, levels: &dyn LevelProvider) {
    state.level_complete_at = None;
    if state.level < levels.max_level() {
        load_level(state, levels, state.level + 1);
    } else {
        state.phase = GamePhase::Win;
        state.push_event(GameEvent::Win);
        submit_score_once(state);
        log::info!("all levels cleared, final score {}", state.total_score);
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, levels: &dyn LevelProvider) {
    state.events.clear();

    // Pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::PauseToggled);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::PauseToggled);
            }
            _ => {}
        }
    }

    // Restart a finished run
    if input.restart && matches!(state.phase, GamePhase::GameOver | GamePhase::Win) {
        start_new_game(state, levels);
        return;
    }

    // Return to menu: any unsaved total goes to the sink first
    if input.menu
        && matches!(
            state.phase,
            GamePhase::Paused | GamePhase::LevelComplete | GamePhase::GameOver | GamePhase::Win
        )
    {
        submit_score_once(state);
        reset_session(state);
        return;
    }

    // Nothing mutates in these phases
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver | GamePhase::Win => return,
        _ => {}
    }

    state.time_ticks += 1;
    state.clock.advance(dt);

    // Between-level countdown
    if state.phase == GamePhase::LevelComplete {
        let deadline = state
            .level_complete_at
            .map(|t| t + LEVEL_COMPLETE_DELAY_SECS);
        if input.skip || deadline.is_some_and(|t| state.clock.now() >= t) {
            advance_level(state, levels);
        }
        return;
    }

    // Paddle movement
    if input.left {
        state.paddle.move_left(dt);
    }
    if input.right {
        state.paddle.move_right(dt);
    }

    // Ball motion and bounces
    state.ball.advance(dt);
    if collision::bounce_off_walls(&mut state.ball) {
        state.push_event(GameEvent::WallHit);
    }
    if collision::bounce_off_paddle(&mut state.ball, &state.paddle) {
        state.push_event(GameEvent::PaddleHit);
    }

    // Brick collisions: the loop stops at the first brick hit, so at most
    // one collision is resolved per tick even when several bricks overlap.
    let mut exploded_origin = None;
    let mut destroyed_any = false;
    for idx in 0..state.bricks.len() {
        if state.bricks[idx].is_destroyed() {
            continue;
        }
        let rect = state.bricks[idx].rect;
        if !collision::bounce_off_brick(&mut state.ball, &rect) {
            continue;
        }

        let kind = state.bricks[idx].kind;
        let center = state.bricks[idx].center();
        match state.bricks[idx].take_hit() {
            HitOutcome::Destroyed => {
                state.push_event(GameEvent::BrickDestroyed { kind });
                award_brick_destruction(state, center);
                destroyed_any = true;
                if kind == BrickKind::Explosive {
                    exploded_origin = Some(idx);
                }
            }
            HitOutcome::Cracked => state.push_event(GameEvent::BrickCracked),
            HitOutcome::ShruggedOff => state.push_event(GameEvent::BrickShruggedOff),
            HitOutcome::AlreadyDestroyed => {}
        }
        break;
    }

    // Chain reaction from a destroyed explosive brick
    if let Some(origin) = exploded_origin {
        state.push_event(GameEvent::Explosion);
        let destroyed = brick::explode(&mut state.bricks, origin);
        for idx in destroyed {
            let kind = state.bricks[idx].kind;
            let center = state.bricks[idx].center();
            state.push_event(GameEvent::BrickDestroyed { kind });
            award_brick_destruction(state, center);
        }
    }

    // Power-up drops and timed effect expiry
    powerup::update_drops(
        &mut state.powerups,
        &mut state.ball,
        &mut state.paddle,
        &state.clock,
        dt,
        &mut state.events,
    );
    powerup::expire_effects(&mut state.ball, &mut state.paddle, &state.clock);

    // Sweep destroyed bricks
    state.bricks.retain(|b| !b.is_destroyed());

    // Level clear: something was destroyed and only unbreakable bricks remain.
    // The destruction guard keeps an unloaded (empty) board from counting.
    if destroyed_any && state.only_unbreakable_left() {
        state.total_score += state.score;
        state.level_complete_at = Some(state.clock.now());
        state.phase = GamePhase::LevelComplete;
        state.push_event(GameEvent::LevelComplete { level: state.level });
        log::info!(
            "level {} complete, total score {}",
            state.level,
            state.total_score
        );
        return;
    }

    // Life loss: the ball crossed the bottom edge
    if collision::ball_below_board(&state.ball) {
        state.lives = state.lives.saturating_sub(1);
        state.push_event(GameEvent::LifeLost);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::GameOver);
            submit_score_once(state);
            log::info!("game over, final score {}", state.total_score);
        } else {
            state.ball.reset();
        }
    }
}
