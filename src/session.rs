//! Session wrapper
//!
//! Owns a `GameState` plus the injected seams: level provider, audio sink
//! and score sink. The sim reports what happened through events; this layer
//! drains them after every tick and dispatches to the sinks, so the core
//! stays free of audio, persistence and unlock bookkeeping.

use crate::audio::{AudioSink, NullAudio, effect_for};
use crate::consts::{LEVEL_COMPLETE_DELAY_SECS, SIM_DT};
use crate::highscores::{NullScoreSink, ScoreSink};
use crate::progress::Progress;
use crate::render::{Hud, RenderSink};
use crate::sim::{
    ClassicLayouts, GameEvent, GamePhase, GameState, LevelProvider, TickInput, load_level, tick,
};

/// A running game with its wired-up sinks
pub struct Session {
    state: GameState,
    levels: Box<dyn LevelProvider>,
    audio: Box<dyn AudioSink>,
    scores: Box<dyn ScoreSink>,
    progress: Progress,
}

impl Session {
    /// Start a session on level 1 with the given seams
    pub fn new(
        seed: u64,
        levels: Box<dyn LevelProvider>,
        audio: Box<dyn AudioSink>,
        scores: Box<dyn ScoreSink>,
    ) -> Self {
        let mut state = GameState::new(seed);
        load_level(&mut state, levels.as_ref(), 1);
        Self {
            state,
            levels,
            audio,
            scores,
            progress: Progress::new(),
        }
    }

    /// Built-in layouts, no audio, no leaderboard
    pub fn with_defaults(seed: u64) -> Self {
        Self::new(
            seed,
            Box::new(ClassicLayouts),
            Box::new(NullAudio),
            Box::new(NullScoreSink),
        )
    }

    /// Jump to an unlocked level, abandoning the current one.
    /// Returns false (and changes nothing) if the level is still locked.
    pub fn select_level(&mut self, level: u32) -> bool {
        if !self.progress.is_unlocked(level) {
            log::warn!("level {level} is locked");
            return false;
        }
        load_level(&mut self.state, self.levels.as_ref(), level);
        true
    }

    /// Advance one fixed timestep and dispatch the resulting events
    pub fn update(&mut self, input: &TickInput) {
        tick(&mut self.state, input, SIM_DT, self.levels.as_ref());

        for event in &self.state.events {
            if let Some(effect) = effect_for(event) {
                self.audio.play(effect);
            }
            match *event {
                GameEvent::ScoreSubmitted { total } => self.scores.submit(total),
                GameEvent::LevelComplete { level } => self.progress.unlock_next(level),
                _ => {}
            }
        }
    }

    /// Walk the whole state through a render sink
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for brick in &self.state.bricks {
            sink.draw_brick(brick);
        }
        for powerup in &self.state.powerups {
            sink.draw_powerup(powerup);
        }
        sink.draw_paddle(&self.state.paddle);
        sink.draw_ball(&self.state.ball);
        sink.draw_hud(&self.hud());
    }

    fn hud(&self) -> Hud {
        let next_level_in = match self.state.phase {
            GamePhase::LevelComplete => self.state.level_complete_at.map(|started| {
                (started + LEVEL_COMPLETE_DELAY_SECS - self.state.clock.now()).max(0.0)
            }),
            _ => None,
        };
        Hud {
            score: self.state.score,
            total_score: self.state.total_score,
            lives: self.state.lives,
            level: self.state.level,
            phase: self.state.phase,
            next_level_in,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::audio::SoundEffect;
    use crate::consts::{BALL_VEL_X, BOARD_HEIGHT};
    use crate::sim::{BrickKind, BrickSpec};

    struct FixedLayout {
        specs: Vec<BrickSpec>,
        max: u32,
    }

    impl LevelProvider for FixedLayout {
        fn level_layout(&self, _level: u32) -> Vec<BrickSpec> {
            self.specs.clone()
        }

        fn max_level(&self) -> u32 {
            self.max
        }
    }

    #[derive(Clone, Default)]
    struct RecordingAudio(Rc<RefCell<Vec<SoundEffect>>>);

    impl AudioSink for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.0.borrow_mut().push(effect);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingScores(Rc<RefCell<Vec<u64>>>);

    impl ScoreSink for RecordingScores {
        fn submit(&mut self, total: u64) {
            self.0.borrow_mut().push(total);
        }
    }

    fn single_brick_session(max: u32) -> (Session, RecordingAudio, RecordingScores) {
        let audio = RecordingAudio::default();
        let scores = RecordingScores::default();
        let levels = FixedLayout {
            specs: vec![BrickSpec {
                x: 400.0,
                y: 50.0,
                kind: BrickKind::Normal,
            }],
            max,
        };
        let session = Session::new(
            1,
            Box::new(levels),
            Box::new(audio.clone()),
            Box::new(scores.clone()),
        );
        (session, audio, scores)
    }

    #[test]
    fn test_brick_break_reaches_the_audio_sink() {
        let (mut session, audio, _) = single_brick_session(2);
        session.state.ball.rect.pos = Vec2::new(402.0, 66.0);
        session.state.ball.vel = Vec2::new(0.0, -BALL_VEL_X);
        session.update(&TickInput::default());

        let played = audio.0.borrow();
        assert!(played.contains(&SoundEffect::BrickBreak));
        assert!(played.contains(&SoundEffect::LevelComplete));
    }

    #[test]
    fn test_level_complete_unlocks_next() {
        let (mut session, _, _) = single_brick_session(2);
        assert!(!session.progress().is_unlocked(2));

        session.state.ball.rect.pos = Vec2::new(402.0, 66.0);
        session.state.ball.vel = Vec2::new(0.0, -BALL_VEL_X);
        session.update(&TickInput::default());

        assert_eq!(session.state().phase, GamePhase::LevelComplete);
        assert!(session.progress().is_unlocked(2));
    }

    #[test]
    fn test_win_submits_total_exactly_once() {
        let (mut session, _, scores) = single_brick_session(1);
        session.state.ball.rect.pos = Vec2::new(402.0, 66.0);
        session.state.ball.vel = Vec2::new(0.0, -BALL_VEL_X);
        session.update(&TickInput::default());

        let skip = TickInput {
            skip: true,
            ..Default::default()
        };
        session.update(&skip);
        assert_eq!(session.state().phase, GamePhase::Win);
        assert_eq!(*scores.0.borrow(), vec![10]);

        // Idle ticks after Win never re-submit
        for _ in 0..10 {
            session.update(&TickInput::default());
        }
        assert_eq!(scores.0.borrow().len(), 1);
    }

    #[test]
    fn test_locked_level_select_is_rejected() {
        let (mut session, _, _) = single_brick_session(3);
        assert!(!session.select_level(2));
        assert_eq!(session.state().level, 1);
        assert!(session.select_level(1));
    }

    #[test]
    fn test_game_over_submits_banked_total() {
        let (mut session, audio, scores) = single_brick_session(1);
        session.state.total_score = 40;
        session.state.lives = 1;
        session.state.ball.rect.pos.y = BOARD_HEIGHT + 10.0;
        session.update(&TickInput::default());

        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert_eq!(*scores.0.borrow(), vec![40]);
        let played = audio.0.borrow();
        assert!(played.contains(&SoundEffect::BallOut));
        assert!(played.contains(&SoundEffect::GameOver));
    }

    #[test]
    fn test_hud_reports_countdown() {
        let (mut session, _, _) = single_brick_session(2);
        session.state.ball.rect.pos = Vec2::new(402.0, 66.0);
        session.state.ball.vel = Vec2::new(0.0, -BALL_VEL_X);
        session.update(&TickInput::default());

        struct HudGrab(Option<Hud>);
        impl RenderSink for HudGrab {
            fn draw_hud(&mut self, hud: &Hud) {
                self.0 = Some(*hud);
            }
        }

        let mut grab = HudGrab(None);
        session.render(&mut grab);
        let hud = grab.0.expect("hud drawn");
        assert_eq!(hud.phase, GamePhase::LevelComplete);
        let remaining = hud.next_level_in.expect("countdown running");
        assert!(remaining > 0.0 && remaining <= LEVEL_COMPLETE_DELAY_SECS);
    }
}
