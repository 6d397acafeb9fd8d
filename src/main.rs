//! Headless demo runner
//!
//! Plays a session with a trivial autopilot (paddle chases the ball) and
//! logs the outcome. Useful for smoke-testing the simulation and the
//! leaderboard wiring without a frontend.

use std::path::PathBuf;

use brickstorm::audio::NullAudio;
use brickstorm::consts::SIM_DT;
use brickstorm::highscores::ScoreSink;
use brickstorm::sim::{ClassicLayouts, GamePhase, TickInput};
use brickstorm::{HighScores, Session};

const SCORES_FILE: &str = "highscores.json";
const MAX_TICKS: u64 = 60 * 60 * 30; // 30 simulated minutes

/// Leaderboard that persists to disk on every submission
struct FileScores {
    scores: HighScores,
    path: PathBuf,
}

impl ScoreSink for FileScores {
    fn submit(&mut self, total: u64) {
        self.scores.submit(total);
        self.scores.save(&self.path);
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB51C2);
    log::info!("brickstorm headless demo, seed {seed}");

    let path = PathBuf::from(SCORES_FILE);
    let scores = FileScores {
        scores: HighScores::load(&path),
        path,
    };
    let mut session = Session::new(
        seed,
        Box::new(ClassicLayouts),
        Box::new(NullAudio),
        Box::new(scores),
    );

    for _ in 0..MAX_TICKS {
        let state = session.state();
        let ball_x = state.ball.rect.center().x;
        let paddle_x = state.paddle.rect.center().x;
        let input = TickInput {
            left: ball_x < paddle_x - 2.0,
            right: ball_x > paddle_x + 2.0,
            ..Default::default()
        };
        session.update(&input);

        match session.state().phase {
            GamePhase::GameOver | GamePhase::Win => break,
            _ => {}
        }
    }

    let state = session.state();
    log::info!(
        "finished after {:.0}s simulated: {:?} on level {}, total score {}",
        state.time_ticks as f32 * SIM_DT,
        state.phase,
        state.level,
        state.total_score
    );
}
