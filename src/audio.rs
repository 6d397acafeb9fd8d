//! Audio hook
//!
//! The simulation never plays sound itself; it reports events and the
//! session maps them onto `SoundEffect`s for whatever sink is wired up.
//! Headless runs and tests use `NullAudio`.

use crate::sim::{BrickKind, GameEvent};

/// Distinct sound effects a frontend can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    WallHit,
    PaddleHit,
    BrickCrack,
    BrickBreak,
    UnbreakableClink,
    Explosion,
    PowerUpCollect,
    BallOut,
    Pause,
    LevelComplete,
    GameOver,
    Win,
}

/// Playback seam, injected into the session
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Map a simulation event to the effect it should trigger, if any
pub fn effect_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallHit => Some(SoundEffect::WallHit),
        GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
        GameEvent::BrickCracked => Some(SoundEffect::BrickCrack),
        GameEvent::BrickShruggedOff => Some(SoundEffect::UnbreakableClink),
        // The blast gets its own effect; individual victims stay silent
        GameEvent::BrickDestroyed {
            kind: BrickKind::Explosive,
        } => None,
        GameEvent::BrickDestroyed { .. } => Some(SoundEffect::BrickBreak),
        GameEvent::Explosion => Some(SoundEffect::Explosion),
        GameEvent::PowerUpCollected { .. } => Some(SoundEffect::PowerUpCollect),
        GameEvent::LifeLost => Some(SoundEffect::BallOut),
        GameEvent::PauseToggled => Some(SoundEffect::Pause),
        GameEvent::LevelComplete { .. } => Some(SoundEffect::LevelComplete),
        GameEvent::GameOver => Some(SoundEffect::GameOver),
        GameEvent::Win => Some(SoundEffect::Win),
        GameEvent::ScoreSubmitted { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_destruction_maps_to_break() {
        assert_eq!(
            effect_for(&GameEvent::BrickDestroyed {
                kind: BrickKind::Normal
            }),
            Some(SoundEffect::BrickBreak)
        );
    }

    #[test]
    fn test_explosive_destruction_is_covered_by_the_blast() {
        assert_eq!(
            effect_for(&GameEvent::BrickDestroyed {
                kind: BrickKind::Explosive
            }),
            None
        );
        assert_eq!(
            effect_for(&GameEvent::Explosion),
            Some(SoundEffect::Explosion)
        );
    }

    #[test]
    fn test_score_submission_is_silent() {
        assert_eq!(effect_for(&GameEvent::ScoreSubmitted { total: 10 }), None);
    }
}
