//! Level unlock progress
//!
//! Completing a level unlocks the next one, up to the last. The unlocked
//! index bounds what a level-select menu may offer.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEVEL;

/// Highest level the player may start from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progress {
    unlocked_level: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self { unlocked_level: 1 }
    }

    pub fn unlocked_level(&self) -> u32 {
        self.unlocked_level
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= 1 && level <= self.unlocked_level
    }

    /// Record a completed level, unlocking its successor.
    /// Replaying an earlier level never moves the unlock backwards.
    pub fn unlock_next(&mut self, completed: u32) {
        let next = (completed + 1).min(MAX_LEVEL);
        if next > self.unlocked_level {
            self.unlocked_level = next;
            log::info!("level {next} unlocked");
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_only_level_one() {
        let progress = Progress::new();
        assert!(progress.is_unlocked(1));
        assert!(!progress.is_unlocked(2));
        assert!(!progress.is_unlocked(0));
    }

    #[test]
    fn test_completion_unlocks_successor() {
        let mut progress = Progress::new();
        progress.unlock_next(1);
        assert_eq!(progress.unlocked_level(), 2);
        assert!(progress.is_unlocked(2));
        assert!(!progress.is_unlocked(3));
    }

    #[test]
    fn test_replay_never_regresses() {
        let mut progress = Progress::new();
        progress.unlock_next(3);
        assert_eq!(progress.unlocked_level(), 4);
        progress.unlock_next(1);
        assert_eq!(progress.unlocked_level(), 4);
    }

    #[test]
    fn test_unlock_caps_at_last_level() {
        let mut progress = Progress::new();
        progress.unlock_next(MAX_LEVEL);
        assert_eq!(progress.unlocked_level(), MAX_LEVEL);
    }
}
