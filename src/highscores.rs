//! High score leaderboard
//!
//! Tracks the top 10 totals, sorted descending. Persists as JSON next to
//! the binary; a missing or unreadable file just means a fresh board.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Destination for a finished session's total score.
///
/// The session submits through this seam exactly once per run; swapping the
/// implementation swaps the leaderboard backend without touching the sim.
pub trait ScoreSink {
    fn submit(&mut self, total: u64);
}

/// Sink that discards scores (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn submit(&mut self, _total: u64) {}
}

/// A single leaderboard entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score if it qualifies, keeping the board sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None.
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from a JSON file, falling back to an empty board
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("high score file unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save to a JSON file; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save high scores: {err}");
                } else {
                    log::info!("high scores saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("could not serialize high scores: {err}"),
        }
    }
}

impl ScoreSink for HighScores {
    fn submit(&mut self, total: u64) {
        if let Some(rank) = self.add_score(total) {
            log::info!("score {total} entered the leaderboard at rank {rank}");
        }
    }
}
