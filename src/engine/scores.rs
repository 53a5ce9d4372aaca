//! High-score hook.
//!
//! Storage itself belongs to the embedding application; the engine only
//! needs `get`/`set` and applies a keep-if-better policy at game completion.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, ScoreMode};

/// Persistent high-score store.
pub trait HighScoreStore: Send + std::fmt::Debug {
    /// Stored best for `key`, if any.
    fn get(&self, key: &str) -> Option<u32>;

    /// Replace the stored best for `key`.
    fn set(&mut self, key: &str, value: u32);
}

/// In-process store, for tests and sessions without persistence.
#[derive(Clone, Debug, Default)]
pub struct InMemoryScores {
    entries: FxHashMap<String, u32>,
}

impl InMemoryScores {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryScores {
    fn get(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Store key for a seat's high score.
///
/// ```
/// use memory_match::core::PlayerId;
/// use memory_match::engine::high_score_key;
///
/// assert_eq!(high_score_key(PlayerId::FIRST), "p1highScore");
/// ```
#[must_use]
pub fn high_score_key(player: PlayerId) -> String {
    format!("p{}highScore", player.number())
}

/// Store `value` under `key` if there is no entry yet or it beats the entry.
///
/// Returns true when the store was updated.
pub fn record_if_better(store: &mut dyn HighScoreStore, key: &str, value: u32, mode: ScoreMode) -> bool {
    match store.get(key) {
        Some(best) if !mode.is_better(value, best) => false,
        _ => {
            store.set(key, value);
            true
        }
    }
}
