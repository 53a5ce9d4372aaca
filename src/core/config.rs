//! Game configuration types.
//!
//! Sessions configure the engine at startup by providing a `GameConfig`:
//! - requested board size
//! - who sits at the board (`AgentKind` per seat)
//! - how long a flipped pair stays visible before it resolves
//! - which high-score policy applies (`ScoreMode`)

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Waits for selections delivered by the renderer.
    Human,
    /// Chooses its own cards from what it has seen.
    Computer,
}

impl AgentKind {
    /// Display prefix used for seat names ("Player 1", "AI 2").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AgentKind::Human => "Player",
            AgentKind::Computer => "AI",
        }
    }
}

/// Which number a high score tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreMode {
    /// Pairs found. Higher is better.
    #[default]
    Matches,
    /// Cards flipped. Lower is better.
    Moves,
}

impl ScoreMode {
    /// Whether `candidate` should replace the stored `best`.
    ///
    /// ```
    /// use memory_match::core::ScoreMode;
    ///
    /// assert!(ScoreMode::Matches.is_better(4, 3));
    /// assert!(ScoreMode::Moves.is_better(14, 20));
    /// assert!(!ScoreMode::Moves.is_better(20, 20));
    /// ```
    #[must_use]
    pub const fn is_better(self, candidate: u32, best: u32) -> bool {
        match self {
            ScoreMode::Matches => candidate > best,
            ScoreMode::Moves => candidate < best,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Requested number of cards. Clamped to what the symbol set supports
    /// when the deck is generated; values below 2 select the largest deck.
    pub card_total: usize,

    /// How long a flipped pair stays visible before it resolves.
    pub presentation_delay: Duration,

    /// High-score policy.
    pub score_mode: ScoreMode,

    /// One entry per seat, in turn order.
    pub seats: Vec<AgentKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            card_total: 12,
            presentation_delay: Duration::from_millis(500),
            score_mode: ScoreMode::default(),
            seats: vec![AgentKind::Human, AgentKind::Computer],
        }
    }
}

impl GameConfig {
    /// Create the default configuration (human vs computer, 12 cards).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested number of cards.
    #[must_use]
    pub fn with_card_total(mut self, card_total: usize) -> Self {
        self.card_total = card_total;
        self
    }

    /// Set the presentation delay.
    #[must_use]
    pub fn with_presentation_delay(mut self, delay: Duration) -> Self {
        self.presentation_delay = delay;
        self
    }

    /// Set the high-score policy.
    #[must_use]
    pub fn with_score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = mode;
        self
    }

    /// Replace the seats.
    #[must_use]
    pub fn with_seats(mut self, seats: impl Into<Vec<AgentKind>>) -> Self {
        self.seats = seats.into();
        self
    }

    /// A single human playing alone.
    #[must_use]
    pub fn solo(self) -> Self {
        self.with_seats([AgentKind::Human])
    }

    /// Two computer seats, useful for simulations.
    #[must_use]
    pub fn computer_vs_computer(self) -> Self {
        self.with_seats([AgentKind::Computer, AgentKind::Computer])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.card_total, 12);
        assert_eq!(config.presentation_delay, Duration::from_millis(500));
        assert_eq!(config.score_mode, ScoreMode::Matches);
        assert_eq!(config.seats, vec![AgentKind::Human, AgentKind::Computer]);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_card_total(8)
            .with_presentation_delay(Duration::ZERO)
            .with_score_mode(ScoreMode::Moves)
            .computer_vs_computer();

        assert_eq!(config.card_total, 8);
        assert_eq!(config.presentation_delay, Duration::ZERO);
        assert_eq!(config.score_mode, ScoreMode::Moves);
        assert_eq!(config.seats, vec![AgentKind::Computer, AgentKind::Computer]);
    }

    #[test]
    fn test_solo() {
        let config = GameConfig::new().solo();
        assert_eq!(config.seats, vec![AgentKind::Human]);
    }

    #[test]
    fn test_score_mode_policies() {
        assert!(ScoreMode::Matches.is_better(3, 2));
        assert!(!ScoreMode::Matches.is_better(2, 2));
        assert!(ScoreMode::Moves.is_better(10, 12));
        assert!(!ScoreMode::Moves.is_better(12, 10));
    }

    #[test]
    fn test_labels() {
        assert_eq!(AgentKind::Human.label(), "Player");
        assert_eq!(AgentKind::Computer.label(), "AI");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_card_total(10).solo();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
