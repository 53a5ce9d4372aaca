//! Observable game events.
//!
//! The engine queues one event per visible change. Renderers and score
//! displays drain the queue after each call into the engine; nothing they do
//! with events feeds back into game state.

use serde::{Deserialize, Serialize};

use crate::core::{CardIndex, InvalidMove, PlayerId, Symbol};

use super::result::GameSummary;

/// Something a renderer or score display may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh board was dealt.
    GameStarted { generation: u64, card_total: usize },

    /// A card was flipped face up.
    CardRevealed { player: PlayerId, index: CardIndex, symbol: Symbol },

    /// A seat's move counter changed.
    MoveCounted { player: PlayerId, moves: u32 },

    /// A selection was rejected.
    InvalidMove { player: PlayerId, reason: InvalidMove },

    /// Both cards of a pair stay face up for good.
    CardsMatched { player: PlayerId, pair: [CardIndex; 2] },

    /// A seat's score changed.
    Scored { player: PlayerId, score: u32 },

    /// Both cards of a mismatched pair were turned back down.
    CardsHidden { pair: [CardIndex; 2] },

    /// The turn passed to another seat.
    TurnChanged { player: PlayerId },

    /// A stored high score was replaced.
    HighScore { player: PlayerId, value: u32 },

    /// Every pair has been found.
    GameOver(GameSummary),
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::MoveCounted { .. } => "move_counted",
            GameEvent::InvalidMove { .. } => "invalid_move",
            GameEvent::CardsMatched { .. } => "cards_matched",
            GameEvent::Scored { .. } => "scored",
            GameEvent::CardsHidden { .. } => "cards_hidden",
            GameEvent::TurnChanged { .. } => "turn_changed",
            GameEvent::HighScore { .. } => "high_score",
            GameEvent::GameOver(_) => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let events = vec![
            GameEvent::CardRevealed {
                player: PlayerId::FIRST,
                index: CardIndex::new(3),
                symbol: Symbol::new(1),
            },
            GameEvent::InvalidMove {
                player: PlayerId::SECOND,
                reason: InvalidMove::Locked,
            },
            GameEvent::CardsHidden { pair: [CardIndex::new(0), CardIndex::new(5)] },
        ];

        let json = serde_json::to_string(&events).unwrap();
        let restored: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, restored);
    }

    #[test]
    fn test_names() {
        assert_eq!(GameEvent::TurnChanged { player: PlayerId::FIRST }.name(), "turn_changed");
    }
}
