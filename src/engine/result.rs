//! Game outcome and the summary emitted when a game completes.

use serde::{Deserialize, Serialize};

use crate::core::{AgentKind, PlayerId};

use super::seat::PlayerStats;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly highest score.
    Winner(PlayerId),
    /// Top score shared (no winner).
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    ///
    /// The highest score wins outright; a shared top score is a draw. A
    /// single seat always wins.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    /// use memory_match::engine::GameResult;
    ///
    /// let p1 = PlayerId::FIRST;
    /// let p2 = PlayerId::SECOND;
    ///
    /// assert_eq!(GameResult::from_scores([(p1, 3), (p2, 2)]), GameResult::Winner(p1));
    /// assert_eq!(GameResult::from_scores([(p1, 2), (p2, 2)]), GameResult::Draw);
    /// ```
    pub fn from_scores(scores: impl IntoIterator<Item = (PlayerId, u32)>) -> Self {
        let mut best: Option<(PlayerId, u32)> = None;
        let mut tied = false;

        for (player, score) in scores {
            match best {
                Some((_, top)) if score == top => tied = true,
                Some((_, top)) if score < top => {}
                _ => {
                    best = Some((player, score));
                    tied = false;
                }
            }
        }

        match best {
            Some((player, _)) if !tied => GameResult::Winner(player),
            _ => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Final line for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub player: PlayerId,
    /// Display name, e.g. "Player 1" or "AI 2".
    pub name: String,
    pub kind: AgentKind,
    pub stats: PlayerStats,
}

/// Game-over report handed to the score display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,
    pub seats: Vec<SeatSummary>,
}

impl GameSummary {
    /// Display name of the winner, or `None` on a draw.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.result.winner()?;
        self.seats
            .iter()
            .find(|s| s.player == winner)
            .map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::FIRST;
    const P2: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_higher_score_wins() {
        assert_eq!(GameResult::from_scores([(P1, 3), (P2, 2)]), GameResult::Winner(P1));
        assert_eq!(GameResult::from_scores([(P1, 1), (P2, 5)]), GameResult::Winner(P2));
    }

    #[test]
    fn test_tie_is_draw() {
        assert_eq!(GameResult::from_scores([(P1, 2), (P2, 2)]), GameResult::Draw);
        assert_eq!(GameResult::from_scores([(P1, 0), (P2, 0)]), GameResult::Draw);
    }

    #[test]
    fn test_single_seat_wins() {
        assert_eq!(GameResult::from_scores([(P1, 0)]), GameResult::Winner(P1));
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(P2);
        assert!(!result.is_winner(P1));
        assert!(result.is_winner(P2));
        assert_eq!(result.winner(), Some(P2));

        assert!(!GameResult::Draw.is_winner(P1));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn test_winner_name() {
        let summary = GameSummary {
            result: GameResult::Winner(P2),
            seats: vec![
                SeatSummary {
                    player: P1,
                    name: "Player 1".to_string(),
                    kind: AgentKind::Human,
                    stats: PlayerStats { moves: 12, score: 2 },
                },
                SeatSummary {
                    player: P2,
                    name: "AI 2".to_string(),
                    kind: AgentKind::Computer,
                    stats: PlayerStats { moves: 10, score: 4 },
                },
            ],
        };

        assert_eq!(summary.winner_name(), Some("AI 2"));

        let json = serde_json::to_string(&summary).unwrap();
        let restored: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, restored);
    }
}
