//! Game engine: board state machine, seats, turns, scoring.
//!
//! ## Key Types
//!
//! - `Board`: cards plus the reveal/match state machine
//! - `ResolutionTicket`: deferred resolution of a flipped pair
//! - `GameEngine`: one session; owns the board and the seats
//! - `GameEvent`: observable changes for renderers and score displays
//! - `GameResult` / `GameSummary`: the outcome of a finished game
//! - `HighScoreStore`: storage hook for high scores

pub mod board;
pub mod event;
pub mod game;
pub mod result;
pub mod scores;
pub mod seat;

pub use board::{Board, Flip, PairOutcome, Phase, Resolution, ResolutionTicket, RoundState};
pub use event::GameEvent;
pub use game::{GameEngine, Invitation, Resolved, MAX_SELECTION_ATTEMPTS};
pub use result::{GameResult, GameSummary, SeatSummary};
pub use scores::{high_score_key, record_if_better, HighScoreStore, InMemoryScores};
pub use seat::{PlayerStats, Seat};
