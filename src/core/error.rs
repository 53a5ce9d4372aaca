//! Error types.
//!
//! None of these are fatal. Configuration problems are reported when a game
//! is built; rejected selections are ordinary results the caller (or the
//! computer agent) reacts to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{CardIndex, Symbol};

/// A game could not be set up as requested.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol set must contain at least one face")]
    NoSymbols,

    #[error("symbol set has {0} faces; at most 65535 are supported")]
    TooManySymbols(usize),

    #[error("face name '{0}' appears more than once")]
    DuplicateSymbol(String),

    #[error("{symbol} appears {count} times in the layout; every symbol must appear exactly twice")]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("layout uses {0}, which is not in the symbol set")]
    UnknownSymbol(Symbol),

    #[error("a game needs at least one pair of cards")]
    EmptyDeck,

    #[error("a game needs 1 or 2 seats (got {0})")]
    SeatCount(usize),
}

/// A card selection was rejected. No state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum InvalidMove {
    #[error("a pair is still being resolved")]
    Locked,

    #[error("{0} is already matched")]
    AlreadyMatched(CardIndex),

    #[error("{0} is already open")]
    AlreadyOpen(CardIndex),

    #[error("{index} is off the board ({card_total} cards)")]
    OutOfRange { index: CardIndex, card_total: usize },

    #[error("the game is over")]
    GameOver,
}

/// A resolution ticket no longer applies to the board.
///
/// Issued for tickets from before a restart, or tickets that were already
/// resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("resolution ticket for generation {ticket_generation} is stale (board is at {board_generation})")]
pub struct StaleResolution {
    pub ticket_generation: u64,
    pub board_generation: u64,
}
