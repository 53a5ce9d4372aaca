//! # memory-match
//!
//! Engine for the memory card game: flip two cards, keep them if they match.
//!
//! ## Design Principles
//!
//! 1. **Cards are the source of truth**: renderers read `Board` and never
//!    store game data of their own.
//!
//! 2. **One engine per session**: all state lives in a `GameEngine` value
//!    owned by whatever runs the event loop. No globals.
//!
//! 3. **Deferred resolution is data**: the presentation delay is a
//!    `ResolutionTicket` the event loop schedules and hands back. Tickets
//!    carry the board generation, so a restart invalidates them.
//!
//! ## Modules
//!
//! - `core`: Player IDs, cards and symbols, RNG, configuration, errors
//! - `deck`: Paired, shuffled deck generation
//! - `agents`: Human and computer move selection
//! - `engine`: Board state machine, turns, scoring, events

pub mod core;
pub mod deck;
pub mod agents;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    AgentKind, Card, CardIndex, ConfigError, GameConfig, GameRng, InvalidMove, PlayerId, PlayerMap,
    ScoreMode, StaleResolution, Symbol, SymbolSet,
};

pub use crate::deck::{generate, supported_total, Deck};

pub use crate::agents::{Agent, ComputerAgent, HumanAgent};

pub use crate::engine::{
    Board, Flip, GameEngine, GameEvent, GameResult, GameSummary, HighScoreStore, InMemoryScores,
    Invitation, Phase, PlayerStats, Resolution, ResolutionTicket, Resolved,
};
