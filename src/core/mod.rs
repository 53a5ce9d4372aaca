//! Core types: players, cards, RNG, configuration, errors.
//!
//! Everything above this module (deck generation, agents, the engine) is
//! built from these pieces.

pub mod player;
pub mod card;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_SEATS};
pub use card::{Card, CardIndex, Symbol, SymbolSet, DEFAULT_FACES};
pub use rng::GameRng;
pub use config::{AgentKind, GameConfig, ScoreMode};
pub use error::{ConfigError, InvalidMove, StaleResolution};
