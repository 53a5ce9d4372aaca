//! Agents: whoever picks the next card for a seat.
//!
//! The engine invites the active seat's agent to move after every accepted
//! flip and every resolution. A human agent answers `None` and the engine
//! waits for the renderer to deliver a selection; a computer agent answers
//! with a card straight away. Either way the selection runs through the same
//! board state machine.

pub mod computer;
pub mod human;

pub use computer::ComputerAgent;
pub use human::HumanAgent;

use rustc_hash::FxHashMap;

use crate::core::{AgentKind, CardIndex, GameRng, InvalidMove, Symbol};
use crate::engine::Board;

/// Move-selection actor for one seat.
pub trait Agent: Send + std::fmt::Debug {
    /// Who this agent is.
    fn kind(&self) -> AgentKind;

    /// Pick the next card to flip, or `None` to wait for external input.
    fn choose_move(&mut self, board: &Board) -> Option<CardIndex>;

    /// One of this agent's own selections was accepted and revealed `symbol`.
    fn observe(&mut self, _index: CardIndex, _symbol: Symbol) {}

    /// One of this agent's selections was rejected.
    fn invalid_move(&mut self, _reason: InvalidMove) {}

    /// The game is over; no further moves will be requested.
    fn complete(&mut self) {}

    /// Faces this agent remembers, for agents that remember anything.
    fn memory(&self) -> Option<&FxHashMap<CardIndex, Symbol>> {
        None
    }
}

/// Build a fresh agent for a seat.
///
/// Computer agents get their own RNG stream.
#[must_use]
pub fn for_kind(kind: AgentKind, rng: &mut GameRng) -> Box<dyn Agent> {
    match kind {
        AgentKind::Human => Box::new(HumanAgent::new()),
        AgentKind::Computer => Box::new(ComputerAgent::new(rng.fork())),
    }
}
