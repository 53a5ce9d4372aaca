//! Seats: an agent plus the counters the score display shows for it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{AgentKind, CardIndex, PlayerId, Symbol};

/// Per-seat counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Accepted card flips.
    pub moves: u32,
    /// Pairs found.
    pub score: u32,
}

/// One player at the board.
#[derive(Debug)]
pub struct Seat {
    kind: AgentKind,
    pub(crate) stats: PlayerStats,
    pub(crate) agent: Box<dyn Agent>,
}

impl Seat {
    /// Seat a new agent with zeroed counters.
    #[must_use]
    pub fn new(agent: Box<dyn Agent>) -> Self {
        Self {
            kind: agent.kind(),
            stats: PlayerStats::default(),
            agent,
        }
    }

    /// Who controls this seat.
    #[must_use]
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// The agent sitting here.
    #[must_use]
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    /// What a computer seat remembers; `None` for seats without memory.
    #[must_use]
    pub fn computer_memory(&self) -> Option<&FxHashMap<CardIndex, Symbol>> {
        self.agent.memory()
    }

    /// Display name, e.g. "Player 1" or "AI 2".
    #[must_use]
    pub fn name(&self, player: PlayerId) -> String {
        format!("{} {}", self.kind.label(), player.number())
    }
}
