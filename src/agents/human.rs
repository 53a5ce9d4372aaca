//! Human seat.

use crate::core::{AgentKind, CardIndex};
use crate::engine::Board;

use super::Agent;

/// Waits for selections from the renderer.
#[derive(Clone, Debug, Default)]
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn choose_move(&mut self, _board: &Board) -> Option<CardIndex> {
        None
    }
}
