//! Computer seat: perfect recall of every card it has flipped itself.
//!
//! ## Strategy
//!
//! 1. If the first card of its current pair is face up, look for another
//!    remembered card with the same face and take it.
//! 2. Otherwise flip a card it has never seen, chosen uniformly. Once every
//!    selectable card has been seen, choose uniformly among all of them.
//!
//! Cards revealed only by the opponent are never remembered, so the agent
//! plays better as the game goes on, limited by how often it gets a turn.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{AgentKind, CardIndex, GameRng, InvalidMove, Symbol};
use crate::engine::Board;

use super::Agent;

/// Memory-driven card chooser.
#[derive(Clone, Debug)]
pub struct ComputerAgent {
    /// Faces this agent has uncovered, by board position.
    memory: FxHashMap<CardIndex, Symbol>,

    /// First card of the pair this agent is in the middle of.
    pending: Option<(CardIndex, Symbol)>,

    /// Set by a rejected selection, cleared by the next attempt.
    invalid: bool,

    finished: bool,

    rng: GameRng,
}

impl ComputerAgent {
    /// Create an agent with an empty memory.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            memory: FxHashMap::default(),
            pending: None,
            invalid: false,
            finished: false,
            rng,
        }
    }

    /// The first card of the pair in progress, if any.
    #[must_use]
    pub fn pending(&self) -> Option<CardIndex> {
        self.pending.map(|(index, _)| index)
    }

    /// Whether the last selection was rejected and not yet retried.
    #[must_use]
    pub fn is_retrying(&self) -> bool {
        self.invalid
    }

    /// Record a face without it counting as a flip. Existing entries win.
    pub fn remember(&mut self, index: CardIndex, symbol: Symbol) {
        self.memory.entry(index).or_insert(symbol);
    }

    /// A remembered partner for the pending card.
    fn known_match(&self, board: &Board) -> Option<CardIndex> {
        let (pending, symbol) = self.pending?;

        self.memory
            .iter()
            .filter(|&(&index, &seen)| index != pending && seen == symbol)
            .map(|(&index, _)| index)
            .filter(|&index| board.is_selectable(index))
            .min()
    }

    /// Uniform draw from unseen cards, falling back to every selectable card.
    fn random_candidate(&mut self, board: &Board) -> Option<CardIndex> {
        let selectable: SmallVec<[CardIndex; 16]> = board
            .cards()
            .map(|card| card.index)
            .filter(|&index| board.is_selectable(index))
            .collect();

        let unseen: SmallVec<[CardIndex; 16]> = selectable
            .iter()
            .copied()
            .filter(|index| !self.memory.contains_key(index))
            .collect();

        let pool = if unseen.is_empty() { &selectable } else { &unseen };
        self.rng.choose(pool).copied()
    }
}

impl Agent for ComputerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Computer
    }

    fn choose_move(&mut self, board: &Board) -> Option<CardIndex> {
        if self.finished {
            return None;
        }
        if self.invalid {
            self.invalid = false;
            log::debug!("computer retrying after a rejected selection");
        }

        self.known_match(board).or_else(|| self.random_candidate(board))
    }

    fn observe(&mut self, index: CardIndex, symbol: Symbol) {
        self.remember(index, symbol);

        self.pending = match self.pending {
            None => Some((index, symbol)),
            Some(_) => None,
        };
    }

    fn invalid_move(&mut self, reason: InvalidMove) {
        log::debug!("computer selection rejected: {}", reason);
        self.invalid = true;
    }

    fn complete(&mut self) {
        self.finished = true;
    }

    fn memory(&self) -> Option<&FxHashMap<CardIndex, Symbol>> {
        Some(&self.memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use std::time::Duration;

    const A: Symbol = Symbol(0);
    const B: Symbol = Symbol(1);
    const C: Symbol = Symbol(2);

    fn idx(i: usize) -> CardIndex {
        CardIndex::new(i)
    }

    fn board(layout: &[Symbol]) -> Board {
        Board::new(Deck::from_symbols(layout).unwrap(), 0, Duration::ZERO)
    }

    #[test]
    fn test_remembered_pair_is_taken() {
        // memory {0: A, 3: A}, pending 0 => picks 3
        let mut board = board(&[A, B, B, A]);
        let mut agent = ComputerAgent::new(GameRng::new(42));

        board.flip(idx(0)).unwrap();
        agent.observe(idx(0), A);
        agent.remember(idx(3), A);

        assert_eq!(agent.pending(), Some(idx(0)));
        assert_eq!(agent.choose_move(&board), Some(idx(3)));
    }

    #[test]
    fn test_pair_choice_is_deterministic_across_seeds() {
        for seed in 0..16 {
            let mut board = board(&[A, B, C, A, C, B]);
            let mut agent = ComputerAgent::new(GameRng::new(seed));

            agent.remember(idx(5), B);
            board.flip(idx(1)).unwrap();
            agent.observe(idx(1), B);

            assert_eq!(agent.choose_move(&board), Some(idx(5)));
        }
    }

    #[test]
    fn test_unseen_cards_preferred() {
        let board = board(&[A, B, A, B]);
        let mut agent = ComputerAgent::new(GameRng::new(3));
        agent.remember(idx(0), A);
        agent.remember(idx(1), B);
        agent.remember(idx(2), A);

        // No pending card, so only the one unseen card qualifies
        for _ in 0..10 {
            assert_eq!(agent.choose_move(&board), Some(idx(3)));
        }
    }

    #[test]
    fn test_falls_back_to_seen_cards() {
        let board = board(&[A, B, A, B]);
        let mut agent = ComputerAgent::new(GameRng::new(3));
        for (i, s) in [A, B, A, B].into_iter().enumerate() {
            agent.remember(idx(i), s);
        }

        let choice = agent.choose_move(&board).unwrap();
        assert!(choice.raw() < 4);
    }

    #[test]
    fn test_never_chooses_matched_or_open_cards() {
        let mut board = board(&[A, B, A, B, C, C]);
        let t = {
            board.flip(idx(0)).unwrap();
            *board.flip(idx(2)).unwrap().ticket().unwrap()
        };
        board.resolve(&t).unwrap();
        board.flip(idx(4)).unwrap();

        let mut agent = ComputerAgent::new(GameRng::new(11));
        for _ in 0..50 {
            let choice = agent.choose_move(&board).unwrap();
            assert!([idx(1), idx(3), idx(5)].contains(&choice));
        }
    }

    #[test]
    fn test_pending_toggles_per_pair() {
        let mut agent = ComputerAgent::new(GameRng::new(1));

        agent.observe(idx(0), A);
        assert_eq!(agent.pending(), Some(idx(0)));

        agent.observe(idx(1), B);
        assert_eq!(agent.pending(), None);

        agent.observe(idx(2), A);
        assert_eq!(agent.pending(), Some(idx(2)));
        assert_eq!(agent.memory().unwrap().len(), 3);
    }

    #[test]
    fn test_memory_keeps_first_sighting() {
        let mut agent = ComputerAgent::new(GameRng::new(1));
        agent.remember(idx(0), A);
        agent.remember(idx(0), B);
        assert_eq!(agent.memory().unwrap().get(&idx(0)), Some(&A));
    }

    #[test]
    fn test_invalid_flag_cleared_on_retry() {
        let board = board(&[A, B, A, B]);
        let mut agent = ComputerAgent::new(GameRng::new(1));

        agent.invalid_move(InvalidMove::Locked);
        assert!(agent.is_retrying());

        assert!(agent.choose_move(&board).is_some());
        assert!(!agent.is_retrying());
    }

    #[test]
    fn test_finished_agent_stops() {
        let board = board(&[A, B, A, B]);
        let mut agent = ComputerAgent::new(GameRng::new(1));

        agent.complete();
        assert_eq!(agent.choose_move(&board), None);
    }
}
