//! The board and its reveal/match state machine.
//!
//! ```text
//!   Idle ──flip──▶ OneOpen ──flip──▶ Resolving ──resolve──▶ Idle
//!                                        │
//!                                        └──resolve (last pair)──▶ Complete
//! ```
//!
//! A second flip locks the board and hands out a [`ResolutionTicket`]. The
//! owner of the event loop waits for the ticket's delay and passes it back to
//! [`Board::resolve`]. Tickets are stamped with the board generation, so a
//! ticket issued before a restart can never touch the new board.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardIndex, InvalidMove, StaleResolution, Symbol};
use crate::deck::Deck;

/// Where the state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card open.
    Idle,
    /// One card flipped, waiting for the second.
    OneOpen,
    /// Two cards flipped; the board is locked until the ticket resolves.
    Resolving,
    /// Every pair found.
    Complete,
}

/// Whether a flipped pair matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOutcome {
    Match,
    Mismatch,
}

/// A deferred resolution for a flipped pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Board generation the ticket belongs to.
    pub generation: u64,
    /// The open card followed by the card that was just flipped.
    pub pair: [CardIndex; 2],
    /// Decided at flip time; applied at resolution.
    pub outcome: PairOutcome,
    /// How long both faces stay visible before resolving.
    pub delay: Duration,
}

/// Result of an accepted flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flip {
    /// First card of a pair. The board stays unlocked.
    Opened { index: CardIndex, symbol: Symbol },
    /// Second card of a pair. The board is locked until `ticket` resolves.
    Pending {
        index: CardIndex,
        symbol: Symbol,
        ticket: ResolutionTicket,
    },
}

impl Flip {
    /// The card that was flipped.
    #[must_use]
    pub fn index(&self) -> CardIndex {
        match self {
            Flip::Opened { index, .. } | Flip::Pending { index, .. } => *index,
        }
    }

    /// The face that was revealed.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        match self {
            Flip::Opened { symbol, .. } | Flip::Pending { symbol, .. } => *symbol,
        }
    }

    /// The resolution ticket, if this flip completed a pair.
    #[must_use]
    pub fn ticket(&self) -> Option<&ResolutionTicket> {
        match self {
            Flip::Opened { .. } => None,
            Flip::Pending { ticket, .. } => Some(ticket),
        }
    }
}

/// What a resolved ticket did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Both cards are now matched.
    Matched {
        pair: [CardIndex; 2],
        symbol: Symbol,
        /// This was the last pair on the board.
        complete: bool,
    },
    /// Both cards are face down again.
    Mismatched { pair: [CardIndex; 2] },
}

/// Mutable payload of the state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// First card of the pair being played.
    pub open: Option<CardIndex>,
    /// Most recently flipped card.
    pub current: Option<CardIndex>,
    /// Set while a pair is resolving; blocks further flips.
    pub locked: bool,
    /// Pairs found so far.
    pub matches_found: usize,
}

/// Cards plus round state for one game.
///
/// Backed by `im::Vector`, so cloning a board for a renderer snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
    round: RoundState,
    generation: u64,
    pending: Option<ResolutionTicket>,
    presentation_delay: Duration,
}

impl Board {
    /// Lay out a deck face down.
    #[must_use]
    pub fn new(deck: Deck, generation: u64, presentation_delay: Duration) -> Self {
        Self {
            cards: deck.into_cards().into_iter().collect(),
            round: RoundState::default(),
            generation,
            pending: None,
            presentation_delay,
        }
    }

    // === Queries ===

    /// Number of cards on the board.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.cards.len()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    /// Cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Round state.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Generation stamp for resolution tickets.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The ticket waiting to be resolved, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ResolutionTicket> {
        self.pending.as_ref()
    }

    /// The open card, if one is waiting for its partner.
    #[must_use]
    pub fn open(&self) -> Option<CardIndex> {
        self.round.open
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matches_found(&self) -> usize {
        self.round.matches_found
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.matches_found == self.pair_count()
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.round.locked {
            Phase::Resolving
        } else if self.round.open.is_some() {
            Phase::OneOpen
        } else {
            Phase::Idle
        }
    }

    /// Check whether flipping `index` would be accepted right now.
    pub fn check(&self, index: CardIndex) -> Result<&Card, InvalidMove> {
        if self.is_complete() {
            return Err(InvalidMove::GameOver);
        }
        let card = self.card(index).ok_or(InvalidMove::OutOfRange {
            index,
            card_total: self.card_total(),
        })?;
        if self.round.locked {
            return Err(InvalidMove::Locked);
        }
        if card.matched {
            return Err(InvalidMove::AlreadyMatched(index));
        }
        if self.round.open == Some(index) {
            return Err(InvalidMove::AlreadyOpen(index));
        }
        Ok(card)
    }

    /// Whether flipping `index` would be accepted right now.
    #[must_use]
    pub fn is_selectable(&self, index: CardIndex) -> bool {
        self.check(index).is_ok()
    }

    // === Transitions ===

    /// Flip a card.
    ///
    /// Rejections leave the board untouched.
    pub fn flip(&mut self, index: CardIndex) -> Result<Flip, InvalidMove> {
        let symbol = self.check(index)?.symbol;

        self.round.locked = true;
        self.round.current = Some(index);
        if let Some(card) = self.cards.get_mut(index.raw()) {
            card.revealed = true;
        }

        let Some(open) = self.round.open else {
            // A single flip never holds the lock
            self.round.open = Some(index);
            self.round.locked = false;
            return Ok(Flip::Opened { index, symbol });
        };

        let open_symbol = self.cards.get(open.raw()).map(|c| c.symbol);
        let outcome = if open_symbol == Some(symbol) {
            PairOutcome::Match
        } else {
            PairOutcome::Mismatch
        };

        let ticket = ResolutionTicket {
            generation: self.generation,
            pair: [open, index],
            outcome,
            delay: self.presentation_delay,
        };
        self.pending = Some(ticket);

        Ok(Flip::Pending { index, symbol, ticket })
    }

    /// Apply a pending resolution.
    ///
    /// Fails without touching the board if the ticket is from another
    /// generation or has already been resolved.
    pub fn resolve(&mut self, ticket: &ResolutionTicket) -> Result<Resolution, StaleResolution> {
        if ticket.generation != self.generation || self.pending.as_ref() != Some(ticket) {
            return Err(StaleResolution {
                ticket_generation: ticket.generation,
                board_generation: self.generation,
            });
        }
        self.pending = None;

        let pair = ticket.pair;
        let matched = ticket.outcome == PairOutcome::Match;
        for index in pair {
            if let Some(card) = self.cards.get_mut(index.raw()) {
                card.revealed = matched;
                card.matched = matched;
            }
        }

        self.round.open = None;
        self.round.current = None;
        self.round.locked = false;

        if !matched {
            return Ok(Resolution::Mismatched { pair });
        }

        self.round.matches_found += 1;
        let symbol = self.cards.get(pair[0].raw()).map_or(Symbol::new(0), |c| c.symbol);
        Ok(Resolution::Matched {
            pair,
            symbol,
            complete: self.is_complete(),
        })
    }
}
