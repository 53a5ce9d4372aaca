//! Game engine: one session at one board.
//!
//! The engine owns the board and the seats. It routes every selection,
//! human or computer, through [`Board::flip`], keeps move and score
//! counters, hands the turn over on a mismatch, and decides the winner.
//!
//! ## Driving a game
//!
//! ```
//! use memory_match::core::{GameConfig, SymbolSet};
//! use memory_match::engine::{GameEngine, Invitation};
//!
//! let config = GameConfig::new().computer_vs_computer();
//! let mut engine = GameEngine::new(config, SymbolSet::default(), 42).unwrap();
//!
//! // Resolve every ticket immediately until somebody needs input
//! match engine.play_until_input() {
//!     Invitation::Finished(result) => println!("{:?}", result),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(engine.is_complete());
//! ```
//!
//! With a human seat, the event loop calls [`GameEngine::select`] for each
//! click, waits `ticket.delay` for any ticket it gets back and passes the
//! ticket to [`GameEngine::resolve`]. Resolving invites the next seat: if
//! that is a computer, it has already flipped its pair and the returned
//! [`Resolved::next`] carries the ticket to schedule.

use crate::agents;
use crate::core::{
    AgentKind, CardIndex, ConfigError, GameConfig, GameRng, InvalidMove, PlayerId, PlayerMap,
    ScoreMode, StaleResolution, SymbolSet, MAX_SEATS,
};
use crate::deck::{self, Deck};

use super::board::{Board, Flip, Phase, Resolution, ResolutionTicket};
use super::event::GameEvent;
use super::result::{GameResult, GameSummary, SeatSummary};
use super::scores::{high_score_key, record_if_better, HighScoreStore};
use super::seat::{PlayerStats, Seat};

/// Rejected selections a computer seat may make in a row before the engine
/// stops asking it.
pub const MAX_SELECTION_ATTEMPTS: usize = 8;

/// What happened when the active seat was invited to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invitation {
    /// A human seat is active; deliver its selection through `select`.
    AwaitingInput(PlayerId),
    /// A computer seat flipped cards; `flip` is the last of them.
    Played { player: PlayerId, flip: Flip },
    /// A pair is still resolving; nobody may move yet.
    Blocked(ResolutionTicket),
    /// A computer seat produced no acceptable selection.
    Stalled(PlayerId),
    /// The game is over.
    Finished(GameResult),
}

/// A resolved pair and the invitation that followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub resolution: Resolution,
    /// What the (possibly new) active seat did when invited.
    pub next: Invitation,
}

/// One memory game session.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    symbols: SymbolSet,
    /// Explicit layout reused on restart, if the session was built with one.
    fixed_layout: Option<Deck>,
    board: Board,
    seats: PlayerMap<Seat>,
    active: PlayerId,
    rng: GameRng,
    summary: Option<GameSummary>,
    high_scores: Option<Box<dyn HighScoreStore>>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Start a game on a freshly shuffled deck.
    ///
    /// The requested `card_total` is clamped to what `symbols` supports.
    pub fn new(config: GameConfig, symbols: SymbolSet, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, symbols, None, seed)
    }

    /// Start a game on an explicit layout. Restarts reuse the same layout.
    pub fn with_deck(
        config: GameConfig,
        symbols: SymbolSet,
        deck: Deck,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        deck.validate_against(&symbols)?;
        Self::build(config, symbols, Some(deck), seed)
    }

    fn build(
        config: GameConfig,
        symbols: SymbolSet,
        fixed_layout: Option<Deck>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let seat_count = config.seats.len();
        if seat_count == 0 || seat_count > MAX_SEATS {
            return Err(ConfigError::SeatCount(seat_count));
        }

        let mut rng = GameRng::new(seed);
        let board = Self::deal(&config, &symbols, fixed_layout.as_ref(), &mut rng, 0);
        if board.card_total() == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        let seats = Self::seat_agents(&config, &mut rng);

        let mut engine = Self {
            config,
            symbols,
            fixed_layout,
            board,
            seats,
            active: PlayerId::FIRST,
            rng,
            summary: None,
            high_scores: None,
            events: Vec::new(),
        };
        engine.announce_start();
        Ok(engine)
    }

    /// Attach a high-score store. Human seats are recorded at completion.
    #[must_use]
    pub fn with_high_scores(mut self, store: impl HighScoreStore + 'static) -> Self {
        self.high_scores = Some(Box::new(store));
        self
    }

    /// Replace a seat's agent. Counters start from zero.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_agent(mut self, player: PlayerId, agent: Box<dyn agents::Agent>) -> Self {
        self.seats[player] = Seat::new(agent);
        self
    }

    fn deal(
        config: &GameConfig,
        symbols: &SymbolSet,
        fixed_layout: Option<&Deck>,
        rng: &mut GameRng,
        generation: u64,
    ) -> Board {
        let deck = match fixed_layout {
            Some(layout) => layout.clone(),
            None => deck::generate(config.card_total, symbols, &mut rng.fork()),
        };
        Board::new(deck, generation, config.presentation_delay)
    }

    fn seat_agents(config: &GameConfig, rng: &mut GameRng) -> PlayerMap<Seat> {
        PlayerMap::new(config.seats.len(), |player| {
            Seat::new(agents::for_kind(config.seats[player.index()], rng))
        })
    }

    fn announce_start(&mut self) {
        log::info!(
            "game {} started: {} cards, {} seat(s)",
            self.board.generation(),
            self.board.card_total(),
            self.seats.seat_count()
        );
        self.events.push(GameEvent::GameStarted {
            generation: self.board.generation(),
            card_total: self.board.card_total(),
        });
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Faces the deck is drawn from.
    #[must_use]
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// The board, for renderers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.seat_count()
    }

    /// A seat.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player]
    }

    /// A seat's counters.
    #[must_use]
    pub fn stats(&self, player: PlayerId) -> PlayerStats {
        self.seats[player].stats()
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matches_found(&self) -> usize {
        self.board.matches_found()
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    /// Game-over summary, once complete.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Winner or draw, once complete.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.summary.as_ref().map(|s| s.result)
    }

    /// Stored high score for a seat, if a store is attached and has one.
    #[must_use]
    pub fn high_score(&self, player: PlayerId) -> Option<u32> {
        self.high_scores.as_ref()?.get(&high_score_key(player))
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Transitions ===

    /// Flip a card on behalf of the active seat.
    ///
    /// Rejections are reported to the active seat's agent and change nothing.
    pub fn select(&mut self, index: CardIndex) -> Result<Flip, InvalidMove> {
        let player = self.active;

        let flip = match self.board.flip(index) {
            Ok(flip) => flip,
            Err(reason) => {
                log::debug!("{} selection of {} rejected: {}", player, index, reason);
                self.seats[player].agent.invalid_move(reason);
                self.events.push(GameEvent::InvalidMove { player, reason });
                return Err(reason);
            }
        };

        let seat = &mut self.seats[player];
        seat.stats.moves += 1;
        seat.agent.observe(flip.index(), flip.symbol());

        log::debug!("{} flipped {} ({})", player, index, flip.symbol());
        self.events.push(GameEvent::CardRevealed {
            player,
            index,
            symbol: flip.symbol(),
        });
        self.events.push(GameEvent::MoveCounted {
            player,
            moves: seat.stats.moves,
        });

        Ok(flip)
    }

    /// Apply a resolution ticket once its delay has passed, then invite the
    /// active seat.
    ///
    /// Stale tickets (from before a restart, or already resolved) are
    /// rejected without touching the game.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Result<Resolved, StaleResolution> {
        let resolution = self.board.resolve(&ticket)?;
        let player = self.active;

        match resolution {
            Resolution::Matched { pair, complete, .. } => {
                let seat = &mut self.seats[player];
                seat.stats.score += 1;
                log::debug!("{} matched {} and {}", player, pair[0], pair[1]);
                self.events.push(GameEvent::CardsMatched { player, pair });
                self.events.push(GameEvent::Scored {
                    player,
                    score: seat.stats.score,
                });
                if complete {
                    self.finish();
                }
            }
            Resolution::Mismatched { pair } => {
                self.events.push(GameEvent::CardsHidden { pair });
                let next = player.next(self.seats.seat_count());
                if next != player {
                    self.active = next;
                    self.events.push(GameEvent::TurnChanged { player: next });
                }
            }
        }

        let next = self.invite();
        Ok(Resolved { resolution, next })
    }

    /// Resolve the outstanding ticket right away, if there is one.
    pub fn resolve_pending(&mut self) -> Option<Resolved> {
        let ticket = *self.board.pending()?;
        self.resolve(ticket).ok()
    }

    /// Invite the active seat to move.
    ///
    /// A human seat leaves the engine waiting for `select`. A computer seat
    /// flips cards until it has a pair pending, so `Played` normally carries
    /// the ticket. Each flip may be retried after rejections up to
    /// [`MAX_SELECTION_ATTEMPTS`] times.
    pub fn invite(&mut self) -> Invitation {
        if let Some(summary) = &self.summary {
            return Invitation::Finished(summary.result);
        }
        if let Some(ticket) = self.board.pending() {
            return Invitation::Blocked(*ticket);
        }

        let player = self.active;
        let mut opened = None;
        let mut rejected = 0;
        while rejected < MAX_SELECTION_ATTEMPTS {
            let Some(index) = self.seats[player].agent.choose_move(&self.board) else {
                return match (opened, self.seats[player].kind()) {
                    (Some(flip), _) => Invitation::Played { player, flip },
                    (None, AgentKind::Human) => Invitation::AwaitingInput(player),
                    (None, AgentKind::Computer) => Invitation::Stalled(player),
                };
            };

            match self.select(index) {
                Ok(flip @ Flip::Opened { .. }) => {
                    opened = Some(flip);
                    rejected = 0;
                }
                Ok(flip) => return Invitation::Played { player, flip },
                Err(_) => rejected += 1,
            }
        }

        log::warn!(
            "{} gave up after {} rejected selections",
            player,
            MAX_SELECTION_ATTEMPTS
        );
        Invitation::Stalled(player)
    }

    /// Keep inviting seats and resolving tickets immediately until a human
    /// must act, the game ends, or a computer seat stalls.
    pub fn play_until_input(&mut self) -> Invitation {
        let mut next = self.invite();
        loop {
            let ticket = match next {
                Invitation::Played { flip: Flip::Pending { ticket, .. }, .. }
                | Invitation::Blocked(ticket) => ticket,
                // Includes a seat that stopped after its first card
                other => return other,
            };

            match self.resolve(ticket) {
                Ok(resolved) => next = resolved.next,
                Err(_) => return Invitation::Blocked(ticket),
            }
        }
    }

    /// Deal a new board and reset every seat.
    ///
    /// Outstanding resolution tickets become stale.
    pub fn restart(&mut self) {
        let generation = self.board.generation() + 1;

        self.board = Self::deal(
            &self.config,
            &self.symbols,
            self.fixed_layout.as_ref(),
            &mut self.rng,
            generation,
        );
        self.seats = Self::seat_agents(&self.config, &mut self.rng);
        self.active = PlayerId::FIRST;
        self.summary = None;
        self.events.clear();

        self.announce_start();
    }

    fn finish(&mut self) {
        for (_, seat) in self.seats.iter_mut() {
            seat.agent.complete();
        }

        let result = GameResult::from_scores(self.seats.iter().map(|(p, s)| (p, s.stats.score)));
        let summary = GameSummary {
            result,
            seats: self
                .seats
                .iter()
                .map(|(player, seat)| SeatSummary {
                    player,
                    name: seat.name(player),
                    kind: seat.kind(),
                    stats: seat.stats(),
                })
                .collect(),
        };

        if let Some(store) = self.high_scores.as_deref_mut() {
            let mode = self.config.score_mode;
            for (player, seat) in self.seats.iter() {
                if seat.kind() != AgentKind::Human {
                    continue;
                }
                let value = match mode {
                    ScoreMode::Matches => seat.stats.score,
                    ScoreMode::Moves => seat.stats.moves,
                };
                if record_if_better(store, &high_score_key(player), value, mode) {
                    self.events.push(GameEvent::HighScore { player, value });
                }
            }
        }

        match summary.winner_name() {
            Some(name) => log::info!("game {} over: {} wins", self.board.generation(), name),
            None => log::info!("game {} over: draw", self.board.generation()),
        }

        self.events.push(GameEvent::GameOver(summary.clone()));
        self.summary = Some(summary);
    }
}
