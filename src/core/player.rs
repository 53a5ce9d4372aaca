//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A memory game has one or two seats.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum number of seats at one board.
pub const MAX_SEATS: usize = 2;

/// Seat identifier.
///
/// Indices are 0-based internally: the first seat is `PlayerId(0)`.
/// Anything shown to people uses the 1-based [`PlayerId::number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat that opens every game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second seat in a two-seat game.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based player number ("Player 1", "Player 2").
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The seat that moves after this one in a game with `seat_count` seats.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.next(2), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.next(2), PlayerId::FIRST);
    /// assert_eq!(PlayerId::FIRST.next(1), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub fn next(self, seat_count: usize) -> Self {
        Self(((self.index() + 1) % seat_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use memory_match::core::{PlayerId, PlayerMap};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// moves[PlayerId::SECOND] += 1;
///
/// assert_eq!(moves[PlayerId::FIRST], 0);
/// assert_eq!(moves[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat.
    ///
    /// Panics on zero seats or more than [`MAX_SEATS`]; the engine checks the
    /// seat count before building one.
    pub fn new(seat_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= MAX_SEATS, "At most {MAX_SEATS} seats supported");

        Self {
            data: (0..seat_count as u8).map(PlayerId).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Seats in turn order with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        (0..).map(PlayerId).zip(&self.data)
    }

    /// Seats in turn order with mutable entries.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        (0..).map(PlayerId).zip(&mut self.data)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
