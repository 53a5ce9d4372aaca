//! Cards and the symbols printed on their faces.
//!
//! A [`Symbol`] is an opaque id into a [`SymbolSet`]; the set maps ids to
//! display names (image keys for a renderer). A [`Card`] is one board cell.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board position of a card, `0..card_total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Opaque card face identifier.
///
/// Two cards match exactly when their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Card faces shipped with the game.
pub const DEFAULT_FACES: [&str; 6] = [
    "alakir",
    "anubarak",
    "bolvar",
    "deathwing",
    "gruul",
    "rivendare",
];

/// The finite set of faces a deck is drawn from.
///
/// Symbol `n` is the `n`-th name. Names are unique and the set is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolSet {
    names: Vec<String>,
}

impl SymbolSet {
    /// Build a symbol set from face names.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if names.len() > usize::from(u16::MAX) {
            return Err(ConfigError::TooManySymbols(names.len()));
        }
        let mut seen = FxHashSet::default();
        if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ConfigError::DuplicateSymbol(dup.clone()));
        }

        Ok(Self { names })
    }

    /// Number of distinct faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Largest deck this set can fill.
    #[must_use]
    pub fn max_card_total(&self) -> usize {
        self.names.len() * 2
    }

    /// Face name for a symbol.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(usize::from(symbol.0)).map(String::as_str)
    }

    /// Check that a symbol belongs to this set.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        usize::from(symbol.0) < self.names.len()
    }

    /// Iterate over every symbol in the set.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> {
        (0..self.names.len() as u16).map(Symbol)
    }
}

impl TryFrom<Vec<String>> for SymbolSet {
    type Error = ConfigError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<SymbolSet> for Vec<String> {
    fn from(set: SymbolSet) -> Self {
        set.names
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_FACES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One board cell.
///
/// `revealed` and `matched` are only changed by the board's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position on the board.
    pub index: CardIndex,

    /// Hidden face.
    pub symbol: Symbol,

    /// Flipped face up. Cleared again when a pair misses.
    pub revealed: bool,

    /// Found as part of a pair; stays face up for the rest of the game.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(index: CardIndex, symbol: Symbol) -> Self {
        Self {
            index,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Whether a renderer should show the face.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbol_set() {
        let set = SymbolSet::default();
        assert_eq!(set.len(), 6);
        assert_eq!(set.max_card_total(), 12);
        assert_eq!(set.name(Symbol::new(0)), Some("alakir"));
        assert_eq!(set.name(Symbol::new(5)), Some("rivendare"));
        assert_eq!(set.name(Symbol::new(6)), None);
    }

    #[test]
    fn test_symbol_set_rejects_empty() {
        let names: Vec<String> = vec![];
        assert_eq!(SymbolSet::new(names), Err(ConfigError::NoSymbols));
    }

    #[test]
    fn test_symbol_set_rejects_duplicates() {
        assert_eq!(
            SymbolSet::new(["a", "b", "a"]),
            Err(ConfigError::DuplicateSymbol("a".to_string()))
        );
    }

    #[test]
    fn test_symbol_set_deserialize_validates() {
        let set: SymbolSet = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a","b"]"#);

        assert!(serde_json::from_str::<SymbolSet>("[]").is_err());
        assert!(serde_json::from_str::<SymbolSet>(r#"["a", "a"]"#).is_err());
    }

    #[test]
    fn test_symbol_set_contains() {
        let set = SymbolSet::new(["a", "b"]).unwrap();
        assert!(set.contains(Symbol::new(1)));
        assert!(!set.contains(Symbol::new(2)));
        assert_eq!(set.symbols().count(), 2);
    }

    #[test]
    fn test_card_face_up() {
        let mut card = Card::new(CardIndex::new(3), Symbol::new(1));
        assert!(!card.is_face_up());

        card.revealed = true;
        assert!(card.is_face_up());

        card.revealed = false;
        card.matched = true;
        assert!(card.is_face_up());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardIndex::new(4)), "Card(4)");
        assert_eq!(format!("{}", Symbol::new(2)), "Symbol(2)");
    }
}
