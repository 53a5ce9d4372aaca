//! Deck: the ordered cards of one game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardIndex, ConfigError, Symbol, SymbolSet};

/// Ordered sequence of cards where every symbol appears exactly twice.
///
/// Card `i` always carries `CardIndex(i)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from an explicit board layout.
    ///
    /// ```
    /// use memory_match::core::Symbol;
    /// use memory_match::deck::Deck;
    ///
    /// let (a, b) = (Symbol::new(0), Symbol::new(1));
    /// let deck = Deck::from_symbols(&[a, b, a, b]).unwrap();
    /// assert_eq!(deck.pair_count(), 2);
    ///
    /// assert!(Deck::from_symbols(&[a, b, a]).is_err());
    /// ```
    pub fn from_symbols(layout: &[Symbol]) -> Result<Self, ConfigError> {
        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &symbol in layout {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        // Report the lowest offending symbol so the error is deterministic
        let mut unpaired: Vec<_> = counts.into_iter().filter(|&(_, count)| count != 2).collect();
        unpaired.sort_unstable();
        if let Some(&(symbol, count)) = unpaired.first() {
            return Err(ConfigError::UnpairedSymbol { symbol, count });
        }

        Ok(Self::from_layout_unchecked(layout))
    }

    /// Layouts produced by the generator are paired by construction.
    pub(crate) fn from_layout_unchecked(layout: &[Symbol]) -> Self {
        let cards = layout
            .iter()
            .enumerate()
            .map(|(i, &symbol)| Card::new(CardIndex::new(i), symbol))
            .collect();
        Self { cards }
    }

    /// Check that every symbol on the deck exists in `symbols`.
    pub fn validate_against(&self, symbols: &SymbolSet) -> Result<(), ConfigError> {
        match self.cards.iter().find(|c| !symbols.contains(c.symbol)) {
            Some(card) => Err(ConfigError::UnknownSymbol(card.symbol)),
            None => Ok(()),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs; the game completes after this many matches.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Symbols in board order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().map(|c| c.symbol)
    }

    /// Consume the deck, yielding its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(id: u16) -> Symbol {
        Symbol::new(id)
    }

    #[test]
    fn test_from_symbols_indexes_cards() {
        let deck = Deck::from_symbols(&[sym(0), sym(1), sym(0), sym(1)]).unwrap();

        assert_eq!(deck.len(), 4);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index, CardIndex::new(i));
            assert!(!card.revealed);
            assert!(!card.matched);
        }
        assert_eq!(deck.symbols().collect::<Vec<_>>(), vec![sym(0), sym(1), sym(0), sym(1)]);
    }

    #[test]
    fn test_from_symbols_rejects_single() {
        let err = Deck::from_symbols(&[sym(0), sym(1), sym(0)]).unwrap_err();
        assert_eq!(err, ConfigError::UnpairedSymbol { symbol: sym(1), count: 1 });
    }

    #[test]
    fn test_from_symbols_rejects_triple() {
        let err = Deck::from_symbols(&[sym(2), sym(2), sym(2), sym(3), sym(3), sym(3)]).unwrap_err();
        assert_eq!(err, ConfigError::UnpairedSymbol { symbol: sym(2), count: 3 });
    }

    #[test]
    fn test_validate_against() {
        let deck = Deck::from_symbols(&[sym(0), sym(7), sym(7), sym(0)]).unwrap();

        assert_eq!(
            deck.validate_against(&SymbolSet::default()),
            Err(ConfigError::UnknownSymbol(sym(7)))
        );

        let wide = SymbolSet::new((0..8).map(|i| format!("face-{i}"))).unwrap();
        assert!(deck.validate_against(&wide).is_ok());
    }

    #[test]
    fn test_empty_layout() {
        let deck = Deck::from_symbols(&[]).unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.pair_count(), 0);
    }
}
