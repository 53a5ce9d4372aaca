//! Shuffled deck generation.
//!
//! The generator builds the exact multiset of paired symbols and permutes
//! it with Fisher–Yates, so it runs in time linear in the deck size and
//! every ordering is equally likely.

use crate::core::{GameRng, Symbol, SymbolSet};

use super::layout::Deck;

/// Deck size actually used for a requested `card_total`.
///
/// - below 2: the largest deck the symbol set supports
/// - odd: rounded down to even
/// - more pairs than symbols: the largest deck the symbol set supports
///
/// ```
/// use memory_match::core::SymbolSet;
/// use memory_match::deck::supported_total;
///
/// let faces = SymbolSet::default(); // 6 faces
/// assert_eq!(supported_total(8, &faces), 8);
/// assert_eq!(supported_total(9, &faces), 8);
/// assert_eq!(supported_total(20, &faces), 12);
/// assert_eq!(supported_total(0, &faces), 12);
/// ```
#[must_use]
pub fn supported_total(requested: usize, symbols: &SymbolSet) -> usize {
    let max = symbols.max_card_total();

    if requested < 2 {
        return max;
    }

    let even = requested - requested % 2;
    if even / 2 > symbols.len() {
        max
    } else {
        even
    }
}

/// Generate a shuffled deck of `requested` cards.
///
/// Never fails: unsupported sizes are reduced (see [`supported_total`]) and
/// the reduction is logged.
pub fn generate(requested: usize, symbols: &SymbolSet, rng: &mut GameRng) -> Deck {
    let card_total = supported_total(requested, symbols);
    if card_total != requested {
        log::warn!(
            "requested {} cards but {} faces support {}; using {}",
            requested,
            symbols.len(),
            symbols.max_card_total(),
            card_total
        );
    }

    let mut layout: Vec<Symbol> = symbols
        .symbols()
        .take(card_total / 2)
        .flat_map(|s| [s, s])
        .collect();
    rng.shuffle(&mut layout);

    log::debug!("generated {} card deck (seed {})", card_total, rng.seed());
    Deck::from_layout_unchecked(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn symbol_counts(deck: &Deck) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for symbol in deck.symbols() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_every_symbol_twice() {
        let mut rng = GameRng::new(42);
        let deck = generate(12, &SymbolSet::default(), &mut rng);

        assert_eq!(deck.len(), 12);
        let counts = symbol_counts(&deck);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_smaller_deck_uses_prefix_of_faces() {
        let mut rng = GameRng::new(7);
        let deck = generate(4, &SymbolSet::default(), &mut rng);

        let mut symbols: Vec<_> = deck.symbols().collect();
        symbols.sort();
        assert_eq!(symbols, vec![Symbol(0), Symbol(0), Symbol(1), Symbol(1)]);
    }

    #[test]
    fn test_oversized_request_is_clamped() {
        let mut rng = GameRng::new(1);
        let deck = generate(40, &SymbolSet::default(), &mut rng);
        assert_eq!(deck.len(), 12);
    }

    #[test]
    fn test_odd_request_rounds_down() {
        let mut rng = GameRng::new(1);
        let deck = generate(7, &SymbolSet::default(), &mut rng);
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn test_tiny_request_uses_default_size() {
        let mut rng = GameRng::new(1);
        assert_eq!(generate(0, &SymbolSet::default(), &mut rng).len(), 12);
        assert_eq!(generate(1, &SymbolSet::default(), &mut rng).len(), 12);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let faces = SymbolSet::default();
        let a = generate(12, &faces, &mut GameRng::new(99));
        let b = generate(12, &faces, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_layout_is_shuffled() {
        let faces = SymbolSet::default();
        let sorted: Vec<_> = faces.symbols().flat_map(|s| [s, s]).collect();

        // At least one of a handful of seeds must move something
        let moved = (0..8u64)
            .map(|seed| generate(12, &faces, &mut GameRng::new(seed)))
            .any(|deck| deck.symbols().collect::<Vec<_>>() != sorted);
        assert!(moved);
    }
}
