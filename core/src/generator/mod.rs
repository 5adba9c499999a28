use crate::*;
use alloc::vec::Vec;
use serde::Serialize;

pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, alphabet: &Alphabet) -> Deck;
}

/// Shuffled deck of `2N` cards, stored so that the card with id `i` sits at index `i`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
    pair_count: PairCount,
}

impl Deck {
    /// Builds a deck from symbols in deal order, assigning ids `0..2N` along the way.
    ///
    /// Returns `None` unless every symbol appears exactly twice.
    pub fn from_symbols(symbols: &[Symbol]) -> Option<Self> {
        let pair_count: PairCount = (symbols.len() / 2).try_into().ok()?;
        if symbols.len() % 2 != 0 || pair_count == 0 {
            return None;
        }

        let mut counts = [0u8; Alphabet::MAX_SYMBOLS];
        for symbol in symbols {
            let count = counts.get_mut(symbol.index())?;
            *count += 1;
            if *count > 2 {
                return None;
            }
        }
        if counts.iter().any(|&count| count == 1) {
            return None;
        }

        let cards = symbols
            .iter()
            .zip(0..)
            .map(|(&symbol, id)| Card::new(id, symbol))
            .collect();
        Some(Self { cards, pair_count })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn len(&self) -> CardCount {
        pair_cards(self.pair_count)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Generates a fresh deck from `alphabet`, shuffled with its own RNG seeded from `seed`.
pub fn generate_deck(alphabet: &Alphabet, seed: u64) -> Deck {
    RandomDeckGenerator::new(seed).generate(alphabet)
}
