use super::*;

/// Generation strategy that lays out every symbol twice and applies a uniform shuffle.
///
/// Each generator owns its seed and builds a fresh RNG per call, nothing is shared between decks.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, alphabet: &Alphabet) -> Deck {
        use rand::prelude::*;

        let mut symbols: Vec<Symbol> = alphabet
            .symbols()
            .flat_map(|symbol| [symbol, symbol])
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        symbols.shuffle(&mut rng);

        let cards = symbols
            .iter()
            .zip(0..)
            .map(|(&symbol, id)| Card::new(id, symbol))
            .collect();

        let deck = Deck {
            cards,
            pair_count: alphabet.len(),
        };
        log::debug!(
            "generated deck of {} cards, seed: {}",
            deck.cards.len(),
            self.seed
        );
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::string::ToString;

    fn alphabet(size: usize) -> Alphabet {
        Alphabet::new((0..size).map(|i| i.to_string())).unwrap()
    }

    #[test]
    fn every_symbol_appears_exactly_twice() {
        for size in 1..=8 {
            let alphabet = alphabet(size);
            let deck = generate_deck(&alphabet, size as u64);

            assert_eq!(deck.cards().len(), 2 * size);
            assert_eq!(usize::from(deck.len()), 2 * size);
            assert_eq!(usize::from(deck.pair_count()), size);

            for symbol in alphabet.symbols() {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|card| card.symbol == symbol)
                    .count();
                assert_eq!(count, 2, "symbol {:?} in deck of {} pairs", symbol, size);
            }
        }
    }

    #[test]
    fn ids_are_unique_and_contiguous() {
        let deck = generate_deck(&Alphabet::default(), 7);

        for (index, card) in deck.cards().iter().enumerate() {
            assert_eq!(usize::from(card.id), index);
            assert!(!card.revealed);
            assert!(!card.matched);
        }
    }

    #[test]
    fn same_seed_reproduces_deck() {
        let alphabet = Alphabet::default();

        assert_eq!(generate_deck(&alphabet, 42), generate_deck(&alphabet, 42));
    }

    #[test]
    fn different_seeds_give_different_orderings() {
        let alphabet = Alphabet::default();
        let orderings: BTreeSet<Vec<Symbol>> = (0..64)
            .map(|seed| {
                generate_deck(&alphabet, seed)
                    .cards()
                    .iter()
                    .map(|card| card.symbol)
                    .collect()
            })
            .collect();

        // 16!/2^8 possible orderings, collisions are practically impossible
        assert!(orderings.len() >= 63, "only {} distinct orderings", orderings.len());
    }

    #[test]
    fn shuffle_is_not_biased_toward_identity_order() {
        let alphabet = Alphabet::default();
        let unshuffled: Vec<Symbol> = alphabet
            .symbols()
            .flat_map(|symbol| [symbol, symbol])
            .collect();
        let samples = 2000u64;

        let mut in_place = 0u64;
        for seed in 0..samples {
            let deck = generate_deck(&alphabet, seed);
            in_place += deck
                .cards()
                .iter()
                .zip(&unshuffled)
                .filter(|(card, symbol)| card.symbol == **symbol)
                .count() as u64;
        }

        // Each position keeps its symbol with probability 2/16, so 2 per deck on average.
        let mean = in_place as f64 / samples as f64;
        assert!((1.6..2.4).contains(&mean), "mean fixed positions {}", mean);
    }

    #[test]
    fn single_pair_deck() {
        let deck = generate_deck(&alphabet(1), 0);

        assert_eq!(deck.cards().len(), 2);
        assert_eq!(deck.cards()[0].symbol, deck.cards()[1].symbol);
    }
}
