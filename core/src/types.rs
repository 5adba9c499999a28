use serde::{Deserialize, Serialize};

/// Identifier of a card, unique within a round.
pub type CardId = u16;

/// Count type used for card totals.
pub type CardCount = u16;

/// Number of distinct symbols, and thus of pairs, in a round.
pub type PairCount = u8;

/// Identifier of a round within a [`Game`](crate::Game).
pub type RoundId = u32;

/// Index of a glyph in the [`Alphabet`](crate::Alphabet). Two cards match iff their symbols are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

pub const fn pair_cards(pairs: PairCount) -> CardCount {
    (pairs as CardCount) * 2
}
