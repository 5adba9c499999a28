use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the card shows its symbol, either temporarily or for good.
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    pub const fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.revealed {
            CardFace::Revealed
        } else {
            CardFace::Hidden
        }
    }
}

/// Player-visible state of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    Revealed,
    Matched,
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_wins_over_revealed() {
        let mut card = Card::new(0, Symbol(0));
        assert_eq!(card.face(), CardFace::Hidden);

        card.revealed = true;
        assert_eq!(card.face(), CardFace::Revealed);

        card.matched = true;
        assert_eq!(card.face(), CardFace::Matched);

        card.revealed = false;
        assert_eq!(card.face(), CardFace::Matched);
        assert!(card.is_face_up());
    }
}
