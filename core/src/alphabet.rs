use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered set of unique glyphs a deck is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    glyphs: Vec<String>,
}

impl Alphabet {
    pub const MAX_SYMBOLS: usize = 128;

    pub const DEFAULT_GLYPHS: [&'static str; 8] = ["🍎", "🍌", "🍒", "🍇", "🍉", "🍍", "🥑", "🥕"];

    pub fn new<I, S>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checked: Vec<String> = Vec::new();
        for glyph in glyphs {
            let glyph = glyph.into();
            if glyph.is_empty() {
                return Err(GameError::EmptySymbol);
            }
            if checked.contains(&glyph) {
                return Err(GameError::DuplicateSymbol);
            }
            if checked.len() == Self::MAX_SYMBOLS {
                return Err(GameError::TooManySymbols);
            }
            checked.push(glyph);
        }

        if checked.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }

        Ok(Self { glyphs: checked })
    }

    /// Keeps only the first `count` glyphs, never fewer than one.
    pub fn truncated(mut self, count: PairCount) -> Self {
        let count = usize::from(count).clamp(1, self.glyphs.len());
        if count < self.glyphs.len() {
            log::debug!("alphabet truncated to {} of {} symbols", count, self.glyphs.len());
        }
        self.glyphs.truncate(count);
        self
    }

    pub fn len(&self) -> PairCount {
        // bounded by MAX_SYMBOLS on construction
        self.glyphs.len() as PairCount
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, symbol: Symbol) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + use<> {
        (0..self.len()).map(Symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            glyphs: Self::DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = GameError;

    fn try_from(glyphs: Vec<String>) -> Result<Self> {
        Self::new(glyphs)
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.glyphs
    }
}
