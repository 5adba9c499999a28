use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("Alphabet symbols must not be empty")]
    EmptySymbol,
    #[error("Alphabet contains the same symbol twice")]
    DuplicateSymbol,
    #[error("Too many symbols")]
    TooManySymbols,
}

pub type Result<T> = core::result::Result<T, GameError>;
