use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("alphabet contains '{0}' more than once")]
    DuplicateCharacter(char),

    #[error("target character '{ch}' at position {position} is not in the alphabet")]
    UnreachableCharacter { ch: char, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
