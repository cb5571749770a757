//! Candidate alphabets. An [`Alphabet`] is the ordered set of characters tried at every target
//! position, and [`Preset`] names the built-in ones.

use std::{collections::HashSet, fmt::Display};

use clap::ValueEnum;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::error::{Error, Result};

/// Lowercase, uppercase, space and exclamation mark, in that order.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ !";

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Lowercase, uppercase and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Represents built-in alphabets without carrying their characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, StrumDisplay, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    #[default]
    Letters,
    Lowercase,
    Alphanumeric,
    Printable,
}

impl Preset {
    /// Builds the alphabet this preset stands for.
    pub fn alphabet(self) -> Alphabet {
        let chars: Vec<char> = match self {
            Preset::Letters => LETTERS.chars().collect(),
            Preset::Lowercase => LOWERCASE.chars().collect(),
            Preset::Alphanumeric => ALPHANUMERIC.chars().collect(),
            Preset::Printable => (' '..='~').collect(),
        };
        Alphabet { chars }
    }
}

/// Ordered, duplicate-free sequence of candidate characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given characters, keeping their order.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for c in chars {
            if !seen.insert(c) {
                return Err(Error::DuplicateCharacter(c));
            }
            ordered.push(c);
        }
        if ordered.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Self { chars: ordered })
    }

    /// 1-based position of `c`, which is also the number of trials needed to lock it in.
    pub fn position(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c).map(|i| i + 1)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Preset::default().alphabet()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
