//! The string a run reconstructs, and utilities for building one.

use std::fmt::Display;

use rand::{seq::IndexedRandom, Rng};

use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
};

/// Default target.
pub const HELLO_WORLD: &str = "Hello World!";

/// A target string whose every character is known to be in the alphabet it was checked against,
/// so a search over that alphabet always terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    chars: Vec<char>,
}

impl Target {
    /// Validates `text` against `alphabet`.
    pub fn new(text: &str, alphabet: &Alphabet) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if let Some((position, &ch)) = chars.iter().enumerate().find(|(_, c)| !alphabet.contains(**c))
        {
            return Err(Error::UnreachableCharacter { ch, position });
        }
        Ok(Self { chars })
    }

    /// Select `len` characters from `alphabet` to create a random target.
    pub fn random<R: Rng + ?Sized>(len: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        let chars = (0..len)
            .filter_map(|_| alphabet.chars().choose(rng).copied())
            .collect();
        Self { chars }
    }

    /// Number of trials a search over `alphabet` emits before reaching this target.
    ///
    /// `alphabet` must be the one this target was validated against.
    pub fn scan_cost(&self, alphabet: &Alphabet) -> usize {
        debug_assert!(
            self.is_reachable_in(alphabet),
            "target contains characters outside the alphabet"
        );
        self.chars
            .iter()
            .filter_map(|&c| alphabet.position(c))
            .sum()
    }

    /// Whether every character of this target is in `alphabet`.
    pub fn is_reachable_in(&self, alphabet: &Alphabet) -> bool {
        self.chars.iter().all(|&c| alphabet.contains(c))
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

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rejects_characters_outside_alphabet() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let err = Target::new("abxa", &alphabet).unwrap_err();
        assert!(matches!(
            err,
            Error::UnreachableCharacter { ch: 'x', position: 2 }
        ));
        assert_eq!(
            err.to_string(),
            "target character 'x' at position 2 is not in the alphabet"
        );
    }

    #[test]
    fn scan_cost_sums_positions() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        assert_eq!(Target::new("ba", &alphabet).unwrap().scan_cost(&alphabet), 3);
        assert_eq!(Target::new("", &alphabet).unwrap().scan_cost(&alphabet), 0);

        // H=34 e=5 l=12 l=12 o=15 ' '=53 W=49 o=15 r=18 l=12 d=4 !=54
        let alphabet = Alphabet::default();
        let target = Target::new(HELLO_WORLD, &alphabet).unwrap();
        assert_eq!(target.scan_cost(&alphabet), 283);
    }

    #[test]
    fn random_targets_are_reachable() {
        let alphabet = Alphabet::new("xyz".chars()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let target = Target::random(40, &alphabet, &mut rng);
        assert_eq!(target.len(), 40);
        assert!(Target::new(&target.to_string(), &alphabet).is_ok());

        // same seed, same target
        let again = Target::random(40, &alphabet, &mut StdRng::seed_from_u64(7));
        assert_eq!(target, again);
    }

    #[test]
    fn reachability_depends_on_alphabet() {
        let wide = Alphabet::new("abc".chars()).unwrap();
        let narrow = Alphabet::new("ab".chars()).unwrap();
        let target = Target::new("cab", &wide).unwrap();
        assert!(target.is_reachable_in(&wide));
        assert!(!target.is_reachable_in(&narrow));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the alphabet")]
    fn scan_cost_rejects_foreign_alphabet() {
        let wide = Alphabet::new("abc".chars()).unwrap();
        let narrow = Alphabet::new("ab".chars()).unwrap();
        Target::new("cab", &wide).unwrap().scan_cost(&narrow);
    }
}
