//! The matching loop. [`Search`] walks the alphabet once per target position and yields every
//! guess it makes as a [`Trial`], in emission order.

use crate::{alphabet::Alphabet, target::Target};

/// A single guess: the solved prefix with one candidate appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    /// Solved prefix followed by the candidate.
    pub text: String,
    /// Candidate character tried.
    pub candidate: char,
    /// Target position being solved, 0-based.
    pub position: usize,
    /// Index of the candidate in the alphabet, 1-based.
    pub attempt: usize,
    /// Whether the candidate matched and was locked in.
    pub locked: bool,
}

/// Iterates over the trials needed to reconstruct a target.
pub struct Search<'a> {
    alphabet: &'a Alphabet,
    target: &'a Target,
    /// Locked-in prefix of the target.
    current: String,
    /// Number of characters in `current`.
    solved: usize,
    /// Next alphabet index to try.
    cursor: usize,
}

impl<'a> Search<'a> {
    /// `target` must have been validated against `alphabet`, otherwise the search never ends.
    pub fn new(alphabet: &'a Alphabet, target: &'a Target) -> Self {
        debug_assert!(
            target.is_reachable_in(alphabet),
            "target contains characters outside the alphabet"
        );
        Self {
            alphabet,
            target,
            current: String::with_capacity(target.len()),
            solved: 0,
            cursor: 0,
        }
    }

    /// Locked-in prefix so far.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// True once the prefix equals the target.
    pub fn is_done(&self) -> bool {
        self.solved == self.target.len()
    }
}

impl Iterator for Search<'_> {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        if self.is_done() {
            return None;
        }

        let candidate = self.alphabet.chars()[self.cursor];
        let mut text = self.current.clone();
        text.push(candidate);

        // `current` is a prefix of the target, so comparing the new character is enough
        let locked = candidate == self.target.chars()[self.solved];
        let trial = Trial {
            text,
            candidate,
            position: self.solved,
            attempt: self.cursor + 1,
            locked,
        };

        if locked {
            self.current.push(candidate);
            self.solved += 1;
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + 1) % self.alphabet.len();
        }
        Some(trial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(alphabet: &str, target: &str) -> Vec<String> {
        let alphabet = Alphabet::new(alphabet.chars()).unwrap();
        let target = Target::new(target, &alphabet).unwrap();
        Search::new(&alphabet, &target).map(|t| t.text).collect()
    }

    #[test]
    fn two_letter_example() {
        assert_eq!(texts("ab", "ba"), vec!["a", "b", "ba"]);
    }

    #[test]
    fn scan_restarts_after_lock_in() {
        assert_eq!(
            texts("abc", "cb"),
            vec!["a", "b", "c", "ca", "cb"]
        );
    }

    #[test]
    fn empty_target_yields_nothing() {
        assert!(texts("abc", "").is_empty());
    }

    #[test]
    fn trial_metadata() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let target = Target::new("ba", &alphabet).unwrap();
        let mut search = Search::new(&alphabet, &target);

        let first = search.next().unwrap();
        assert_eq!((first.position, first.attempt, first.locked), (0, 1, false));
        let second = search.next().unwrap();
        assert_eq!((second.position, second.attempt, second.locked), (0, 2, true));
        assert_eq!(search.current(), "b");
        let third = search.next().unwrap();
        assert_eq!(third.candidate, 'a');
        assert_eq!((third.position, third.attempt, third.locked), (1, 1, true));

        assert!(search.is_done());
        assert_eq!(search.current(), "ba");
        assert_eq!(search.next(), None);
    }

    #[test]
    fn every_trial_extends_the_solved_prefix() {
        let alphabet = Alphabet::default();
        let target = Target::new("Hello World!", &alphabet).unwrap();
        let mut prefix = String::new();
        let mut count = 0;
        for trial in Search::new(&alphabet, &target) {
            assert!(trial.text.starts_with(&prefix));
            assert_eq!(trial.text.chars().count(), prefix.chars().count() + 1);
            if trial.locked {
                prefix.push(trial.candidate);
            }
            count += 1;
        }
        assert_eq!(prefix, "Hello World!");
        assert_eq!(count, target.scan_cost(&alphabet));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the alphabet")]
    fn refuses_target_from_another_alphabet() {
        let wide = Alphabet::new("abc".chars()).unwrap();
        let narrow = Alphabet::new("ab".chars()).unwrap();
        let target = Target::new("c", &wide).unwrap();
        let _ = Search::new(&narrow, &target);
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_eq!(texts("éß", "ßé"), vec!["é", "ß", "ßé"]);
    }
}
