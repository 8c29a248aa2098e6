//! Guess evaluation for the melting snowman game.
//!
//! A game holds one immutable target word. Evaluating a guess is a pure
//! computation over that word; guess bookkeeping lives in the session
//! registry, not here.

use tracing::{debug, instrument};

/// A single melting snowman game: one target word to guess.
///
/// The word is fixed at construction and never changes for the lifetime
/// of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltingSnowmanGame {
    word: String,
}

impl MeltingSnowmanGame {
    /// Creates a game for the given target word.
    ///
    /// The word comes from a [`WordSource`](crate::WordSource) and is
    /// assumed non-empty.
    pub fn new(word: String) -> Self {
        Self { word }
    }

    /// The target word for this game.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Evaluates a single-letter guess against the target word.
    ///
    /// Returns how many times `letter` occurs in the word, which may be
    /// zero. Matching is case-sensitive. This is a pure function of the
    /// word and the letter; recording the guess is the caller's job.
    #[instrument(skip(self), fields(word = %self.word))]
    pub fn guess(&self, letter: char) -> usize {
        let occurrences = occurrences(&self.word, letter);
        debug!(letter = %letter, occurrences, "Evaluated guess");
        occurrences
    }
}

/// Counts case-sensitive occurrences of `letter` in `word`.
pub fn occurrences(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let game = MeltingSnowmanGame::new("snowman".to_string());
        assert_eq!(game.guess('n'), 2);
    }

    #[test]
    fn missing_letter_counts_zero() {
        let game = MeltingSnowmanGame::new("snowman".to_string());
        assert_eq!(game.guess('z'), 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let game = MeltingSnowmanGame::new("Snowman".to_string());
        assert_eq!(game.guess('s'), 1);
        assert_eq!(game.guess('S'), 1);
    }

    #[test]
    fn guess_is_pure() {
        let game = MeltingSnowmanGame::new("snowman".to_string());
        let first = game.guess('n');
        let second = game.guess('n');
        assert_eq!(first, second);
        assert_eq!(game.word(), "snowman");
    }
}
