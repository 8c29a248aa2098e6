//! Word sources for new game sessions.
//!
//! The registry treats the word supplier as an opaque collaborator: one
//! non-empty word per created session. The default implementation cycles
//! through a built-in list.

use derive_more::{Display, Error};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Built-in word list used by [`WordList::default`].
const DEFAULT_WORDS: &[&str] = &[
    "snowman",
    "blizzard",
    "icicle",
    "snowflake",
    "avalanche",
    "glacier",
    "frostbite",
    "meltwater",
];

/// Supplies one target word per created game session.
pub trait WordSource: Send + Sync {
    /// Returns the word for the next session. Always non-empty.
    fn next_word(&self) -> String;
}

/// Error constructing a [`WordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WordListError {
    /// The supplied list contained no words.
    #[display("word list must contain at least one word")]
    Empty,
    /// The supplied list contained an empty string.
    #[display("word list must not contain empty words")]
    EmptyWord,
}

/// A fixed word list served round-robin.
#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    cursor: AtomicUsize,
}

impl WordList {
    /// Creates a word list from the given words.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty or contains an empty word, so every
    /// word handed to a session is non-empty by construction.
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        if words.iter().any(String::is_empty) {
            return Err(WordListError::EmptyWord);
        }
        Ok(Self {
            words,
            cursor: AtomicUsize::new(0),
        })
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(ToString::to_string).collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl WordSource for WordList {
    fn next_word(&self) -> String {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.words.len();
        let word = self.words[index].clone();
        debug!(word = %word, "Supplying word for new session");
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
    }

    #[test]
    fn rejects_empty_word() {
        let words = vec!["snowman".to_string(), String::new()];
        assert!(matches!(WordList::new(words), Err(WordListError::EmptyWord)));
    }

    #[test]
    fn cycles_through_words() {
        let list =
            WordList::new(vec!["one".to_string(), "two".to_string()]).unwrap();
        assert_eq!(list.next_word(), "one");
        assert_eq!(list.next_word(), "two");
        assert_eq!(list.next_word(), "one");
    }

    #[test]
    fn default_list_is_nonempty() {
        let list = WordList::default();
        assert!(!list.next_word().is_empty());
    }
}
