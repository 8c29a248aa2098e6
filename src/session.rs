//! Game session registry for HTTP multiplay.
//!
//! The registry is the authoritative owner of every session: the target
//! word, the guess count, and the id counter live behind one mutex, so
//! allocation of a new id and insertion of its session are a single
//! atomic step from any caller's point of view. A session's word and its
//! guess count are one entity in one map and cannot drift apart.

use crate::game::MeltingSnowmanGame;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
///
/// Allocated sequentially from 0, never reused. The 32-bit range is a
/// deliberate inherited limit; wraparound handling is out of scope.
pub type GameId = u32;

/// Registry failures surfaced to the request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// The session id was never allocated.
    #[display("game {game_id} not found")]
    NotFound {
        /// The id the caller asked for.
        game_id: GameId,
    },
}

/// One game session: the game itself plus its guess bookkeeping.
#[derive(Debug, Clone)]
struct GameSession {
    game: MeltingSnowmanGame,
    guess_count: u32,
}

/// Consistent snapshot of a session, as returned by [`GameRegistry::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    /// The session's target word.
    pub word: String,
    /// Guesses submitted so far for this session.
    pub guess_count: u32,
}

struct RegistryInner {
    next_id: GameId,
    games: HashMap<GameId, GameSession>,
}

/// Manages all game sessions.
///
/// Cheap to clone; clones share the same underlying registry. A single
/// mutex guards the id counter and the session map as one critical
/// section, so creation, lookup, and guess recording are each atomic
/// with respect to every other caller.
#[derive(Clone)]
pub struct GameRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                next_id: 0,
                games: HashMap::new(),
            })),
        }
    }

    /// Creates a new session for the given word and returns its id.
    ///
    /// Ids are contiguous and duplicate-free even under concurrent
    /// creation: the counter advance and the map insertion happen under
    /// the same lock.
    #[instrument(skip(self, word))]
    pub fn create(&self, word: String) -> GameId {
        let mut inner = self.lock();
        let game_id = inner.next_id;
        inner.next_id += 1;
        inner.games.insert(
            game_id,
            GameSession {
                game: MeltingSnowmanGame::new(word),
                guess_count: 0,
            },
        );
        info!(game_id, "Created new game session");
        game_id
    }

    /// Returns the current word and guess count for a session.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::NotFound`] for ids that were never
    /// allocated; the registry is left unchanged.
    #[instrument(skip(self))]
    pub fn get(&self, game_id: GameId) -> Result<GameStatus, RegistryError> {
        let inner = self.lock();
        let session = inner.games.get(&game_id).ok_or_else(|| {
            debug!(game_id, "Game not found");
            RegistryError::NotFound { game_id }
        })?;
        Ok(GameStatus {
            word: session.game.word().to_string(),
            guess_count: session.guess_count,
        })
    }

    /// Records one accepted guess and returns the new guess count.
    ///
    /// Calls for the same id serialize on the registry lock, so the
    /// read-modify-write increment never loses an update.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::NotFound`] for ids that were never
    /// allocated; no state changes on failure.
    #[instrument(skip(self))]
    pub fn record_guess(&self, game_id: GameId) -> Result<u32, RegistryError> {
        let mut inner = self.lock();
        let session = inner.games.get_mut(&game_id).ok_or_else(|| {
            warn!(game_id, "Guess recorded against unknown game");
            RegistryError::NotFound { game_id }
        })?;
        session.guess_count += 1;
        debug!(game_id, guess_count = session.guess_count, "Recorded guess");
        Ok(session.guess_count)
    }

    /// Number of sessions created so far.
    #[instrument(skip(self))]
    pub fn len(&self) -> usize {
        self.lock().games.len()
    }

    /// Whether no session has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Critical sections are panic-free, so a poisoned guard still holds
    // consistent data and can be recovered.
    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_zero() {
        let registry = GameRegistry::new();
        assert_eq!(registry.create("snowman".to_string()), 0);
        assert_eq!(registry.create("icicle".to_string()), 1);
        assert_eq!(registry.create("glacier".to_string()), 2);
    }

    #[test]
    fn get_returns_word_and_count() {
        let registry = GameRegistry::new();
        let id = registry.create("snowman".to_string());
        let status = registry.get(id).unwrap();
        assert_eq!(status.word, "snowman");
        assert_eq!(status.guess_count, 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = GameRegistry::new();
        assert_eq!(
            registry.get(99),
            Err(RegistryError::NotFound { game_id: 99 })
        );
        assert_eq!(
            registry.record_guess(99),
            Err(RegistryError::NotFound { game_id: 99 })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn record_guess_increments_by_one() {
        let registry = GameRegistry::new();
        let id = registry.create("snowman".to_string());
        assert_eq!(registry.record_guess(id), Ok(1));
        assert_eq!(registry.record_guess(id), Ok(2));
        assert_eq!(registry.get(id).unwrap().guess_count, 2);
    }

    #[test]
    fn sessions_are_isolated() {
        let registry = GameRegistry::new();
        let first = registry.create("snowman".to_string());
        let second = registry.create("icicle".to_string());
        registry.record_guess(first).unwrap();
        assert_eq!(registry.get(first).unwrap().guess_count, 1);
        assert_eq!(registry.get(second).unwrap().guess_count, 0);
    }
}
