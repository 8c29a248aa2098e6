//! Melting Snowman library - multi-session word-guessing game.
//!
//! # Architecture
//!
//! - **Registry**: concurrency-safe session store (id allocation, guess counting)
//! - **Game**: pure guess evaluation against a session's target word
//! - **Words**: pluggable word source supplying one word per session
//! - **Server**: axum routes translating registry results into HTTP responses
//!
//! # Example
//!
//! ```
//! use melting_snowman::GameRegistry;
//!
//! let registry = GameRegistry::new();
//! let id = registry.create("snowman".to_string());
//! assert_eq!(registry.get(id).unwrap().guess_count, 0);
//! assert_eq!(registry.record_guess(id), Ok(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod server;
mod session;
mod words;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Guess engine
pub use game::{MeltingSnowmanGame, occurrences};

// Crate-level exports - HTTP layer
pub use server::{ApiError, AppState, GetGameResponse, GuessParams, PostGameResponse, router};

// Crate-level exports - Session registry
pub use session::{GameId, GameRegistry, GameStatus, RegistryError};

// Crate-level exports - Word sources
pub use words::{WordList, WordListError, WordSource};
