//! HTTP server setup and request handling.
//!
//! Thin glue over the core: three routes, each mapped onto one registry
//! operation. Unknown ids map to 400, a malformed letter maps to a 400
//! validation problem, and nothing else can fail.

use crate::session::{GameId, GameRegistry, RegistryError};
use crate::words::WordSource;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    registry: GameRegistry,
    words: Arc<dyn WordSource>,
}

impl AppState {
    /// Creates the handler state from a registry and a word source.
    pub fn new(registry: GameRegistry, words: Arc<dyn WordSource>) -> Self {
        Self { registry, words }
    }
}

/// Status of a game, as returned by `GET /game/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGameResponse {
    /// The session's target word.
    pub word_to_guess: String,
    /// Guesses submitted so far.
    pub number_of_guesses: u32,
}

/// Result of a guess, as returned by `POST /game/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostGameResponse {
    /// How many times the guessed letter occurs in the word.
    pub occurrences: usize,
    /// The session's target word.
    pub word_to_guess: String,
    /// Guesses submitted so far, including this one.
    pub number_of_guesses: u32,
}

/// Query parameters for the guess route.
#[derive(Debug, Clone, Deserialize)]
pub struct GuessParams {
    /// The guessed letter; must be exactly one character.
    pub letter: String,
}

/// Request failures, mapped onto HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ApiError {
    /// The requested game session does not exist.
    #[display("{_0}")]
    #[from]
    NotFound(RegistryError),
    /// The guessed letter is not exactly one character.
    #[display("letter must be exactly one character")]
    InvalidLetter,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Unknown ids are a plain bad request, matching the core's
            // NotFound taxonomy.
            ApiError::NotFound(_) => StatusCode::BAD_REQUEST.into_response(),
            ApiError::InvalidLetter => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "errors": { "letter": [self.to_string()] }
                })),
            )
                .into_response(),
        }
    }
}

/// Builds the game router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game", post(create_game))
        .route("/game/{id}", get(get_game))
        .route("/game/{id}", post(submit_guess))
        .with_state(state)
}

/// Creates a game. Cannot fail: the word source always supplies a word.
#[instrument(skip(state))]
async fn create_game(State(state): State<AppState>) -> Json<GameId> {
    let word = state.words.next_word();
    let game_id = state.registry.create(word);
    info!(game_id, "Game created");
    Json(game_id)
}

/// Returns the status of a game.
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GetGameResponse>, ApiError> {
    let status = state.registry.get(game_id)?;
    Ok(Json(GetGameResponse {
        word_to_guess: status.word,
        number_of_guesses: status.guess_count,
    }))
}

/// Plays a round: evaluates the guessed letter and records the guess.
///
/// The id check runs before letter validation, and a zero-occurrence
/// guess still counts as a guess.
#[instrument(skip(state), fields(letter = %params.letter))]
async fn submit_guess(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Query(params): Query<GuessParams>,
) -> Result<Json<PostGameResponse>, ApiError> {
    let status = state.registry.get(game_id)?;
    let letter = validate_letter(&params.letter)?;

    let occurrences = crate::game::occurrences(&status.word, letter);
    let number_of_guesses = state.registry.record_guess(game_id)?;

    info!(game_id, occurrences, number_of_guesses, "Guess played");
    Ok(Json(PostGameResponse {
        occurrences,
        word_to_guess: status.word,
        number_of_guesses,
    }))
}

/// Validates the letter shape before it reaches the guess engine.
///
/// The engine assumes a single character; this is the only place that
/// enforces it.
fn validate_letter(letter: &str) -> Result<char, ApiError> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => {
            warn!(letter, "Rejected malformed guess");
            Err(ApiError::InvalidLetter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_is_accepted() {
        assert_eq!(validate_letter("n"), Ok('n'));
    }

    #[test]
    fn empty_and_long_inputs_are_rejected() {
        assert_eq!(validate_letter(""), Err(ApiError::InvalidLetter));
        assert_eq!(validate_letter("no"), Err(ApiError::InvalidLetter));
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(validate_letter("é"), Ok('é'));
    }

    #[test]
    fn not_found_maps_to_bad_request() {
        let error = ApiError::NotFound(RegistryError::NotFound { game_id: 7 });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
