//! Game endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Submission;
use crate::middleware::metrics::record_game_created;
use domain::models::{CreateGameRequest, Game, GameSummary};

/// List every game with its ad count.
///
/// GET /api/v1/games
pub async fn list_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let games = state.catalog.list_games().await?;
    Ok(Json(games))
}

/// Register a game.
///
/// POST /api/v1/games
pub async fn create_game(
    State(state): State<AppState>,
    Submission(request): Submission<CreateGameRequest>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state.catalog.create_game(request).await?;
    record_game_created();
    Ok((StatusCode::CREATED, Json(game)))
}
