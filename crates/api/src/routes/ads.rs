//! Ad endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Submission;
use crate::middleware::metrics::record_ad_created;
use domain::models::{AdDiscord, AdListing, AdRecord, CreateAdRequest};

/// Publish an ad for a game.
///
/// POST /api/v1/games/:game_id/ads
pub async fn create_ad(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Submission(request): Submission<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdRecord>), ApiError> {
    let ad = state.catalog.create_ad(&game_id, request).await?;
    record_ad_created();
    Ok((StatusCode::CREATED, Json(ad)))
}

/// Public listings for a game, newest first. Discord handles are left out.
///
/// GET /api/v1/games/:game_id/ads
pub async fn list_ads(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<AdListing>>, ApiError> {
    let ads = state.catalog.list_ads_for_game(&game_id).await?;
    Ok(Json(ads))
}

/// GET /api/v1/ads/:ad_id/discord
pub async fn get_ad_discord(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<Json<AdDiscord>, ApiError> {
    let discord = state.catalog.get_discord_for_ad(&ad_id).await?;
    Ok(Json(discord))
}
