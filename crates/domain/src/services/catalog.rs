//! Catalog service: ad intake and query.
//!
//! Validated submissions are encoded into their storage form on the way in
//! and decoded into display form on the way out. Listings never carry the
//! discord handle; it is only readable through [`CatalogService::get_discord_for_ad`].

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::catalog_store::CatalogStore;
use crate::error::CatalogError;
use crate::models::ad::{HOUR_END_MESSAGE, HOUR_START_MESSAGE};
use crate::models::{
    AdDiscord, AdListing, AdListingRow, AdRecord, CreateAdRequest, CreateGameRequest, Game,
    GameSummary, NewAd, NewAdRecord, ValidationIssue,
};
use shared::availability::{decode_week_days, encode_week_days};
use shared::time_codec::{hour_string_to_minutes, minutes_to_hour_string};

/// Entry point for every game and ad operation.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for lifecycle management.
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Validate, encode and persist a new ad for `game_id`.
    pub async fn create_ad(
        &self,
        game_id: &str,
        request: CreateAdRequest,
    ) -> Result<AdRecord, CatalogError> {
        let new_ad = request.into_new_ad(game_id).map_err(|issues| {
            warn!(game_id = %game_id, issues = issues.len(), "Ad submission rejected");
            CatalogError::Validation(issues)
        })?;

        let record = encode_ad(new_ad).map_err(CatalogError::Validation)?;
        let ad = self.store.create_ad(record).await?;

        info!(ad_id = %ad.id, game_id = %ad.game_id, "Ad created");
        Ok(ad)
    }

    /// Decoded listings for a game, newest first. Unknown ids list nothing.
    pub async fn list_ads_for_game(&self, game_id: &str) -> Result<Vec<AdListing>, CatalogError> {
        let Ok(game_id) = Uuid::parse_str(game_id) else {
            debug!(game_id = %game_id, "Listing ads for malformed game id");
            return Ok(Vec::new());
        };

        let rows = self.store.list_ads(game_id).await?;
        debug!(game_id = %game_id, count = rows.len(), "Listed ads");
        Ok(rows.into_iter().map(decode_listing).collect())
    }

    /// The discord handle of a single ad.
    pub async fn get_discord_for_ad(&self, ad_id: &str) -> Result<AdDiscord, CatalogError> {
        let not_found = || CatalogError::NotFound("Ad not found".to_string());

        let ad_id = Uuid::parse_str(ad_id).map_err(|_| not_found())?;
        let discord = self
            .store
            .find_ad_discord(ad_id)
            .await?
            .ok_or_else(not_found)?;

        debug!(ad_id = %ad_id, "Discord handle looked up");
        Ok(AdDiscord { discord })
    }

    /// Validate and persist a new game.
    pub async fn create_game(&self, request: CreateGameRequest) -> Result<Game, CatalogError> {
        let new_game = request.into_new_game().map_err(|issues| {
            warn!(issues = issues.len(), "Game submission rejected");
            CatalogError::Validation(issues)
        })?;

        let game = self.store.create_game(new_game).await?;

        info!(game_id = %game.id, title = %game.title, "Game created");
        Ok(game)
    }

    /// All games with their ad counts.
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, CatalogError> {
        Ok(self.store.list_games().await?)
    }

    /// Checks that storage answers.
    pub async fn check_storage(&self) -> Result<(), CatalogError> {
        Ok(self.store.ping().await?)
    }
}

/// Encodes weekdays and hours into their storage form.
///
/// A time the codec cannot read is reported against its field.
fn encode_ad(ad: NewAd) -> Result<NewAdRecord, Vec<ValidationIssue>> {
    let hour_start = hour_string_to_minutes(&ad.hour_start);
    let hour_end = hour_string_to_minutes(&ad.hour_end);

    match (hour_start, hour_end) {
        (Some(hour_start), Some(hour_end)) => Ok(NewAdRecord {
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            week_days: encode_week_days(&ad.week_days),
            hour_start,
            hour_end,
            use_voice_channel: ad.use_voice_channel,
        }),
        _ => {
            let mut issues = Vec::new();
            if hour_start.is_none() {
                issues.push(ValidationIssue::new("hourStart", HOUR_START_MESSAGE));
            }
            if hour_end.is_none() {
                issues.push(ValidationIssue::new("hourEnd", HOUR_END_MESSAGE));
            }
            Err(issues)
        }
    }
}

fn decode_listing(row: AdListingRow) -> AdListing {
    AdListing {
        id: row.id,
        name: row.name,
        week_days: decode_week_days(&row.week_days),
        use_voice_channel: row.use_voice_channel,
        years_playing: row.years_playing,
        hour_start: minutes_to_hour_string(row.hour_start),
        hour_end: minutes_to_hour_string(row.hour_end),
    }
}
