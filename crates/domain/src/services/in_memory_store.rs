//! In-memory catalog store for development and testing.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::catalog_store::CatalogStore;
use crate::error::StoreError;
use crate::models::{AdListingRow, AdRecord, Game, GameSummary, NewAdRecord, NewGame};

#[derive(Debug, Default)]
struct Tables {
    games: Vec<Game>,
    ads: Vec<AdRecord>,
}

/// Catalog store that keeps everything in process memory.
///
/// Games are listed in insertion order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
    /// Whether every call should fail as if the backend were down.
    pub simulate_outage: bool,
}

impl InMemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every call fails with `StoreError::Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            tables: RwLock::default(),
            simulate_outage: true,
        }
    }

    /// Every stored ad in its stored form, oldest first.
    pub async fn ad_records(&self) -> Vec<AdRecord> {
        self.tables.read().await.ads.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_outage {
            tracing::warn!("In-memory catalog store simulating outage");
            return Err(StoreError::Unavailable("Simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create_game(&self, new_game: NewGame) -> Result<Game, StoreError> {
        self.check_available()?;

        let game = Game {
            id: Uuid::new_v4(),
            title: new_game.title,
            banner_url: new_game.banner_url,
        };
        self.tables.write().await.games.push(game.clone());
        Ok(game)
    }

    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        self.check_available()?;

        let tables = self.tables.read().await;
        Ok(tables
            .games
            .iter()
            .map(|game| GameSummary {
                id: game.id,
                title: game.title.clone(),
                banner_url: game.banner_url.clone(),
                ad_count: tables.ads.iter().filter(|ad| ad.game_id == game.id).count() as i64,
            })
            .collect())
    }

    async fn create_ad(&self, record: NewAdRecord) -> Result<AdRecord, StoreError> {
        self.check_available()?;

        let mut tables = self.tables.write().await;
        if !tables.games.iter().any(|game| game.id == record.game_id) {
            return Err(StoreError::NotFound("Game not found".to_string()));
        }

        let ad = AdRecord {
            id: Uuid::new_v4(),
            game_id: record.game_id,
            name: record.name,
            years_playing: record.years_playing,
            discord: record.discord,
            week_days: record.week_days,
            hour_start: record.hour_start,
            hour_end: record.hour_end,
            use_voice_channel: record.use_voice_channel,
            created_at: Utc::now(),
        };
        tables.ads.push(ad.clone());
        Ok(ad)
    }

    async fn list_ads(&self, game_id: Uuid) -> Result<Vec<AdListingRow>, StoreError> {
        self.check_available()?;

        let tables = self.tables.read().await;
        // Reverse insertion order first so equal timestamps still list newest first.
        let mut ads: Vec<&AdRecord> = tables
            .ads
            .iter()
            .rev()
            .filter(|ad| ad.game_id == game_id)
            .collect();
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(ads
            .into_iter()
            .map(|ad| AdListingRow {
                id: ad.id,
                name: ad.name.clone(),
                week_days: ad.week_days.clone(),
                use_voice_channel: ad.use_voice_channel,
                years_playing: ad.years_playing,
                hour_start: ad.hour_start,
                hour_end: ad.hour_end,
            })
            .collect())
    }

    async fn find_ad_discord(&self, ad_id: Uuid) -> Result<Option<String>, StoreError> {
        self.check_available()?;

        let tables = self.tables.read().await;
        Ok(tables
            .ads
            .iter()
            .find(|ad| ad.id == ad_id)
            .map(|ad| ad.discord.clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
