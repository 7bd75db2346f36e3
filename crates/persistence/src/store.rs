//! PostgreSQL-backed catalog store.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::metrics::{record_pool_metrics, QueryTimer};
use crate::repositories::{AdRepository, GameRepository};
use domain::models::{AdListingRow, AdRecord, Game, GameSummary, NewAdRecord, NewGame};
use domain::services::CatalogStore;
use domain::StoreError;

/// Postgres error code for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Catalog store over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
    games: GameRepository,
    ads: AdRepository,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            games: GameRepository::new(pool.clone()),
            ads: AdRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Maps a sqlx error onto the storage contract.
///
/// A foreign key violation can only come from an ad referencing a missing game.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::RowNotFound => StoreError::NotFound("Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
            StoreError::NotFound("Game not found".to_string())
        }
        _ => StoreError::Unavailable(format!("Database error: {}", err)),
    }
}

#[async_trait::async_trait]
impl CatalogStore for PgCatalogStore {
    async fn create_game(&self, new_game: NewGame) -> Result<Game, StoreError> {
        let entity = self
            .games
            .create(&new_game.title, &new_game.banner_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        let entities = self
            .games
            .find_all_with_ad_count()
            .await
            .map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn create_ad(&self, record: NewAdRecord) -> Result<AdRecord, StoreError> {
        let entity = self
            .ads
            .create(
                record.game_id,
                &record.name,
                record.years_playing,
                &record.discord,
                &record.week_days,
                record.hour_start,
                record.hour_end,
                record.use_voice_channel,
            )
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn list_ads(&self, game_id: Uuid) -> Result<Vec<AdListingRow>, StoreError> {
        let entities = self
            .ads
            .find_listings_by_game_id(game_id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn find_ad_discord(&self, ad_id: Uuid) -> Result<Option<String>, StoreError> {
        self.ads
            .find_discord_by_id(ad_id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let timer = QueryTimer::new("ping");
        let result = timer.finish(sqlx::query("SELECT 1").execute(&self.pool).await);
        record_pool_metrics(&self.pool);
        result.map(|_| ()).map_err(map_sqlx_error)
    }

    async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}
