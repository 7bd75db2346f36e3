//! Ad repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AdEntity, AdListingEntity};
use crate::metrics::QueryTimer;

/// Repository for ad-related database operations.
#[derive(Clone)]
pub struct AdRepository {
    pool: PgPool,
}

impl AdRepository {
    /// Creates a new AdRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an ad. Fails with a foreign key violation if the game is unknown.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        game_id: Uuid,
        name: &str,
        years_playing: i32,
        discord: &str,
        week_days: &str,
        hour_start: i32,
        hour_end: i32,
        use_voice_channel: bool,
    ) -> Result<AdEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_ad");
        timer.finish(sqlx::query_as::<_, AdEntity>(
            r#"
            INSERT INTO ads (game_id, name, years_playing, discord, week_days,
                             hour_start, hour_end, use_voice_channel)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(game_id)
        .bind(name)
        .bind(years_playing)
        .bind(discord)
        .bind(week_days)
        .bind(hour_start)
        .bind(hour_end)
        .bind(use_voice_channel)
        .fetch_one(&self.pool)
        .await)
    }

    /// Listing columns for a game's ads, newest first.
    pub async fn find_listings_by_game_id(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<AdListingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_ads_by_game");
        timer.finish(sqlx::query_as::<_, AdListingEntity>(
            r#"
            SELECT id, name, week_days, use_voice_channel, years_playing, hour_start, hour_end
            FROM ads
            WHERE game_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await)
    }

    /// Discord handle of one ad.
    pub async fn find_discord_by_id(&self, ad_id: Uuid) -> Result<Option<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_ad_discord");
        timer.finish(sqlx::query_scalar::<_, String>(
            r#"
            SELECT discord FROM ads WHERE id = $1
            "#,
        )
        .bind(ad_id)
        .fetch_optional(&self.pool)
        .await)
    }
}
