//! Ad entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{AdListingRow, AdRecord};

/// Database row mapping for the ads table.
#[derive(Debug, Clone, FromRow)]
pub struct AdEntity {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
    pub created_at: DateTime<Utc>,
}

/// The columns a listing may select. Never includes `discord`.
#[derive(Debug, Clone, FromRow)]
pub struct AdListingEntity {
    pub id: Uuid,
    pub name: String,
    pub week_days: String,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: i32,
    pub hour_end: i32,
}

impl From<AdEntity> for AdRecord {
    fn from(entity: AdEntity) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            years_playing: entity.years_playing,
            discord: entity.discord,
            week_days: entity.week_days,
            hour_start: entity.hour_start,
            hour_end: entity.hour_end,
            use_voice_channel: entity.use_voice_channel,
            created_at: entity.created_at,
        }
    }
}

impl From<AdListingEntity> for AdListingRow {
    fn from(entity: AdListingEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            week_days: entity.week_days,
            use_voice_channel: entity.use_voice_channel,
            years_playing: entity.years_playing,
            hour_start: entity.hour_start,
            hour_end: entity.hour_end,
        }
    }
}
