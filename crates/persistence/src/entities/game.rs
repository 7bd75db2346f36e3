//! Game entity (database row mapping).

use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Game, GameSummary};

/// Database row mapping for the games table.
#[derive(Debug, Clone, FromRow)]
pub struct GameEntity {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
}

/// A games row joined with its ad count.
#[derive(Debug, Clone, FromRow)]
pub struct GameWithAdCountEntity {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
    pub ad_count: i64,
}

impl From<GameEntity> for Game {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            banner_url: entity.banner_url,
        }
    }
}

impl From<GameWithAdCountEntity> for GameSummary {
    fn from(entity: GameWithAdCountEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            banner_url: entity.banner_url,
            ad_count: entity.ad_count,
        }
    }
}
