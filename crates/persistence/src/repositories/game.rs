//! Game repository for database operations.

use sqlx::PgPool;

use crate::entities::{GameEntity, GameWithAdCountEntity};
use crate::metrics::QueryTimer;

/// Repository for game-related database operations.
#[derive(Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    /// Creates a new GameRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a game.
    pub async fn create(&self, title: &str, banner_url: &str) -> Result<GameEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_game");
        timer.finish(sqlx::query_as::<_, GameEntity>(
            r#"
            INSERT INTO games (title, banner_url)
            VALUES ($1, $2)
            RETURNING id, title, banner_url
            "#,
        )
        .bind(title)
        .bind(banner_url)
        .fetch_one(&self.pool)
        .await)
    }

    /// All games with the number of ads referencing each.
    pub async fn find_all_with_ad_count(&self) -> Result<Vec<GameWithAdCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_games_with_ad_count");
        timer.finish(sqlx::query_as::<_, GameWithAdCountEntity>(
            r#"
            SELECT g.id, g.title, g.banner_url, COUNT(a.id) AS ad_count
            FROM games g
            LEFT JOIN ads a ON a.game_id = g.id
            GROUP BY g.id, g.title, g.banner_url
            ORDER BY g.title
            "#,
        )
        .fetch_all(&self.pool)
        .await)
    }
}
