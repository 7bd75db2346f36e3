//! Storage contract for the game and ad catalog.

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{AdListingRow, AdRecord, Game, GameSummary, NewAdRecord, NewGame};

/// Storage collaborator used by [`super::CatalogService`].
///
/// Implementations assign ids and creation timestamps and enforce that an
/// ad references an existing game.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a new game.
    async fn create_game(&self, new_game: NewGame) -> Result<Game, StoreError>;

    /// All games with their ad counts, in backend order.
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError>;

    /// Persist an encoded ad. Fails with `NotFound` if the game is unknown.
    async fn create_ad(&self, record: NewAdRecord) -> Result<AdRecord, StoreError>;

    /// Listing rows for a game, newest first.
    async fn list_ads(&self, game_id: Uuid) -> Result<Vec<AdListingRow>, StoreError>;

    /// The discord handle of one ad, or `None` if there is no such ad.
    async fn find_ad_discord(&self, ad_id: Uuid) -> Result<Option<String>, StoreError>;

    /// Round-trip to the backend for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources. Called once on shutdown.
    async fn close(&self) {}
}
