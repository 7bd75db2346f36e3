//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod ad;
pub mod game;

pub use ad::{AdEntity, AdListingEntity};
pub use game::{GameEntity, GameWithAdCountEntity};
