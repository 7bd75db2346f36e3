//! Domain models for Duo Finder.

pub mod ad;
pub mod game;
pub mod lenient;
pub mod validation;

pub use ad::{AdDiscord, AdListing, AdListingRow, AdRecord, CreateAdRequest, NewAd, NewAdRecord};
pub use game::{CreateGameRequest, Game, GameSummary, NewGame};
pub use validation::ValidationIssue;
