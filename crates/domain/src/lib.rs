//! Domain layer for the Duo Finder backend.
//!
//! This crate contains:
//! - Domain models (Game, Ad) and their intake validation
//! - The catalog service and its storage contract
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{CatalogError, StoreError};
