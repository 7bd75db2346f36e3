//! Domain services for Duo Finder.
//!
//! Services contain business logic that operates on domain models.

pub mod catalog;
pub mod catalog_store;
pub mod in_memory_store;

pub use catalog::CatalogService;
pub use catalog_store::CatalogStore;
pub use in_memory_store::InMemoryCatalogStore;
