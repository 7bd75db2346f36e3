//! Repository implementations for database operations.

pub mod ad;
pub mod game;

pub use ad::AdRepository;
pub use game::GameRepository;
