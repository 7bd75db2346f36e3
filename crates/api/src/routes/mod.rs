//! HTTP route handlers.

pub mod ads;
pub mod games;
pub mod health;
