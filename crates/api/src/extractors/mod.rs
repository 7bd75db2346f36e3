//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod submission;

pub use submission::Submission;
