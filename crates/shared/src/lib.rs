//! Shared utilities and common types for the Duo Finder backend.
//!
//! This crate provides functionality used across the other crates:
//! - Time-of-day codec (`"HH:MM"` <-> minutes since midnight)
//! - Weekly availability codec (weekday list <-> delimited string)
//! - Reusable field validators

pub mod availability;
pub mod time_codec;
pub mod validation;
