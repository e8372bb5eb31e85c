//! Shared utilities, configuration, and error handling for Spoolwise
//!
//! This crate provides common functionality used across the Spoolwise domains:
//! - Configuration management following 12-factor principles
//! - Error types and the mutation outcome returned to callers
//! - Typed entity identifiers
//! - SQLite pool construction and schema migrations

pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod validation;

pub use config::{Config, PricingDefaults};
pub use db::DbPool;
pub use error::{Error, Result};
pub use ids::{FilamentId, ModelId, ProjectId, UserId};
pub use outcome::Outcome;
