//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every value has a default so a
//! fresh checkout runs without a `.env` file.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://spoolwise.db";
pub const DEFAULT_MODELS_DIR: &str = "assets/models";
pub const DEFAULT_RUST_LOG: &str = "spoolwise=info";

/// Pricing inputs applied when a project is costed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingDefaults {
    /// Printer draw in watts
    pub power_watts: f64,
    /// Electricity price per kWh
    pub energy_cost_per_kwh: f64,
    /// Multiplier from total cost to suggested sale price
    pub margin_multiplier: f64,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            power_watts: 350.0,
            energy_cost_per_kwh: 0.15,
            margin_multiplier: 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    pub database_max_connections: u32,

    /// Directory receiving copies of imported model files
    pub models_dir: PathBuf,

    pub pricing: PricingDefaults,

    /// Spools below this share of their initial weight are low stock
    pub low_stock_percent: f64,

    /// Runtime configuration
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 4,
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            pricing: PricingDefaults::default(),
            low_stock_percent: 20.0,
            rust_log: DEFAULT_RUST_LOG.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            models_dir: lookup("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.models_dir),
            pricing: PricingDefaults {
                power_watts: non_negative_or(
                    &lookup,
                    "PRINTER_POWER_WATTS",
                    defaults.pricing.power_watts,
                )?,
                energy_cost_per_kwh: non_negative_or(
                    &lookup,
                    "ENERGY_COST_PER_KWH",
                    defaults.pricing.energy_cost_per_kwh,
                )?,
                margin_multiplier: non_negative_or(
                    &lookup,
                    "MARGIN_MULTIPLIER",
                    defaults.pricing.margin_multiplier,
                )?,
            },
            low_stock_percent: non_negative_or(
                &lookup,
                "LOW_STOCK_PERCENT",
                defaults.low_stock_percent,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        if config.database_max_connections == 0 {
            return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be at least 1"));
        }
        if config.low_stock_percent > 100.0 {
            return Err(anyhow!("LOW_STOCK_PERCENT must be between 0 and 100"));
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

fn non_negative_or<F>(lookup: &F, key: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f64 = parse_or(lookup, key, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(anyhow!("{} must be a non-negative number", key));
    }
    Ok(value)
}
