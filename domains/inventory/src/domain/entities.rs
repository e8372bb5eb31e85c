//! Filament domain entities
//!
//! A spool's current weight starts equal to its initial weight and only moves
//! through the ledger's weight operations. Both weights and the price are
//! non-negative, and the current weight never exceeds the initial one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use spoolwise_common::validation::{non_negative_amount, positive_amount};
use spoolwise_common::{Error, FilamentId, Result, UserId};
use spoolwise_costing::CostCalculator;

pub const DEFAULT_DIAMETER_MM: f64 = 1.75;
pub const DEFAULT_DENSITY_G_CM3: f64 = 1.24;

/// Below this share of the initial weight an alert becomes critical
pub const CRITICAL_STOCK_PERCENT: f64 = 10.0;

/// Filament material
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default,
)]
pub enum MaterialType {
    #[default]
    #[serde(rename = "PLA")]
    #[sqlx(rename = "PLA")]
    Pla,
    #[serde(rename = "PETG")]
    #[sqlx(rename = "PETG")]
    Petg,
    #[serde(rename = "ABS")]
    #[sqlx(rename = "ABS")]
    Abs,
    #[serde(rename = "TPU")]
    #[sqlx(rename = "TPU")]
    Tpu,
    #[serde(rename = "ASA")]
    #[sqlx(rename = "ASA")]
    Asa,
    Other,
}

impl MaterialType {
    pub const ALL: [MaterialType; 6] = [
        MaterialType::Pla,
        MaterialType::Petg,
        MaterialType::Abs,
        MaterialType::Tpu,
        MaterialType::Asa,
        MaterialType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Pla => "PLA",
            MaterialType::Petg => "PETG",
            MaterialType::Abs => "ABS",
            MaterialType::Tpu => "TPU",
            MaterialType::Asa => "ASA",
            MaterialType::Other => "Other",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(format!("Unknown material type: {}", s)))
    }
}

/// Filament spool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Filament {
    pub id: FilamentId,
    pub brand: String,
    pub material_type: MaterialType,
    pub color: Option<String>,
    pub weight_initial_g: f64,
    pub weight_current_g: f64,
    pub price_per_kg: f64,
    pub diameter_mm: f64,
    pub density_g_cm3: f64,
    pub purchase_date: Option<NaiveDate>,
    pub owner_id: Option<UserId>,
}

impl Filament {
    /// Remaining weight as a percentage of the initial weight.
    ///
    /// `None` for spools registered with an initial weight of zero.
    pub fn remaining_percent(&self) -> Option<f64> {
        if self.weight_initial_g <= 0.0 {
            return None;
        }
        Some(self.weight_current_g / self.weight_initial_g * 100.0)
    }

    /// Label such as `Prusament PETG Galaxy Black`
    pub fn display_name(&self) -> String {
        match self.color.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(color) => format!("{} {} {}", self.brand, self.material_type, color),
            None => format!("{} {}", self.brand, self.material_type),
        }
    }

    /// Value of the material still on the spool
    pub fn stock_value(&self) -> f64 {
        CostCalculator::filament_cost(self.weight_current_g, self.price_per_kg)
    }

    pub fn is_empty(&self) -> bool {
        self.weight_current_g <= 0.0
    }
}

/// Input for registering a new spool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewFilament {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    pub material_type: MaterialType,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[validate(custom(function = "non_negative_amount"))]
    pub weight_initial_g: f64,

    #[validate(custom(function = "non_negative_amount"))]
    pub price_per_kg: f64,

    #[validate(custom(function = "positive_amount"))]
    pub diameter_mm: f64,

    #[validate(custom(function = "positive_amount"))]
    pub density_g_cm3: f64,

    pub purchase_date: Option<NaiveDate>,
    pub owner_id: Option<UserId>,
}

impl NewFilament {
    /// Spool with the standard 1.75 mm diameter and PLA-like density
    pub fn new(
        brand: impl Into<String>,
        material_type: MaterialType,
        weight_initial_g: f64,
        price_per_kg: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            material_type,
            color: None,
            weight_initial_g,
            price_per_kg,
            diameter_mm: DEFAULT_DIAMETER_MM,
            density_g_cm3: DEFAULT_DENSITY_G_CM3,
            purchase_date: None,
            owner_id: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    pub fn with_dimensions(mut self, diameter_mm: f64, density_g_cm3: f64) -> Self {
        self.diameter_mm = diameter_mm;
        self.density_g_cm3 = density_g_cm3;
        self
    }

    pub fn owned_by(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }
}

/// How urgently a spool needs replacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// A spool running low on material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAlert {
    pub filament: Filament,
    pub remaining_percent: f64,
    pub severity: AlertSeverity,
}

impl StockAlert {
    /// Alert for `filament` if its remaining share is below `threshold_percent`.
    pub fn classify(filament: &Filament, threshold_percent: f64) -> Option<Self> {
        let remaining_percent = filament.remaining_percent()?;
        if remaining_percent >= threshold_percent {
            return None;
        }

        let severity = if remaining_percent < CRITICAL_STOCK_PERCENT {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };

        Some(Self {
            filament: filament.clone(),
            remaining_percent,
            severity,
        })
    }
}

/// Remaining material of one type across all spools
#[derive(Debug, Clone, Copy, PartialEq, Serialize, sqlx::FromRow)]
pub struct MaterialStock {
    pub material_type: MaterialType,
    pub spool_count: i64,
    pub total_remaining_g: f64,
}

/// Totals across every spool
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InventorySummary {
    pub spool_count: i64,
    pub total_remaining_g: f64,
    pub stock_value: f64,
}

impl InventorySummary {
    pub fn from_filaments<'a>(filaments: impl IntoIterator<Item = &'a Filament>) -> Self {
        filaments
            .into_iter()
            .fold(Self::default(), |acc, filament| Self {
                spool_count: acc.spool_count + 1,
                total_remaining_g: acc.total_remaining_g + filament.weight_current_g,
                stock_value: acc.stock_value + filament.stock_value(),
            })
    }
}
