//! Domain entities for Projects domain
//!
//! A project references a model and a filament without owning them. Either
//! reference may dangle after the model or spool is deleted; reads then report
//! the joined fields as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use spoolwise_common::validation::non_negative_amount;
use spoolwise_common::{Error, FilamentId, ModelId, ProjectId, Result, UserId};
use spoolwise_costing::{CostBreakdown, CostCalculator};
use spoolwise_inventory::MaterialType;

/// Project status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default,
)]
pub enum ProjectStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "InProgress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown project status: {}", s)))
    }
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub model_id: Option<ModelId>,
    pub filament_id: Option<FilamentId>,
    pub weight_grams: f64,
    pub print_time_hours: f64,
    pub status: ProjectStatus,
    pub filament_cost: f64,
    pub energy_cost: f64,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn costs(&self) -> CostBreakdown {
        CostBreakdown {
            filament_cost: self.filament_cost,
            energy_cost: self.energy_cost,
            total_cost: self.total_cost,
        }
    }

    /// Costs beyond filament and energy folded into the total
    pub fn other_costs(&self) -> f64 {
        self.total_cost - self.filament_cost - self.energy_cost
    }

    pub fn sale_price(&self, margin_multiplier: f64) -> f64 {
        CostCalculator::sale_price(self.total_cost, margin_multiplier)
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Project with the display fields of its model and filament.
///
/// The joined fields are `None` when the reference is unset or dangling.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ProjectDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub model_name: Option<String>,
    pub filament_brand: Option<String>,
    pub filament_material: Option<MaterialType>,
}

/// Input for creating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProject {
    pub owner_id: UserId,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: String,

    pub model_id: Option<ModelId>,
    pub filament_id: Option<FilamentId>,

    #[validate(custom(function = "non_negative_amount"))]
    pub weight_grams: f64,

    #[validate(custom(function = "non_negative_amount"))]
    pub print_time_hours: f64,

    pub status: ProjectStatus,
}

impl NewProject {
    /// Pending project with no references and zero weight and time
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            name: name.into(),
            description: String::new(),
            model_id: None,
            filament_id: None,
            weight_grams: 0.0,
            print_time_hours: 0.0,
            status: ProjectStatus::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_model(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    pub fn with_filament(mut self, filament_id: FilamentId) -> Self {
        self.filament_id = Some(filament_id);
        self
    }

    pub fn with_print(mut self, weight_grams: f64, print_time_hours: f64) -> Self {
        self.weight_grams = weight_grams;
        self.print_time_hours = print_time_hours;
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial update of a project.
///
/// `None` leaves a field untouched. The references use a nested option:
/// `Some(None)` clears the reference, `Some(Some(id))` points it elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProjectUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub status: Option<ProjectStatus>,

    #[validate(custom(function = "non_negative_amount"))]
    pub weight_grams: Option<f64>,

    #[validate(custom(function = "non_negative_amount"))]
    pub print_time_hours: Option<f64>,

    #[validate(custom(function = "non_negative_amount"))]
    pub total_cost: Option<f64>,

    #[validate(custom(function = "non_negative_amount"))]
    pub filament_cost: Option<f64>,

    #[validate(custom(function = "non_negative_amount"))]
    pub energy_cost: Option<f64>,

    pub model_id: Option<Option<ModelId>>,
    pub filament_id: Option<Option<FilamentId>>,
}

impl ProjectUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn weight_grams(mut self, weight_grams: f64) -> Self {
        self.weight_grams = Some(weight_grams);
        self
    }

    pub fn print_time_hours(mut self, print_time_hours: f64) -> Self {
        self.print_time_hours = Some(print_time_hours);
        self
    }

    pub fn total_cost(mut self, total_cost: f64) -> Self {
        self.total_cost = Some(total_cost);
        self
    }

    pub fn filament_cost(mut self, filament_cost: f64) -> Self {
        self.filament_cost = Some(filament_cost);
        self
    }

    pub fn energy_cost(mut self, energy_cost: f64) -> Self {
        self.energy_cost = Some(energy_cost);
        self
    }

    /// Set all three cost fields from a breakdown
    pub fn costs(self, costs: CostBreakdown) -> Self {
        self.filament_cost(costs.filament_cost)
            .energy_cost(costs.energy_cost)
            .total_cost(costs.total_cost)
    }

    pub fn model(mut self, model_id: Option<ModelId>) -> Self {
        self.model_id = Some(model_id);
        self
    }

    pub fn filament(mut self, filament_id: Option<FilamentId>) -> Self {
        self.filament_id = Some(filament_id);
        self
    }
}
