//! Cost breakdown of a single print job

use serde::{Deserialize, Serialize};

use crate::calculator::{round_money, CostCalculator};

/// Printer power draw and electricity tariff used for energy costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRates {
    pub power_watts: f64,
    pub cost_per_kwh: f64,
}

impl EnergyRates {
    pub const DEFAULT_POWER_WATTS: f64 = 350.0;
    pub const DEFAULT_COST_PER_KWH: f64 = 0.15;

    pub fn new(power_watts: f64, cost_per_kwh: f64) -> Self {
        Self {
            power_watts,
            cost_per_kwh,
        }
    }
}

impl Default for EnergyRates {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POWER_WATTS, Self::DEFAULT_COST_PER_KWH)
    }
}

/// Filament, energy and total cost of a print job
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub filament_cost: f64,
    pub energy_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Compute the unrounded breakdown for a job.
    pub fn compute(
        weight_g: f64,
        price_per_kg: f64,
        print_time_h: f64,
        rates: EnergyRates,
    ) -> Self {
        let filament_cost = CostCalculator::filament_cost(weight_g, price_per_kg);
        let energy_cost =
            CostCalculator::energy_cost(rates.power_watts, print_time_h, rates.cost_per_kwh);
        Self {
            filament_cost,
            energy_cost,
            total_cost: CostCalculator::total_cost(filament_cost, energy_cost, 0.0),
        }
    }

    /// Round every field to cents. The total is rounded from the unrounded
    /// sum, so it may differ by a cent from the sum of the rounded parts.
    pub fn rounded(self) -> Self {
        Self {
            filament_cost: round_money(self.filament_cost),
            energy_cost: round_money(self.energy_cost),
            total_cost: round_money(self.total_cost),
        }
    }

    /// Sale price of the job for the given margin multiplier.
    pub fn sale_price(&self, margin_multiplier: f64) -> f64 {
        CostCalculator::sale_price(self.total_cost, margin_multiplier)
    }
}
