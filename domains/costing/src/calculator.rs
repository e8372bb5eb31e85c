//! Cost arithmetic for print jobs

/// Stateless cost calculator.
///
/// Negative physical inputs never raise: they collapse the result to `0.0`.
pub struct CostCalculator;

impl CostCalculator {
    /// Material cost of `weight_g` grams at `price_per_kg`.
    pub fn filament_cost(weight_g: f64, price_per_kg: f64) -> f64 {
        if weight_g < 0.0 || price_per_kg < 0.0 {
            return 0.0;
        }
        (weight_g / 1000.0) * price_per_kg
    }

    /// Electricity cost of running a `power_watts` printer for `time_hours`.
    pub fn energy_cost(power_watts: f64, time_hours: f64, cost_per_kwh: f64) -> f64 {
        if power_watts < 0.0 || time_hours < 0.0 || cost_per_kwh < 0.0 {
            return 0.0;
        }
        let kwh_consumed = (power_watts * time_hours) / 1000.0;
        kwh_consumed * cost_per_kwh
    }

    /// Plain sum. Inputs are expected to be validated already.
    pub fn total_cost(filament_cost: f64, energy_cost: f64, additional: f64) -> f64 {
        filament_cost + energy_cost + additional
    }

    /// Sale price after applying a margin multiplier (e.g. 4.0 for retail).
    pub fn sale_price(total_cost: f64, margin_multiplier: f64) -> f64 {
        if total_cost < 0.0 || margin_multiplier < 0.0 {
            return 0.0;
        }
        total_cost * margin_multiplier
    }
}

/// Round a monetary amount to two decimals, half away from zero.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
