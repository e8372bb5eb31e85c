//! Costing: filament, energy and sale-price arithmetic
//!
//! Every function here is pure and deterministic. Results are never rounded;
//! rounding to cents is a presentation concern, see [`round_money`] and
//! [`CostBreakdown::rounded`].

pub mod breakdown;
pub mod calculator;

pub use breakdown::{CostBreakdown, EnergyRates};
pub use calculator::{round_money, CostCalculator};
