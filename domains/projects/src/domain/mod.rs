//! Projects domain layer: entities, status lifecycle, statistics

pub mod entities;
pub mod state;
pub mod stats;
