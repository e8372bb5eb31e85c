//! Inventory domain layer: entities and stock alerts

pub mod entities;
