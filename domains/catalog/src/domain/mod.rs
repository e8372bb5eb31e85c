//! Catalog domain layer

pub mod entities;
