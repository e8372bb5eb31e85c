//! Cross-domain workshop scenarios
//!
//! Every test opens its own in-memory database and asset directory.

#![allow(dead_code)]

mod common;
mod scenarios;
