//! Typed identifiers for persisted entities
//!
//! Each id is a transparent wrapper over the SQLite `INTEGER PRIMARY KEY`, so
//! a `FilamentId` can never be passed where a `ModelId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Owner of projects and (optionally) filament spools
    UserId
);
entity_id!(
    /// Filament spool in the inventory
    FilamentId
);
entity_id!(
    /// 3D model in the catalog
    ModelId
);
entity_id!(
    /// Print project
    ProjectId
);
