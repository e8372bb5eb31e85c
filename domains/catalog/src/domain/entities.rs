//! Model catalog entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use spoolwise_common::ModelId;

/// A 3D model whose asset file lives in managed storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    pub description: String,
    pub file_path: String,
    pub thumbnail_path: Option<String>,
    pub added_date: DateTime<Utc>,
}

impl Model {
    pub fn file_path(&self) -> &Path {
        Path::new(&self.file_path)
    }

    /// Lowercased file extension, e.g. `stl` or `3mf`
    pub fn file_format(&self) -> Option<String> {
        self.file_path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// Metadata for a model being imported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewModel {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: String,
}

impl NewModel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
