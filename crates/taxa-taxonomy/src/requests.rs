//! Typed request structures for mutating operations.
//!
//! The invoking agent supplies flat name/value parameter sets; the edge
//! layer converts them into these structs once, so the store's operations
//! work with named optional fields and explicit defaults instead of
//! dynamic maps.

use serde::{Deserialize, Serialize};

/// Parameters for an add operation.
///
/// With no `subcategory`, this adds a main category at level 1. With one,
/// it adds a subcategory whose level is taken verbatim from `level` when
/// supplied and inferred from the path depth otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddRequest {
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub description: String,
    #[serde(default)]
    pub level: Option<u32>,
}

impl AddRequest {
    /// An add of a main category.
    pub fn main(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
            description: description.into(),
            level: None,
        }
    }

    /// An add of a subcategory under `category`.
    pub fn subcategory(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: Some(subcategory.into()),
            description: description.into(),
            level: None,
        }
    }

    /// Override the inferred level with an explicit one.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Parameters for a delete operation.
///
/// With a `subcategory_path`, deletes that one subcategory record. Without
/// one, deletes the main-category record, gated on the partition holding
/// no other records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub category: String,
    #[serde(default)]
    pub subcategory_path: Option<String>,
}

impl DeleteRequest {
    /// A delete of the main-category record.
    pub fn main(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory_path: None,
        }
    }

    /// A delete of one subcategory record.
    pub fn subcategory(category: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory_path: Some(path.into()),
        }
    }
}
