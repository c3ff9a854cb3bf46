//! The taxonomy record entity.

use serde::{Deserialize, Serialize};

use crate::key::NodeKey;
use crate::path::MAIN_LEVEL;

/// A single record in the category hierarchy.
///
/// A main category is stored with a self-referential sort key
/// (`subcategory == category`) at level 1. Subcategories carry their own
/// sort key and a level reflecting their nesting depth.
///
/// The enrichment fields (`attributes`, `subcategory_id`, `last_updated`,
/// `active`) are populated only by the bulk-load path; the single-item
/// write path never sets them, and they are omitted from serialized output
/// when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: String,
    pub subcategory: String,
    pub description: String,
    pub level: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CategoryNode {
    /// Build a main-category record: self-referential sort key, level 1.
    pub fn main(category: impl Into<String>, description: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            subcategory: category.clone(),
            category,
            description: description.into(),
            level: MAIN_LEVEL,
            attributes: Vec::new(),
            subcategory_id: None,
            last_updated: None,
            active: None,
        }
    }

    /// Build a subcategory record at an explicit level.
    pub fn subcategory(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        description: impl Into<String>,
        level: u32,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            description: description.into(),
            level,
            attributes: Vec::new(),
            subcategory_id: None,
            last_updated: None,
            active: None,
        }
    }

    /// The primary key of this record.
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.category.clone(), self.subcategory.clone())
    }

    /// Returns `true` if this is a main-category record.
    pub fn is_main(&self) -> bool {
        self.category == self.subcategory
    }
}
