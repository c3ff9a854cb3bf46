//! Declarative table schema used by provisioning.

use serde::{Deserialize, Serialize};

/// The type of a key attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    String,
    Number,
    Binary,
}

/// A key attribute definition (name + type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    pub name: String,
    pub key_type: KeyType,
}

impl KeyDefinition {
    /// A string-typed key attribute.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_type: KeyType::String,
        }
    }
}

/// Schema definition for the backing table: a name plus the two-part
/// primary key (partition key selects the partition, sort key orders
/// within it). No secondary indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub partition_key: KeyDefinition,
    pub sort_key: KeyDefinition,
}

impl TableDefinition {
    /// The canonical category table: `category` / `subcategory`, both
    /// string-typed.
    pub fn product_categories() -> Self {
        Self {
            name: "ProductCategories".to_string(),
            partition_key: KeyDefinition::string("category"),
            sort_key: KeyDefinition::string("subcategory"),
        }
    }
}
