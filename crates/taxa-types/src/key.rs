//! The two-part primary key addressing a taxonomy record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `(category, subcategory)` key pair.
///
/// `category` selects the partition; `subcategory` orders records within
/// it. The pair is globally unique; the backing table's primary key
/// enforces this structurally.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub category: String,
    pub subcategory: String,
}

impl NodeKey {
    /// Create a key from explicit components.
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    /// The key of a main-category record: the sort key repeats the
    /// partition key.
    pub fn main(category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            subcategory: category.clone(),
            category,
        }
    }

    /// Returns `true` if this key addresses a main-category record.
    pub fn is_main(&self) -> bool {
        self.category == self.subcategory
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.subcategory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_key_repeats_category() {
        let key = NodeKey::main("electronics");
        assert_eq!(key.category, "electronics");
        assert_eq!(key.subcategory, "electronics");
        assert!(key.is_main());
    }

    #[test]
    fn subcategory_key_is_not_main() {
        let key = NodeKey::new("electronics", "mobiles");
        assert!(!key.is_main());
    }

    #[test]
    fn display_joins_with_slash() {
        let key = NodeKey::new("electronics", "mobiles:apple");
        assert_eq!(key.to_string(), "electronics/mobiles:apple");
    }
}
