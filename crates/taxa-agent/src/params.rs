//! Flat parameter extraction into typed requests.
//!
//! The envelope's `parameters` array is folded into a [`ParamMap`] once at
//! the edge; the map then yields the typed request structs the taxonomy
//! store consumes. Missing required fields are left empty here and rejected
//! by the store's own validation, so there is exactly one validation site.

use std::collections::HashMap;

use serde_json::Value;

use taxa_taxonomy::{AddRequest, DeleteRequest};

use crate::envelope::Parameter;

/// Name → value view over an envelope parameter array.
///
/// Entries without a value are skipped; a duplicated name keeps the last
/// occurrence.
#[derive(Clone, Debug, Default)]
pub struct ParamMap {
    values: HashMap<String, Value>,
}

impl ParamMap {
    /// Fold a parameter array into a map.
    pub fn from_parameters(parameters: &[Parameter]) -> Self {
        let mut values = HashMap::new();
        for param in parameters {
            if let Some(value) = &param.value {
                values.insert(param.name.clone(), value.clone());
            }
        }
        Self { values }
    }

    /// Returns `true` if a value was supplied for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// A string-valued parameter; numbers are rendered to their decimal
    /// form so `"level": 2` and `"level": "2"` extract alike.
    pub fn str_param(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// An integer-valued parameter, accepted as a JSON number or a numeric
    /// string (the agent runtime is not consistent about which it sends).
    pub fn u32_param(&self, name: &str) -> Option<u32> {
        match self.values.get(name)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The add operation's parameter set.
    pub fn to_add_request(&self) -> AddRequest {
        AddRequest {
            category: self.str_param("category").unwrap_or_default(),
            subcategory: self.str_param("subcategory"),
            description: self.str_param("description").unwrap_or_default(),
            level: self.u32_param("level"),
        }
    }

    /// The delete operation's parameter set (`categoryName` /
    /// `subcategoryPath` on the wire).
    pub fn to_delete_request(&self) -> DeleteRequest {
        DeleteRequest {
            category: self.str_param("categoryName").unwrap_or_default(),
            subcategory_path: self.str_param("subcategoryPath"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[Parameter]) -> ParamMap {
        ParamMap::from_parameters(entries)
    }

    #[test]
    fn folds_parameters_and_skips_valueless_entries() {
        let map = params(&[
            Parameter::string("category", "books"),
            Parameter {
                name: "subcategory".into(),
                param_type: Some("string".into()),
                value: None,
            },
        ]);
        assert!(map.contains("category"));
        assert!(!map.contains("subcategory"));
    }

    #[test]
    fn level_extracts_from_number_or_string() {
        let map = params(&[Parameter::number("level", 3)]);
        assert_eq!(map.u32_param("level"), Some(3));

        let map = params(&[Parameter::string("level", "4")]);
        assert_eq!(map.u32_param("level"), Some(4));

        let map = params(&[Parameter::string("level", "many")]);
        assert_eq!(map.u32_param("level"), None);
    }

    #[test]
    fn add_request_carries_optional_fields() {
        let map = params(&[
            Parameter::string("category", "electronics"),
            Parameter::string("subcategory", "mobiles"),
            Parameter::string("description", "Phones"),
            Parameter::number("level", 2),
        ]);
        let req = map.to_add_request();
        assert_eq!(req.category, "electronics");
        assert_eq!(req.subcategory.as_deref(), Some("mobiles"));
        assert_eq!(req.level, Some(2));
    }

    #[test]
    fn missing_required_fields_default_to_empty() {
        let req = params(&[]).to_add_request();
        assert!(req.category.is_empty());
        assert!(req.description.is_empty());

        let req = params(&[]).to_delete_request();
        assert!(req.category.is_empty());
        assert!(req.subcategory_path.is_none());
    }

    #[test]
    fn delete_request_uses_wire_names() {
        let map = params(&[
            Parameter::string("categoryName", "electronics"),
            Parameter::string("subcategoryPath", "mobiles:apple"),
        ]);
        let req = map.to_delete_request();
        assert_eq!(req.category, "electronics");
        assert_eq!(req.subcategory_path.as_deref(), Some("mobiles:apple"));
    }
}
