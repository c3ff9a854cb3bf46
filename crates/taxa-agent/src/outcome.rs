//! The tri-part result body returned for mutating operations.

use serde::{Deserialize, Serialize};

use taxa_types::CategoryNode;

/// The structured outcome of an add or delete, serialized into the
/// response body as `{success, message, data?}`. Read operations return a
/// plain record array on success and this shape on failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CategoryNode>,
}

impl Outcome {
    /// A successful outcome, optionally echoing the affected record.
    pub fn ok(message: impl Into<String>, data: Option<CategoryNode>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// A failed outcome.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Serialize to the response-body JSON string.
    pub fn to_body(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"message":"failed to serialize outcome"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_is_omitted_when_absent() {
        let body = Outcome::fail("category 'x' not found").to_body();
        assert!(!body.contains("\"data\""));
    }

    #[test]
    fn success_body_includes_record() {
        let node = CategoryNode::main("books", "Printed books");
        let body = Outcome::ok("Successfully added main category 'books'", Some(node)).to_body();
        assert!(body.contains("\"success\":true"));
        assert!(body.contains("\"category\":\"books\""));
    }
}
