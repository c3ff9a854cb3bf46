//! Serde models of the agent request/response envelope.
//!
//! The wire format is camelCase JSON. Requests carry the operation as an
//! `apiPath` plus a flat `parameters` array; responses nest the serialized
//! result body under `response.responseBody."application/json"` alongside
//! the echoed routing fields and an HTTP status code.

use serde::{Deserialize, Serialize};

/// One entry of the flat parameter array.
///
/// Values arrive as strings or numbers depending on the declared parameter
/// type; entries without a value are ignored during extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl Parameter {
    /// A string-typed parameter.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: Some("string".to_string()),
            value: Some(serde_json::Value::String(value.into())),
        }
    }

    /// A number-typed parameter.
    pub fn number(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            param_type: Some("number".to_string()),
            value: Some(serde_json::Value::from(value)),
        }
    }
}

/// An incoming agent invocation.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    pub message_version: String,
    pub api_path: String,
    #[serde(default)]
    pub action_group: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl AgentRequest {
    /// Parse a request from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The outgoing agent response.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub message_version: String,
    pub response: ActionResponse,
}

/// The per-action response block: echoed routing fields, the HTTP status
/// the transport should report, and the serialized result body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: ResponseBody,
}

/// Result body keyed by content type, the body itself pre-serialized.
#[derive(Clone, Debug, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "application/json")]
    pub json: String,
}

impl AgentResponse {
    /// Assemble a response echoing the request's routing fields.
    pub fn build(
        message_version: impl Into<String>,
        action_group: impl Into<String>,
        api_path: impl Into<String>,
        http_method: impl Into<String>,
        status: u16,
        body: String,
    ) -> Self {
        Self {
            message_version: message_version.into(),
            response: ActionResponse {
                action_group: action_group.into(),
                api_path: api_path.into(),
                http_method: http_method.into(),
                http_status_code: status,
                response_body: ResponseBody { json: body },
            },
        }
    }

    /// The HTTP status carried in this response.
    pub fn status(&self) -> u16 {
        self.response.http_status_code
    }

    /// The serialized result body.
    pub fn body(&self) -> &str {
        &self.response.response_body.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_invocation() {
        let json = r#"{
            "messageVersion": "1.0",
            "agent": {"name": "productcatalogagent", "id": "IIDWUKXRYS"},
            "inputText": "add a category for books",
            "sessionId": "session-1",
            "actionGroup": "ProductCategoryManagement",
            "apiPath": "/addcategory",
            "httpMethod": "POST",
            "parameters": [
                {"name": "category", "type": "string", "value": "books"},
                {"name": "description", "type": "string", "value": "Printed books"},
                {"name": "level", "type": "number", "value": 1}
            ]
        }"#;

        let request = AgentRequest::from_json(json).unwrap();
        assert_eq!(request.api_path, "/addcategory");
        assert_eq!(request.parameters.len(), 3);
        assert_eq!(request.parameters[2].value, Some(serde_json::json!(1)));
    }

    #[test]
    fn parses_minimal_invocation() {
        let json = r#"{"messageVersion": "1.0", "apiPath": "/categories"}"#;
        let request = AgentRequest::from_json(json).unwrap();
        assert!(request.parameters.is_empty());
        assert!(request.action_group.is_none());
    }

    #[test]
    fn response_serializes_with_camel_case_and_content_type_key() {
        let response = AgentResponse::build(
            "1.0",
            "ProductCategoryManagement",
            "/addcategory",
            "POST",
            200,
            r#"{"success":true}"#.to_string(),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["messageVersion"], "1.0");
        assert_eq!(json["response"]["httpStatusCode"], 200);
        assert_eq!(
            json["response"]["responseBody"]["application/json"],
            r#"{"success":true}"#
        );
    }
}
