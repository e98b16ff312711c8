//! HTTP gateway envelopes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound API Gateway proxy event.
///
/// Only the fields the handler reads are modelled; everything else in the
/// gateway payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InboundEvent {
    /// Request body, possibly base64 encoded
    #[serde(default)]
    pub body: Option<String>,

    /// Whether `body` is base64 encoded
    #[serde(default, rename = "isBase64Encoded")]
    pub is_base64_encoded: Option<bool>,
}

impl InboundEvent {
    /// Event carrying a plain-text body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            is_base64_encoded: None,
        }
    }

    /// Event carrying a base64-encoded body.
    pub fn with_encoded_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            is_base64_encoded: Some(true),
        }
    }

    /// Interpret a raw invocation payload.
    ///
    /// Payloads that do not look like a gateway event (wrong field types,
    /// non-object JSON) are treated as an event without a body.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("Unrecognized event shape ({}), treating as empty", e);
            Self::default()
        })
    }

    pub fn is_encoded(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }
}

/// Outbound API Gateway proxy response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Response headers, always including `Content-Type`
    pub headers: HashMap<String, String>,

    /// JSON-encoded response body
    pub body: String,
}

impl ApiResponse {
    /// Decode the body back into JSON.
    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults() {
        let event: InboundEvent = serde_json::from_str("{}").unwrap();
        assert!(event.body.is_none());
        assert!(!event.is_encoded());
    }

    #[test]
    fn test_event_null_fields() {
        let json = r#"{"body": null, "isBase64Encoded": null, "httpMethod": "POST"}"#;
        let event: InboundEvent = serde_json::from_str(json).unwrap();
        assert!(event.body.is_none());
        assert!(!event.is_encoded());
    }

    #[test]
    fn test_event_from_odd_payload() {
        let event = InboundEvent::from_value(serde_json::json!({ "body": { "topic": "x" } }));
        assert_eq!(event, InboundEvent::default());

        let event = InboundEvent::from_value(serde_json::json!("just a string"));
        assert_eq!(event, InboundEvent::default());
    }

    #[test]
    fn test_response_field_names() {
        let response = ApiResponse {
            status_code: 200,
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body: "{}".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["body"], "{}");
    }
}
