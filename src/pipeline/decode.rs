// src/pipeline/decode.rs

//! Request body decoding.
//!
//! A missing body, an undecodable body and a body that is not a JSON object
//! all produce the same empty payload; the topic check downstream reports
//! the error.

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Map, Value};

use crate::models::InboundEvent;

/// Decoded request fields.
pub type Payload = Map<String, Value>;

/// Decode the event body into a JSON object.
pub fn decode_body(event: &InboundEvent) -> Payload {
    let Some(raw) = event.body.as_deref() else {
        return Payload::new();
    };

    let text = if event.is_encoded() {
        match general_purpose::STANDARD.decode(raw.trim()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                log::warn!("Body flagged as base64 but failed to decode: {}", e);
                return Payload::new();
            }
        }
    } else {
        raw.to_string()
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            log::warn!("Body is JSON but not an object ({})", type_name(&other));
            Payload::new()
        }
        Err(e) => {
            log::warn!("Body is not valid JSON: {}", e);
            Payload::new()
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body() {
        assert!(decode_body(&InboundEvent::default()).is_empty());
    }

    #[test]
    fn test_plain_body() {
        let payload = decode_body(&InboundEvent::with_body(r#"{"blogstopic": "Tea"}"#));
        assert_eq!(payload["blogstopic"], "Tea");
    }

    #[test]
    fn test_encoded_body() {
        let encoded = general_purpose::STANDARD.encode(r#"{"topic": "Tea"}"#);
        let payload = decode_body(&InboundEvent::with_encoded_body(encoded));
        assert_eq!(payload["topic"], "Tea");
    }

    #[test]
    fn test_encoded_flag_false_is_plain() {
        let event = InboundEvent {
            body: Some(r#"{"topic": "Tea"}"#.to_string()),
            is_base64_encoded: Some(false),
        };
        assert_eq!(decode_body(&event)["topic"], "Tea");
    }

    #[test]
    fn test_malformed_json_is_empty() {
        assert!(decode_body(&InboundEvent::with_body("{not json")).is_empty());
        assert!(decode_body(&InboundEvent::with_body("")).is_empty());
    }

    #[test]
    fn test_non_object_json_is_empty() {
        assert!(decode_body(&InboundEvent::with_body(r#"["topic"]"#)).is_empty());
        assert!(decode_body(&InboundEvent::with_body(r#""Tea""#)).is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        // `{"topic": "` + 0xFF + `"}`
        let mut bytes = br#"{"topic": ""#.to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(br#""}"#);
        let encoded = general_purpose::STANDARD.encode(&bytes);

        let payload = decode_body(&InboundEvent::with_encoded_body(encoded));
        assert_eq!(payload["topic"], "\u{FFFD}");
    }

    #[test]
    fn test_invalid_utf8_outside_string_yields_empty() {
        let encoded = general_purpose::STANDARD.encode([0xC3u8, 0x28, 0xFF]);
        assert!(decode_body(&InboundEvent::with_encoded_body(encoded)).is_empty());
    }

    #[test]
    fn test_invalid_base64_is_empty() {
        assert!(decode_body(&InboundEvent::with_encoded_body("!!not base64!!")).is_empty());
    }
}
