//! Topic extraction.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::pipeline::decode::Payload;

/// Accepted topic fields, highest priority first.
pub const TOPIC_FIELDS: &[&str] = &["blogstopic", "topic"];

/// Error message for a request without a usable topic.
pub const MISSING_TOPIC_MESSAGE: &str = "Missing required field 'blogstopic' in request body.";

/// First non-blank topic field, trimmed.
///
/// Non-string values count as missing.
pub fn extract_topic(payload: &Payload) -> Result<String> {
    TOPIC_FIELDS
        .iter()
        .filter_map(|field| payload.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|topic| !topic.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::invalid_request(MISSING_TOPIC_MESSAGE))
}
