//! Response envelope building.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{AppError, INTERNAL_ERROR_MESSAGE};
use crate::models::{ApiResponse, BlogSummary, ErrorBody};

/// Number of characters of the post shown in the preview.
pub const PREVIEW_CHARS: usize = 200;

/// Message of a successful response.
pub const SUCCESS_MESSAGE: &str = "Blog generated and saved.";

/// Build a JSON response with the given status.
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> ApiResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        log::error!("Failed to serialize response body: {}", e);
        format!(r#"{{"error":"{INTERNAL_ERROR_MESSAGE}"}}"#)
    });

    ApiResponse {
        status_code,
        headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body,
    }
}

/// 200 response carrying the summary.
pub fn ok(summary: &BlogSummary) -> ApiResponse {
    json_response(200, summary)
}

/// Error response with the status mapped from the error.
pub fn error(err: &AppError) -> ApiResponse {
    json_response(
        err.status_code(),
        &ErrorBody {
            error: err.public_message(),
        },
    )
}

/// Summary of a stored post.
pub fn summarize(bucket: &str, key: &str, text: &str) -> BlogSummary {
    BlogSummary {
        message: SUCCESS_MESSAGE.to_string(),
        s3_bucket: bucket.to_string(),
        s3_key: key.to_string(),
        length_chars: text.chars().count(),
        preview: preview(text),
    }
}

/// First `PREVIEW_CHARS` characters, with `...` appended when cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
