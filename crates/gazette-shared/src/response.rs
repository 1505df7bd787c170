//! Standardized API response envelopes.
//!
//! Every endpoint answers with one of two shapes: a success envelope
//! carrying `data` (plus optional pagination, facets and message blocks)
//! or an error envelope with `success: false`, an error class and a
//! human-readable message.

use serde::{Deserialize, Serialize};

use gazette_core::page::Pagination;
use gazette_core::query::Facets;

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Facets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            pagination: None,
            filters: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_filters(mut self, filters: Facets) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Standard error response wrapper. `error` names the failure class
/// ("Not Found", "Validation Error", ...); `message` explains this
/// occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("Bad Request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not Found", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("Validation Error", message)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error", "an unexpected error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_empty_blocks() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("pagination").is_none());
        assert!(json.get("filters").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn error_envelope_carries_class_and_message() {
        let json = serde_json::to_value(ErrorResponse::validation("email looks wrong")).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["error"], serde_json::json!("Validation Error"));
        assert_eq!(json["message"], serde_json::json!("email looks wrong"));
    }
}
