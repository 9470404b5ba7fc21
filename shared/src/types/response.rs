//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON error body returned by the API layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Creates an error response with a code and message
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches structured details to the response
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_details() {
        let response = ErrorResponse::new("not_found".to_string(), "missing".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "not_found");
        assert_eq!(json["message"], "missing");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn details_survive_serialization() {
        let mut details = HashMap::new();
        details.insert("field".to_string(), serde_json::json!("token"));

        let response =
            ErrorResponse::new("invalid".to_string(), "bad input".to_string()).with_details(details);
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.details.unwrap()["field"], serde_json::json!("token"));
    }
}
