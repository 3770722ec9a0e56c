//! Outward payload envelope consumed by the dashboard layer

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of one endpoint poll.
///
/// Failures are folded in rather than propagated, so the dashboard always
/// receives a well-formed envelope and keeps its polling schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointResult {
    pub success: bool,
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// ISO-8601 instant the poll completed.
    pub timestamp: String,
}

impl EndpointResult {
    /// Successful poll carrying the decoded device payload.
    pub fn ok(data: Value) -> Self {
        EndpointResult {
            success: true,
            data: Some(data),
            error: None,
            timestamp: now(),
        }
    }

    /// Failed poll carrying the error text.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        EndpointResult {
            success: false,
            data: None,
            error: Some(error.to_string()),
            timestamp: now(),
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let result = EndpointResult::ok(json!({"SUMMARY": []}));
        assert!(result.success);
        assert_eq!(result.data, Some(json!({"SUMMARY": []})));
        assert_eq!(result.error, None);
        chrono::DateTime::parse_from_rfc3339(&result.timestamp).unwrap();
    }

    #[test]
    fn test_failure_envelope_shape() {
        let result = EndpointResult::failure("HTTP error! status: 500");
        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.error.as_deref(), Some("HTTP error! status: 500"));
        chrono::DateTime::parse_from_rfc3339(&result.timestamp).unwrap();
    }

    #[test]
    fn test_error_key_is_absent_on_success() {
        let serialized = serde_json::to_value(EndpointResult::ok(json!(1))).unwrap();
        assert!(serialized.get("error").is_none());
        assert_eq!(serialized["success"], json!(true));
    }
}
