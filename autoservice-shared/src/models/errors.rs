use serde::{Deserialize, Serialize};

/// Error envelope returned by the service-center API on non-2xx responses.
///
/// Some endpoints answer with `{"error": "..."}` instead of `{"message": "..."}`;
/// both shapes deserialize into the same struct.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(alias = "error")]
    pub message: String,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Checks if this error response has details.
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_with_details() {
        let error = ErrorResponse::with_details("Vehicle not found", "id=42");
        assert_eq!(error.message, "Vehicle not found");
        assert!(error.has_details());
        assert_eq!(error.to_string(), "Vehicle not found: id=42");
    }

    #[test]
    fn test_error_response_without_details_display() {
        let error = ErrorResponse::new("Forbidden");
        assert!(!error.has_details());
        assert_eq!(error.to_string(), "Forbidden");
    }

    #[test]
    fn test_error_response_deserializes_message_shape() {
        let json = r#"{"message":"Slot already booked","details":"14:00"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error, ErrorResponse::with_details("Slot already booked", "14:00"));
    }

    #[test]
    fn test_error_response_deserializes_error_alias_without_details() {
        let json = r#"{"error":"Invalid credentials"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Invalid credentials");
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_error_response_rejects_unrelated_body() {
        let json = r#"{"status":500}"#;
        assert!(serde_json::from_str::<ErrorResponse>(json).is_err());
    }
}
