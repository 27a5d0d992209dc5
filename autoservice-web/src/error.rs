use reqwest::StatusCode;
use shared::models::ErrorResponse;
use thiserror::Error;

/// Failure of a single API call. Pages render [`ApiError::user_message`]
/// inline; nothing here is fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl ApiError {
    /// Build the error for a non-success response from its status and raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|error| error.message)
            .ok()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected error")
                    .to_string()
            });
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Whether the stored session should be dropped.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text shown to the user next to the failed action.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to connect to server".to_string(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            Self::Status { status: 403, .. } => {
                "You do not have permission to do that.".to_string()
            }
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::Timeout(_) => "The request timed out. Please try again.".to_string(),
        }
    }
}

impl ApiError {
    fn from_transport(decode: bool, status: Option<StatusCode>, detail: String) -> Self {
        match status {
            _ if decode => Self::Decode(detail),
            Some(status) => Self::from_response(status, ""),
            None => Self::Network(detail),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_transport(err.is_decode(), err.status(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_maps_to_variant() {
        let error = ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"message":"bad token"}"#);
        assert_eq!(error, ApiError::Unauthorized);
        assert!(error.is_unauthorized());
    }

    #[test]
    fn server_message_is_preferred() {
        let error = ApiError::from_response(
            StatusCode::CONFLICT,
            r#"{"message":"Slot already booked"}"#,
        );
        assert_eq!(
            error,
            ApiError::Status {
                status: 409,
                message: "Slot already booked".to_string()
            }
        );
        assert_eq!(error.user_message(), "Slot already booked");
    }

    #[test]
    fn error_alias_body_is_understood() {
        let error = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"error":"Invalid VIN"}"#);
        assert_eq!(error.user_message(), "Invalid VIN");
    }

    #[test]
    fn unparsable_body_falls_back_to_reason_phrase() {
        let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(error.user_message(), "Internal Server Error");

        let error = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"message":"  "}"#);
        assert_eq!(error.user_message(), "Not Found");
    }

    #[test]
    fn forbidden_gets_permission_text() {
        let error = ApiError::from_response(StatusCode::FORBIDDEN, r#"{"message":"role"}"#);
        assert_eq!(error.user_message(), "You do not have permission to do that.");
    }

    #[test]
    fn request_build_failure_is_a_network_error() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        assert!(err.status().is_none());

        let error = ApiError::from(err);
        assert!(matches!(error, ApiError::Network(_)));
        assert_eq!(error.user_message(), "Unable to connect to server");
    }

    #[test]
    fn transport_failures_are_classified() {
        assert_eq!(
            ApiError::from_transport(true, Some(StatusCode::OK), "bad json".to_string()),
            ApiError::Decode("bad json".to_string())
        );
        assert_eq!(
            ApiError::from_transport(false, Some(StatusCode::UNAUTHORIZED), String::new()),
            ApiError::Unauthorized
        );
        assert_eq!(
            ApiError::from_transport(false, Some(StatusCode::BAD_GATEWAY), String::new()),
            ApiError::Status {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
        assert_eq!(
            ApiError::from_transport(false, None, "connection refused".to_string()),
            ApiError::Network("connection refused".to_string())
        );
    }

    #[test]
    fn timeout_message() {
        let error = ApiError::Timeout(15_000);
        assert_eq!(error.to_string(), "request timed out after 15000 ms");
        assert!(error.user_message().contains("timed out"));
    }
}
