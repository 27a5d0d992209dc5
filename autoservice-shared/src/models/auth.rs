use serde::{Deserialize, Serialize};

use super::User;

/// Payload for `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST auth/register`. Self-registration always creates a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token; the API also accepts the `access_token` spelling.
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}
