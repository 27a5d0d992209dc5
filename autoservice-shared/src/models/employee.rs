use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A technician or other staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub hourly_rate_cents: Option<i64>,
}

/// Payload for `POST employees`. The API creates the login account too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate_cents: Option<i64>,
}
