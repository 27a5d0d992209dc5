use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for `POST payments/checkout-session`.
///
/// The provider substitutes `{CHECKOUT_SESSION_ID}` in `success_url` with the
/// session id when it redirects back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub invoice_id: Uuid,
    pub success_url: String,
    pub cancel_url: String,
}

/// Hosted checkout session created by the API on the provider's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSession {
    #[serde(alias = "session_id")]
    pub id: String,
    pub url: String,
}

/// Result of looking a checkout session up after the provider redirects back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutStatus {
    pub session_id: String,
    #[serde(default)]
    pub invoice_id: Option<Uuid>,
    pub paid: bool,
}
