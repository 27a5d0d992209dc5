use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Void,
}

impl InvoiceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Void => "void",
        }
    }

    /// Only issued, unpaid invoices can be sent to checkout.
    #[must_use]
    pub fn is_payable(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An invoice for work done, payable through hosted checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub id: Uuid,
    #[serde(default)]
    pub appointment_id: Option<Uuid>,
    pub customer_id: Uuid,
    pub amount_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: InvoiceStatus,
    pub issued_at: Timestamp,
}

impl Invoice {
    #[must_use]
    pub fn amount_display(&self) -> String {
        format_money(self.amount_cents, &self.currency)
    }
}

/// Currency assumed when the API does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Render an amount in minor units, e.g. `format_money(1250, "usd") == "USD 12.50"`.
#[must_use]
pub fn format_money(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{} {sign}{}.{:02}",
        currency.to_ascii_uppercase(),
        abs / 100,
        abs % 100
    )
}
