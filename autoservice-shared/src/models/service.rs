use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invoice::{DEFAULT_CURRENCY, format_money};

/// An entry of the service catalogue (oil change, brake inspection, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub duration_minutes: u32,
}

impl ServiceOffering {
    /// Catalogue prices are quoted in the default currency.
    #[must_use]
    pub fn price_display(&self) -> String {
        format_money(self.price_cents, DEFAULT_CURRENCY)
    }
}

/// Payload for `POST services`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewServiceOffering {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional_and_price_formats() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "name": "Oil change",
            "price_cents": 4999,
            "duration_minutes": 45
        });
        let service: ServiceOffering = serde_json::from_value(json).unwrap();
        assert_eq!(service.description, "");
        assert_eq!(service.price_display(), "USD 49.99");
    }
}
