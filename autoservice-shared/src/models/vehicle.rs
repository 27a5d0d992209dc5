use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's registered vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    #[serde(default)]
    pub vin: Option<String>,
}

impl Vehicle {
    /// `"2019 Toyota Corolla (ABC-123)"`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} {} {} ({})",
            self.year, self.make, self.model, self.license_plate
        )
    }
}

/// Payload for `POST vehicles`. The owner is taken from the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_label() {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2019,
            license_plate: "ABC-123".to_string(),
            vin: None,
        };
        assert_eq!(vehicle.label(), "2019 Toyota Corolla (ABC-123)");
    }

    #[test]
    fn new_vehicle_omits_missing_vin() {
        let payload = NewVehicle {
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            year: 2015,
            license_plate: "XY 99".to_string(),
            vin: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("vin").is_none());
        assert_eq!(json["year"], 2015);
    }
}
