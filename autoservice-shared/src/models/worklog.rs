use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time an employee spent on a job, optionally tied to an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkLogEntry {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(default)]
    pub appointment_id: Option<Uuid>,
    pub work_date: NaiveDate,
    pub hours: f32,
    pub description: String,
}

/// Payload for `POST worklogs`. The employee is taken from the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWorkLogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<Uuid>,
    pub work_date: NaiveDate,
    pub hours: f32,
    pub description: String,
}

/// Sum of hours across entries.
#[must_use]
pub fn total_hours(entries: &[WorkLogEntry]) -> f32 {
    entries.iter().map(|entry| entry.hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hours: f32) -> WorkLogEntry {
        WorkLogEntry {
            id: Uuid::new_v4(),
            employee_id: Uuid::nil(),
            appointment_id: None,
            work_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            hours,
            description: "Brake pads".to_string(),
        }
    }

    #[test]
    fn total_hours_sums_entries() {
        assert!((total_hours(&[entry(1.5), entry(2.25)]) - 3.75).abs() < f32::EPSILON);
        assert!(total_hours(&[]).abs() < f32::EPSILON);
    }

    #[test]
    fn work_date_serializes_as_plain_date() {
        let payload = NewWorkLogEntry {
            appointment_id: None,
            work_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            hours: 2.0,
            description: "Diagnostics".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["work_date"], "2025-05-02");
        assert!(json.get("appointment_id").is_none());
    }
}
