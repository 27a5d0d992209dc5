use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;
use uuid::Uuid;

use super::{ServiceOffering, Timestamp, Vehicle};

/// Lifecycle of a booked appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Statuses this one may move to. Completed and cancelled are terminal.
    #[must_use]
    pub fn allowed_next(self) -> &'static [AppointmentStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    /// Customers may cancel until work has started.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked slot for a vehicle and a service.
///
/// List endpoints may embed the vehicle and service so pages can render
/// labels without extra requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    pub scheduled_at: Timestamp,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub service: Option<ServiceOffering>,
}

impl Appointment {
    #[must_use]
    pub fn vehicle_label(&self) -> String {
        self.vehicle
            .as_ref()
            .map_or_else(|| self.vehicle_id.to_string(), Vehicle::label)
    }

    #[must_use]
    pub fn service_label(&self) -> String {
        self.service
            .as_ref()
            .map_or_else(|| self.service_id.to_string(), |service| service.name.clone())
    }
}

/// Payload for `POST appointments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAppointment {
    pub vehicle_id: Uuid,
    pub service_id: Uuid,
    pub scheduled_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `PATCH appointments/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentStatusUpdate {
    pub status: AppointmentStatus,
}

/// Payload for `PATCH appointments/{id}/assign`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignEmployeeRequest {
    pub employee_id: Uuid,
}
