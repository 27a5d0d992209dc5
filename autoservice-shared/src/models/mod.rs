pub mod appointment;
pub mod auth;
pub mod employee;
pub mod errors;
pub mod invoice;
pub mod payment;
pub mod service;
pub mod timestamp;
pub mod user;
pub mod vehicle;
pub mod worklog;

pub use appointment::{
    Appointment, AppointmentStatus, AppointmentStatusUpdate, AssignEmployeeRequest, NewAppointment,
};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use employee::{Employee, NewEmployee};
pub use errors::ErrorResponse;
pub use invoice::{DEFAULT_CURRENCY, Invoice, InvoiceStatus, format_money};
pub use payment::{CheckoutRequest, CheckoutSession, CheckoutStatus};
pub use service::{NewServiceOffering, ServiceOffering};
pub use timestamp::Timestamp;
pub use user::{Role, User};
pub use vehicle::{NewVehicle, Vehicle};
pub use worklog::{NewWorkLogEntry, WorkLogEntry, total_hours};
