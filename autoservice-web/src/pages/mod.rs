mod admin_appointments;
mod admin_dashboard;
mod admin_employees;
mod admin_services;
mod appointments;
mod book_appointment;
mod checkout;
mod customer_dashboard;
mod employee_dashboard;
mod error;
mod invoices;
pub mod login;
mod register;
mod vehicles;
mod work_log;

pub use admin_appointments::AdminAppointmentsPage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_employees::AdminEmployeesPage;
pub use admin_services::AdminServicesPage;
pub use appointments::AppointmentsPage;
pub use book_appointment::BookAppointmentPage;
pub use checkout::{CheckoutPage, CheckoutResultPage};
pub use customer_dashboard::CustomerDashboardPage;
pub use employee_dashboard::EmployeeDashboardPage;
pub use error::ErrorPage;
pub use invoices::InvoicesPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use vehicles::VehiclesPage;
pub use work_log::WorkLogPage;
