use super::customer_dashboard::StatCard;
use crate::{
    containers::page_content::PageContent, error::ApiError, hooks::use_remote, routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::{Appointment, AppointmentStatus, Employee, ServiceOffering};
use yew::prelude::*;

/// Counts shown on the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminOverview {
    pub pending: usize,
    pub unassigned: usize,
    pub services: usize,
    pub employees: usize,
}

impl AdminOverview {
    pub fn from_lists(
        appointments: &[Appointment],
        services: &[ServiceOffering],
        employees: &[Employee],
    ) -> Self {
        Self {
            pending: appointments
                .iter()
                .filter(|appointment| appointment.status == AppointmentStatus::Pending)
                .count(),
            unassigned: appointments
                .iter()
                .filter(|appointment| {
                    appointment.employee_id.is_none() && !appointment.status.is_terminal()
                })
                .count(),
            services: services.len(),
            employees: employees.len(),
        }
    }
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let overview = use_remote(0, |client| async move {
        let (appointments, services, employees) = futures::try_join!(
            client.list_appointments(),
            client.list_services(),
            client.list_employees()
        )?;
        Ok::<_, ApiError>(AdminOverview::from_lists(
            &appointments,
            &services,
            &employees,
        ))
    });

    html! {
        <PageContent title={i18n.t("admin.overview_title")}>
            { overview.view(|overview| html! {
                <div class="stats stats-vertical lg:stats-horizontal w-full">
                    <StatCard title={i18n.t("admin.pending")} value={overview.pending}
                        route={MainRoute::AdminAppointments} />
                    <StatCard title={i18n.t("admin.unassigned")} value={overview.unassigned}
                        route={MainRoute::AdminAppointments} />
                    <StatCard title={i18n.t("routes.services")} value={overview.services}
                        route={MainRoute::AdminServices} />
                    <StatCard title={i18n.t("routes.employees")} value={overview.employees}
                        route={MainRoute::AdminEmployees} />
                </div>
            }) }
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::Timestamp;
    use uuid::Uuid;

    fn appointment(status: AppointmentStatus, employee_id: Option<Uuid>) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            customer_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            service_id: Uuid::nil(),
            employee_id,
            scheduled_at: Timestamp(Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap()),
            status,
            notes: None,
            vehicle: None,
            service: None,
        }
    }

    #[test]
    fn unassigned_excludes_closed_appointments() {
        let appointments = [
            appointment(AppointmentStatus::Pending, None),
            appointment(AppointmentStatus::Pending, Some(Uuid::new_v4())),
            appointment(AppointmentStatus::Confirmed, None),
            appointment(AppointmentStatus::Cancelled, None),
        ];
        let overview = AdminOverview::from_lists(&appointments, &[], &[]);
        assert_eq!(overview.pending, 2);
        assert_eq!(overview.unassigned, 2);
        assert_eq!(overview.services, 0);
    }
}
