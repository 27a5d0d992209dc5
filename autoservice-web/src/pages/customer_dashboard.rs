use crate::{
    containers::page_content::PageContent, error::ApiError, hooks::use_remote, routes::MainRoute,
};
use chrono::Utc;
use i18nrs::yew::use_translation;
use shared::models::{Appointment, Invoice, Timestamp, Vehicle};
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

/// Counts shown on the customer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerSummary {
    pub vehicles: usize,
    pub upcoming_appointments: usize,
    pub open_invoices: usize,
}

impl CustomerSummary {
    pub fn from_lists(
        vehicles: &[Vehicle],
        appointments: &[Appointment],
        invoices: &[Invoice],
        now: Timestamp,
    ) -> Self {
        Self {
            vehicles: vehicles.len(),
            upcoming_appointments: appointments
                .iter()
                .filter(|appointment| {
                    appointment.scheduled_at > now && !appointment.status.is_terminal()
                })
                .count(),
            open_invoices: invoices
                .iter()
                .filter(|invoice| invoice.status.is_payable())
                .count(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub title: String,
    pub value: usize,
    pub route: MainRoute,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <Link<MainRoute> to={props.route.clone()} classes="stat bg-base-200 rounded-box hover:bg-base-300">
            <div class="stat-figure text-primary">
                <Icon icon_id={props.route.icon()} class="w-8 h-8" />
            </div>
            <div class="stat-title">{ props.title.clone() }</div>
            <div class="stat-value">{ props.value }</div>
        </Link<MainRoute>>
    }
}

#[function_component(CustomerDashboardPage)]
pub fn customer_dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let summary = use_remote(0, |client| async move {
        let (vehicles, appointments, invoices) = futures::try_join!(
            client.list_vehicles(),
            client.list_appointments(),
            client.list_invoices()
        )?;
        Ok::<_, ApiError>(CustomerSummary::from_lists(
            &vehicles,
            &appointments,
            &invoices,
            Timestamp(Utc::now()),
        ))
    });

    html! {
        <PageContent title={i18n.t("customer.dashboard_title")}>
            { summary.view(|summary| html! {
                <div class="stats stats-vertical lg:stats-horizontal w-full">
                    <StatCard title={i18n.t("customer.vehicles")} value={summary.vehicles}
                        route={MainRoute::Vehicles} />
                    <StatCard title={i18n.t("customer.upcoming_appointments")}
                        value={summary.upcoming_appointments} route={MainRoute::Appointments} />
                    <StatCard title={i18n.t("customer.open_invoices")} value={summary.open_invoices}
                        route={MainRoute::Invoices} />
                </div>
            }) }
            <div class="mt-6">
                <Link<MainRoute> to={MainRoute::BookAppointment} classes="btn btn-primary">
                    { i18n.t("appointments.book") }
                </Link<MainRoute>>
            </div>
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shared::models::{AppointmentStatus, InvoiceStatus};
    use uuid::Uuid;

    fn appointment(at: Timestamp, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            customer_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            service_id: Uuid::nil(),
            employee_id: None,
            scheduled_at: at,
            status,
            notes: None,
            vehicle: None,
            service: None,
        }
    }

    fn invoice(status: InvoiceStatus) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            appointment_id: None,
            customer_id: Uuid::nil(),
            amount_cents: 1000,
            currency: "USD".to_string(),
            status,
            issued_at: Timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn summary_counts_only_upcoming_and_payable() {
        let now = Timestamp(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
        let later = Timestamp(now.0 + Duration::days(2));
        let earlier = Timestamp(now.0 - Duration::days(2));
        let appointments = [
            appointment(later, AppointmentStatus::Confirmed),
            appointment(later, AppointmentStatus::Cancelled),
            appointment(earlier, AppointmentStatus::Pending),
        ];
        let invoices = [
            invoice(InvoiceStatus::Open),
            invoice(InvoiceStatus::Paid),
            invoice(InvoiceStatus::Draft),
        ];

        let summary = CustomerSummary::from_lists(&[], &appointments, &invoices, now);
        assert_eq!(
            summary,
            CustomerSummary {
                vehicles: 0,
                upcoming_appointments: 1,
                open_invoices: 1,
            }
        );
    }
}
