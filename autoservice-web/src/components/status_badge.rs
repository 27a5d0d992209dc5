use i18nrs::yew::use_translation;
use shared::models::{AppointmentStatus, InvoiceStatus};
use yew::{Html, Properties, classes, function_component, html};

pub fn appointment_badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "badge-warning",
        AppointmentStatus::Confirmed => "badge-info",
        AppointmentStatus::InProgress => "badge-primary",
        AppointmentStatus::Completed => "badge-success",
        AppointmentStatus::Cancelled => "badge-ghost",
    }
}

pub fn invoice_badge_class(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "badge-ghost",
        InvoiceStatus::Open => "badge-warning",
        InvoiceStatus::Paid => "badge-success",
        InvoiceStatus::Void => "badge-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentStatusBadgeProps {
    pub status: AppointmentStatus,
}

#[function_component(AppointmentStatusBadge)]
pub fn appointment_status_badge(props: &AppointmentStatusBadgeProps) -> Html {
    let (i18n, _) = use_translation();
    html! {
        <span class={classes!("badge", appointment_badge_class(props.status))}>
            { i18n.t(&format!("status.appointment.{}", props.status.as_str())) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct InvoiceStatusBadgeProps {
    pub status: InvoiceStatus,
}

#[function_component(InvoiceStatusBadge)]
pub fn invoice_status_badge(props: &InvoiceStatusBadgeProps) -> Html {
    let (i18n, _) = use_translation();
    html! {
        <span class={classes!("badge", invoice_badge_class(props.status))}>
            { i18n.t(&format!("status.invoice.{}", props.status.as_str())) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_appointment_status_has_a_daisy_badge() {
        for status in AppointmentStatus::iter() {
            assert!(appointment_badge_class(status).starts_with("badge-"));
        }
    }

    #[test]
    fn paid_invoices_look_successful() {
        assert_eq!(invoice_badge_class(InvoiceStatus::Paid), "badge-success");
        assert_eq!(invoice_badge_class(InvoiceStatus::Open), "badge-warning");
    }
}
