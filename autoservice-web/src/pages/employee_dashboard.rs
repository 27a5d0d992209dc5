use super::appointments::{newest_first, use_status_change};
use crate::{
    components::{error_alert::ErrorAlert, status_badge::AppointmentStatusBadge},
    containers::page_content::PageContent,
    hooks::{use_reload, use_remote},
};
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::{Appointment, AppointmentStatus};
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusActionsProps {
    pub id: Uuid,
    pub status: AppointmentStatus,
    pub on_change: Callback<(Uuid, AppointmentStatus)>,
}

/// One button per status the appointment may move to next.
#[function_component(StatusActions)]
pub(crate) fn status_actions(props: &StatusActionsProps) -> Html {
    let (i18n, _) = use_translation();
    html! {
        <div class="flex flex-wrap gap-1">
            { for props.status.allowed_next().iter().map(|next| {
                let (id, next) = (props.id, *next);
                let on_change = props.on_change.clone();
                let class = if next == AppointmentStatus::Cancelled {
                    "btn btn-ghost btn-xs text-error"
                } else {
                    "btn btn-outline btn-xs"
                };
                html! {
                    <button {class} onclick={Callback::from(move |_| on_change.emit((id, next)))}>
                        { i18n.t(&format!("appointments.actions.{}", next.as_str())) }
                    </button>
                }
            }) }
        </div>
    }
}

/// Work still in front of the technician: everything not yet finished.
pub(crate) fn active_only(appointments: &[Appointment]) -> Vec<Appointment> {
    newest_first(appointments)
        .into_iter()
        .filter(|appointment| !appointment.status.is_terminal())
        .collect()
}

#[function_component(EmployeeDashboardPage)]
pub fn employee_dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let error = use_state(|| None::<String>);
    let appointments = use_remote(reload.0, |client| async move {
        client.list_appointments().await
    });
    let change_status = use_status_change(reload.clone(), error.clone());

    html! {
        <PageContent title={i18n.t("employee.assigned_title")}>
            <ErrorAlert message={(*error).clone()} />
            { appointments.view(|appointments| {
                let active = active_only(appointments);
                if active.is_empty() {
                    return html! { <p class="opacity-70">{ i18n.t("employee.nothing_assigned") }</p> };
                }
                html! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.scheduled_at") }</th>
                                    <th>{ i18n.t("fields.vehicle") }</th>
                                    <th>{ i18n.t("fields.service") }</th>
                                    <th>{ i18n.t("fields.notes") }</th>
                                    <th>{ i18n.t("fields.status") }</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for active.into_iter().map(|appointment| html! {
                                    <tr key={appointment.id.to_string()}>
                                        <td>{ appointment.scheduled_at.display_in(&Local) }</td>
                                        <td>{ appointment.vehicle_label() }</td>
                                        <td>{ appointment.service_label() }</td>
                                        <td>{ appointment.notes.clone().unwrap_or_default() }</td>
                                        <td><AppointmentStatusBadge status={appointment.status} /></td>
                                        <td>
                                            <StatusActions id={appointment.id} status={appointment.status}
                                                on_change={change_status.clone()} />
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            }) }
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::Timestamp;

    #[test]
    fn finished_work_is_hidden() {
        let with_status = |status| Appointment {
            id: Uuid::new_v4(),
            customer_id: Uuid::nil(),
            vehicle_id: Uuid::nil(),
            service_id: Uuid::nil(),
            employee_id: Some(Uuid::nil()),
            scheduled_at: Timestamp(Utc.with_ymd_and_hms(2025, 4, 4, 8, 0, 0).unwrap()),
            status,
            notes: None,
            vehicle: None,
            service: None,
        };
        let active = active_only(&[
            with_status(AppointmentStatus::Completed),
            with_status(AppointmentStatus::InProgress),
            with_status(AppointmentStatus::Cancelled),
            with_status(AppointmentStatus::Confirmed),
        ]);
        let statuses: Vec<_> = active.iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![AppointmentStatus::InProgress, AppointmentStatus::Confirmed]
        );
    }
}
