use crate::{
    api::ServiceCenterClient,
    components::{error_alert::ErrorAlert, status_badge::AppointmentStatusBadge},
    containers::page_content::PageContent,
    hooks::{Reload, report, use_reload, use_remote, use_sign_out},
    routes::MainRoute,
};
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::{Appointment, AppointmentStatus};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Newest bookings first.
pub(crate) fn newest_first(appointments: &[Appointment]) -> Vec<Appointment> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
    sorted
}

/// Status change issued from a page, reloading the list on success.
#[hook]
pub(crate) fn use_status_change(
    reload: UseReducerHandle<Reload>,
    error: UseStateHandle<Option<String>>,
) -> Callback<(Uuid, AppointmentStatus)> {
    let sign_out = use_sign_out();
    Callback::from(move |(id, status): (Uuid, AppointmentStatus)| {
        let (reload, error, sign_out) = (reload.clone(), error.clone(), sign_out.clone());
        spawn_local(async move {
            match ServiceCenterClient::shared()
                .update_appointment_status(&id, status)
                .await
            {
                Ok(updated) => {
                    log::info!("appointment {} is now {}", updated.id, updated.status);
                    error.set(None);
                    reload.dispatch(());
                }
                Err(err) => error.set(Some(report(&err, &sign_out))),
            }
        });
    })
}

#[function_component(AppointmentsPage)]
pub fn appointments_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let error = use_state(|| None::<String>);
    let appointments = use_remote(reload.0, |client| async move {
        client.list_appointments().await
    });
    let change_status = use_status_change(reload.clone(), error.clone());

    html! {
        <PageContent title={i18n.t("routes.appointments")}>
            <div class="flex justify-end mb-4">
                <Link<MainRoute> to={MainRoute::BookAppointment} classes="btn btn-primary btn-sm">
                    { i18n.t("appointments.book") }
                </Link<MainRoute>>
            </div>
            <ErrorAlert message={(*error).clone()} />
            { appointments.view(|appointments| if appointments.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("appointments.empty") }</p> }
            } else {
                html! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.scheduled_at") }</th>
                                    <th>{ i18n.t("fields.vehicle") }</th>
                                    <th>{ i18n.t("fields.service") }</th>
                                    <th>{ i18n.t("fields.status") }</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for newest_first(appointments).into_iter().map(|appointment| {
                                    let id = appointment.id;
                                    let change_status = change_status.clone();
                                    html! {
                                        <tr key={id.to_string()}>
                                            <td>{ appointment.scheduled_at.display_in(&Local) }</td>
                                            <td>{ appointment.vehicle_label() }</td>
                                            <td>{ appointment.service_label() }</td>
                                            <td><AppointmentStatusBadge status={appointment.status} /></td>
                                            <td>
                                                if appointment.status.is_cancellable() {
                                                    <button class="btn btn-ghost btn-sm text-error"
                                                        onclick={Callback::from(move |_| {
                                                            change_status.emit((id, AppointmentStatus::Cancelled));
                                                        })}>
                                                        { i18n.t("appointments.cancel") }
                                                    </button>
                                                }
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            }) }
        </PageContent>
    }
}
