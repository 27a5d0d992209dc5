use super::{
    appointments::{newest_first, use_status_change},
    employee_dashboard::StatusActions,
};
use crate::{
    api::ServiceCenterClient,
    components::{error_alert::ErrorAlert, status_badge::AppointmentStatusBadge},
    containers::page_content::PageContent,
    error::ApiError,
    hooks::{report, use_reload, use_remote, use_sign_out},
};
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::{Appointment, Employee};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

fn technician_name(appointment: &Appointment, employees: &[Employee]) -> Option<String> {
    let id = appointment.employee_id?;
    employees
        .iter()
        .find(|employee| employee.id == id)
        .map(|employee| employee.name.clone())
}

#[function_component(AdminAppointmentsPage)]
pub fn admin_appointments_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let error = use_state(|| None::<String>);
    let sign_out = use_sign_out();
    let data = use_remote(reload.0, |client| async move {
        let (appointments, employees) =
            futures::try_join!(client.list_appointments(), client.list_employees())?;
        Ok::<_, ApiError>((appointments, employees))
    });
    let change_status = use_status_change(reload.clone(), error.clone());

    let assign = {
        let (reload, error) = (reload.clone(), error.clone());
        Callback::from(move |(id, employee_id): (Uuid, Uuid)| {
            let (reload, error, sign_out) = (reload.clone(), error.clone(), sign_out.clone());
            spawn_local(async move {
                match ServiceCenterClient::shared()
                    .assign_employee(&id, employee_id)
                    .await
                {
                    Ok(updated) => {
                        log::info!("assigned {employee_id} to appointment {}", updated.id);
                        error.set(None);
                        reload.dispatch(());
                    }
                    Err(err) => error.set(Some(report(&err, &sign_out))),
                }
            });
        })
    };

    html! {
        <PageContent title={i18n.t("admin.appointments_title")}>
            <ErrorAlert message={(*error).clone()} />
            { data.view(|(appointments, employees)| if appointments.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("appointments.empty") }</p> }
            } else {
                html! {
                    <div class="overflow-x-auto">
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.scheduled_at") }</th>
                                    <th>{ i18n.t("fields.vehicle") }</th>
                                    <th>{ i18n.t("fields.service") }</th>
                                    <th>{ i18n.t("fields.technician") }</th>
                                    <th>{ i18n.t("fields.status") }</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for newest_first(appointments).into_iter().map(|appointment| {
                                    let id = appointment.id;
                                    let assigned = appointment.employee_id.map(|e| e.to_string()).unwrap_or_default();
                                    let assign = assign.clone();
                                    let onchange = Callback::from(move |event: Event| {
                                        let picked = event
                                            .target_dyn_into::<HtmlSelectElement>()
                                            .and_then(|select| Uuid::parse_str(&select.value()).ok());
                                        if let Some(employee_id) = picked {
                                            assign.emit((id, employee_id));
                                        }
                                    });
                                    html! {
                                        <tr key={id.to_string()}>
                                            <td>{ appointment.scheduled_at.display_in(&Local) }</td>
                                            <td>{ appointment.vehicle_label() }</td>
                                            <td>{ appointment.service_label() }</td>
                                            <td>
                                                if appointment.status.is_terminal() {
                                                    { technician_name(&appointment, employees).unwrap_or_default() }
                                                } else {
                                                    <select class="select select-bordered select-sm" {onchange}>
                                                        <option value="" selected={assigned.is_empty()}>
                                                            { i18n.t("admin.unassigned_option") }
                                                        </option>
                                                        { for employees.iter().map(|employee| {
                                                            let value = employee.id.to_string();
                                                            let selected = value == assigned;
                                                            html! {
                                                                <option {selected} {value}>
                                                                    { employee.name.clone() }
                                                                </option>
                                                            }
                                                        }) }
                                                    </select>
                                                }
                                            </td>
                                            <td><AppointmentStatusBadge status={appointment.status} /></td>
                                            <td>
                                                <StatusActions {id} status={appointment.status}
                                                    on_change={change_status.clone()} />
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
