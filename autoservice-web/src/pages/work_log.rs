use crate::{
    api::ServiceCenterClient,
    components::{
        error_alert::ErrorAlert,
        form_field::{SelectField, TextField, bind},
    },
    containers::page_content::PageContent,
    error::ApiError,
    hooks::{report, use_reload, use_remote, use_sign_out},
    validation::{ValidationError, validate_date, validate_hours, validate_required},
};
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::{NewWorkLogEntry, WorkLogEntry, total_hours};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct EntryErrors {
    date: Option<ValidationError>,
    hours: Option<ValidationError>,
    description: Option<ValidationError>,
}

fn check(
    appointment: &str,
    date: &str,
    hours: &str,
    description: &str,
) -> Result<NewWorkLogEntry, EntryErrors> {
    match (
        validate_date(date),
        validate_hours(hours),
        validate_required(description),
    ) {
        (Ok(work_date), Ok(hours), Ok(description)) => Ok(NewWorkLogEntry {
            appointment_id: Uuid::parse_str(appointment.trim()).ok(),
            work_date,
            hours,
            description,
        }),
        (date, hours, description) => Err(EntryErrors {
            date: date.err(),
            hours: hours.err(),
            description: description.err(),
        }),
    }
}

fn latest_first(entries: &[WorkLogEntry]) -> Vec<WorkLogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.work_date.cmp(&a.work_date));
    sorted
}

#[function_component(WorkLogPage)]
pub fn work_log_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let sign_out = use_sign_out();
    let data = use_remote(reload.0, |client| async move {
        let (entries, appointments) =
            futures::try_join!(client.list_work_logs(), client.list_appointments())?;
        Ok::<_, ApiError>((entries, appointments))
    });

    let appointment = use_state(String::new);
    let date = use_state(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let hours = use_state(String::new);
    let description = use_state(String::new);
    let errors = use_state(EntryErrors::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let (appointment, date, hours, description) = (
            appointment.clone(),
            date.clone(),
            hours.clone(),
            description.clone(),
        );
        let (errors, error, saving, reload) =
            (errors.clone(), error.clone(), saving.clone(), reload.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match check(&appointment, &date, &hours, &description) {
                Ok(payload) => payload,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(EntryErrors::default());
            error.set(None);
            saving.set(true);
            let (hours, description) = (hours.clone(), description.clone());
            let (error, saving, reload) = (error.clone(), saving.clone(), reload.clone());
            let sign_out = sign_out.clone();
            spawn_local(async move {
                match ServiceCenterClient::shared().create_work_log(&payload).await {
                    Ok(entry) => {
                        log::info!("logged {}h on {}", entry.hours, entry.work_date);
                        hours.set(String::new());
                        description.set(String::new());
                        reload.dispatch(());
                    }
                    Err(err) => error.set(Some(report(&err, &sign_out))),
                }
                saving.set(false);
            });
        })
    };

    let message = |err: Option<ValidationError>| err.map(|err| i18n.t(err.translation_key()));

    html! {
        <PageContent title={i18n.t("routes.work_log")}>
            <ErrorAlert message={(*error).clone()} />
            { data.view(|(entries, appointments)| {
                let options: Vec<(String, String)> = appointments
                    .iter()
                    .filter(|appointment| !appointment.status.is_terminal())
                    .map(|appointment| {
                        let label = format!(
                            "{} - {}",
                            appointment.scheduled_at.display_in(&Local),
                            appointment.service_label()
                        );
                        (appointment.id.to_string(), label)
                    })
                    .collect();
                html! {
                    <>
                        <form class="grid gap-2 md:grid-cols-2" onsubmit={onsubmit.clone()} novalidate=true>
                            <SelectField id="appointment" label={i18n.t("fields.appointment")}
                                value={(*appointment).clone()} on_change={bind(&appointment)} {options}
                                placeholder={i18n.t("work_log.no_appointment")} />
                            <TextField id="work-date" label={i18n.t("fields.date")} input_type="date"
                                value={(*date).clone()} on_change={bind(&date)} error={message(errors.date)} />
                            <TextField id="hours" label={i18n.t("fields.hours")} input_type="number"
                                value={(*hours).clone()} on_change={bind(&hours)} error={message(errors.hours)} />
                            <TextField id="description" label={i18n.t("fields.description")}
                                value={(*description).clone()} on_change={bind(&description)}
                                multiline=true error={message(errors.description)} />
                            <div class="md:col-span-2">
                                <button class="btn btn-primary" type="submit" disabled={*saving}>
                                    { i18n.t("work_log.submit") }
                                </button>
                            </div>
                        </form>

                        <div class="divider"></div>
                        <p class="mb-2">
                            { i18n.t("work_log.total") }{": "}
                            <span class="font-semibold">{ format!("{:.2}", total_hours(entries)) }</span>
                        </p>
                        if entries.is_empty() {
                            <p class="opacity-70">{ i18n.t("work_log.empty") }</p>
                        } else {
                            <div class="overflow-x-auto">
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>{ i18n.t("fields.date") }</th>
                                            <th>{ i18n.t("fields.hours") }</th>
                                            <th>{ i18n.t("fields.description") }</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for latest_first(entries).into_iter().map(|entry| html! {
                                            <tr key={entry.id.to_string()}>
                                                <td>{ entry.work_date.format("%Y-%m-%d").to_string() }</td>
                                                <td>{ format!("{:.2}", entry.hours) }</td>
                                                <td>{ entry.description }</td>
                                            </tr>
                                        }) }
                                    </tbody>
                                </table>
                            </div>
                        }
                    </>
                }
            }) }
        </PageContent>
    }
}
