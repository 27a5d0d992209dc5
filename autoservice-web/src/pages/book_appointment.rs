use crate::{
    api::ServiceCenterClient,
    components::{
        error_alert::ErrorAlert,
        form_field::{SelectField, TextField, bind},
    },
    containers::page_content::PageContent,
    error::ApiError,
    hooks::{report, use_remote, use_sign_out},
    routes::MainRoute,
    validation::{ValidationError, validate_schedule},
};
use chrono::{DateTime, Local, TimeZone, Utc};
use i18nrs::yew::use_translation;
use shared::models::{NewAppointment, ServiceOffering, Timestamp, Vehicle};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Debug, Default, Clone, PartialEq)]
struct BookingErrors {
    vehicle: Option<ValidationError>,
    service: Option<ValidationError>,
    schedule: Option<ValidationError>,
}

fn pick(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value.trim()).map_err(|_| ValidationError::Required)
}

fn check<Tz: TimeZone>(
    vehicle: &str,
    service: &str,
    date: &str,
    time: &str,
    notes: &str,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<NewAppointment, BookingErrors> {
    match (
        pick(vehicle),
        pick(service),
        validate_schedule(date, time, tz, now),
    ) {
        (Ok(vehicle_id), Ok(service_id), Ok(scheduled_at)) => {
            let notes = notes.trim();
            Ok(NewAppointment {
                vehicle_id,
                service_id,
                scheduled_at: Timestamp(scheduled_at),
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            })
        }
        (vehicle, service, schedule) => Err(BookingErrors {
            vehicle: vehicle.err(),
            service: service.err(),
            schedule: schedule.err(),
        }),
    }
}

#[function_component(BookAppointmentPage)]
pub fn book_appointment_page() -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();
    let sign_out = use_sign_out();
    let choices = use_remote(0, |client| async move {
        let (vehicles, services) =
            futures::try_join!(client.list_vehicles(), client.list_services())?;
        Ok::<_, ApiError>((vehicles, services))
    });

    let vehicle = use_state(String::new);
    let service = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let notes = use_state(String::new);
    let errors = use_state(BookingErrors::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let (vehicle, service, date, time, notes) = (
            vehicle.clone(),
            service.clone(),
            date.clone(),
            time.clone(),
            notes.clone(),
        );
        let errors = errors.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload =
                match check(&vehicle, &service, &date, &time, &notes, &Local, Utc::now()) {
                    Ok(payload) => payload,
                    Err(found) => {
                        errors.set(found);
                        return;
                    }
                };
            errors.set(BookingErrors::default());
            error.set(None);
            saving.set(true);
            let (error, saving) = (error.clone(), saving.clone());
            let navigator = navigator.clone();
            let sign_out = sign_out.clone();
            spawn_local(async move {
                match ServiceCenterClient::shared().create_appointment(&payload).await {
                    Ok(created) => {
                        log::info!("booked appointment {}", created.id);
                        if let Some(nav) = &navigator {
                            nav.push(&MainRoute::Appointments);
                        }
                    }
                    Err(err) => error.set(Some(report(&err, &sign_out))),
                }
                saving.set(false);
            });
        })
    };

    let message = |err: Option<ValidationError>| err.map(|err| i18n.t(err.translation_key()));
    let vehicle_options = |vehicles: &[Vehicle]| -> Vec<(String, String)> {
        vehicles
            .iter()
            .map(|vehicle| (vehicle.id.to_string(), vehicle.label()))
            .collect()
    };
    let service_options = |services: &[ServiceOffering]| -> Vec<(String, String)> {
        services
            .iter()
            .map(|service| {
                let label = format!("{} ({})", service.name, service.price_display());
                (service.id.to_string(), label)
            })
            .collect()
    };

    html! {
        <PageContent title={i18n.t("routes.book_appointment")}>
            <ErrorAlert message={(*error).clone()} />
            { choices.view(|(vehicles, services)| if vehicles.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("appointments.no_vehicles") }</p> }
            } else {
                html! {
                    <form class="grid gap-2 md:grid-cols-2" onsubmit={onsubmit.clone()} novalidate=true>
                        <SelectField id="vehicle" label={i18n.t("fields.vehicle")} value={(*vehicle).clone()}
                            on_change={bind(&vehicle)} options={vehicle_options(vehicles)}
                            placeholder={i18n.t("appointments.choose_vehicle")}
                            error={message(errors.vehicle)} />
                        <SelectField id="service" label={i18n.t("fields.service")} value={(*service).clone()}
                            on_change={bind(&service)} options={service_options(services)}
                            placeholder={i18n.t("appointments.choose_service")}
                            error={message(errors.service)} />
                        <TextField id="date" label={i18n.t("fields.date")} input_type="date"
                            value={(*date).clone()} on_change={bind(&date)}
                            error={message(errors.schedule)} />
                        <TextField id="time" label={i18n.t("fields.time")} input_type="time"
                            value={(*time).clone()} on_change={bind(&time)} />
                        <div class="md:col-span-2">
                            <TextField id="notes" label={i18n.t("fields.notes")} value={(*notes).clone()}
                                on_change={bind(&notes)} required={false} multiline=true />
                        </div>
                        <div class="md:col-span-2">
                            <button class="btn btn-primary" type="submit" disabled={*saving}>
                                { i18n.t("appointments.book") }
                            </button>
                        </div>
                    </form>
                }
            }) }
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const VEHICLE: &str = "5f0c2b8e-6a3f-4b7a-9e43-0d3c1e2a4b5c";
    const SERVICE: &str = "0d3c1e2a-4b5c-4b7a-9e43-5f0c2b8e6a3f";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn builds_booking_in_the_given_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let booking = check(VEHICLE, SERVICE, "2025-06-02", "09:30", "  ", &tz, now()).unwrap();
        assert_eq!(
            booking.scheduled_at,
            Timestamp(Utc.with_ymd_and_hms(2025, 6, 2, 7, 30, 0).unwrap())
        );
        assert_eq!(booking.notes, None);
    }

    #[test]
    fn requires_selection_and_future_time() {
        let errors = check("", SERVICE, "2025-05-01", "09:00", "", &Utc, now()).unwrap_err();
        assert_eq!(errors.vehicle, Some(ValidationError::Required));
        assert_eq!(errors.service, None);
        assert_eq!(errors.schedule, Some(ValidationError::NotInFuture));
    }
}
