use crate::{
    api::ServiceCenterClient,
    components::{
        error_alert::ErrorAlert,
        form_field::{TextField, bind},
    },
    containers::page_content::PageContent,
    hooks::{report, use_reload, use_remote, use_sign_out},
    validation::{
        ValidationError, validate_plate, validate_required, validate_vin, validate_year_now,
    },
};
use i18nrs::yew::use_translation;
use shared::models::NewVehicle;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct VehicleErrors {
    make: Option<ValidationError>,
    model: Option<ValidationError>,
    year: Option<ValidationError>,
    plate: Option<ValidationError>,
    vin: Option<ValidationError>,
}

fn check(
    make: &str,
    model: &str,
    year: Result<i32, ValidationError>,
    plate: &str,
    vin: &str,
) -> Result<NewVehicle, VehicleErrors> {
    match (
        validate_required(make),
        validate_required(model),
        year,
        validate_plate(plate),
        validate_vin(vin),
    ) {
        (Ok(make), Ok(model), Ok(year), Ok(license_plate), Ok(vin)) => Ok(NewVehicle {
            make,
            model,
            year,
            license_plate,
            vin,
        }),
        (make, model, year, plate, vin) => Err(VehicleErrors {
            make: make.err(),
            model: model.err(),
            year: year.err(),
            plate: plate.err(),
            vin: vin.err(),
        }),
    }
}

#[function_component(VehiclesPage)]
pub fn vehicles_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let vehicles = use_remote(reload.0, |client| async move { client.list_vehicles().await });
    let sign_out = use_sign_out();

    let make = use_state(String::new);
    let model = use_state(String::new);
    let year = use_state(String::new);
    let plate = use_state(String::new);
    let vin = use_state(String::new);
    let errors = use_state(VehicleErrors::default);
    let action_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let (make, model, year, plate, vin) =
            (make.clone(), model.clone(), year.clone(), plate.clone(), vin.clone());
        let errors = errors.clone();
        let action_error = action_error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        let sign_out = sign_out.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match check(&make, &model, validate_year_now(&year), &plate, &vin) {
                Ok(payload) => payload,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(VehicleErrors::default());
            action_error.set(None);
            saving.set(true);
            let fields = [make.clone(), model.clone(), year.clone(), plate.clone(), vin.clone()];
            let (action_error, saving, reload, sign_out) =
                (action_error.clone(), saving.clone(), reload.clone(), sign_out.clone());
            spawn_local(async move {
                match ServiceCenterClient::shared().create_vehicle(&payload).await {
                    Ok(vehicle) => {
                        log::info!("registered vehicle {}", vehicle.id);
                        for field in &fields {
                            field.set(String::new());
                        }
                        reload.dispatch(());
                    }
                    Err(err) => action_error.set(Some(report(&err, &sign_out))),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let action_error = action_error.clone();
        let reload = reload.clone();
        let sign_out = sign_out.clone();
        Callback::from(move |id: uuid::Uuid| {
            let (action_error, reload, sign_out) =
                (action_error.clone(), reload.clone(), sign_out.clone());
            spawn_local(async move {
                match ServiceCenterClient::shared().delete_vehicle(&id).await {
                    Ok(()) => reload.dispatch(()),
                    Err(err) => action_error.set(Some(report(&err, &sign_out))),
                }
            });
        })
    };

    let message = |err: Option<ValidationError>| err.map(|err| i18n.t(err.translation_key()));

    html! {
        <PageContent title={i18n.t("routes.vehicles")}>
            <ErrorAlert message={(*action_error).clone()} />
            { vehicles.view(|vehicles| if vehicles.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("vehicles.empty") }</p> }
            } else {
                html! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.make") }</th>
                                    <th>{ i18n.t("fields.model") }</th>
                                    <th>{ i18n.t("fields.year") }</th>
                                    <th>{ i18n.t("fields.license_plate") }</th>
                                    <th>{ i18n.t("fields.vin") }</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for vehicles.iter().map(|vehicle| {
                                    let id = vehicle.id;
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <tr key={id.to_string()}>
                                            <td>{ vehicle.make.clone() }</td>
                                            <td>{ vehicle.model.clone() }</td>
                                            <td>{ vehicle.year }</td>
                                            <td>{ vehicle.license_plate.clone() }</td>
                                            <td>{ vehicle.vin.clone().unwrap_or_default() }</td>
                                            <td>
                                                <button class="btn btn-ghost btn-sm text-error"
                                                    onclick={Callback::from(move |_| on_delete.emit(id))}>
                                                    { i18n.t("common.delete") }
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            }) }

            <form class="mt-8 grid gap-2 md:grid-cols-2" {onsubmit} novalidate=true>
                <h2 class="text-xl font-semibold md:col-span-2">{ i18n.t("vehicles.add") }</h2>
                <TextField id="make" label={i18n.t("fields.make")} value={(*make).clone()}
                    on_change={bind(&make)} error={message(errors.make)} />
                <TextField id="model" label={i18n.t("fields.model")} value={(*model).clone()}
                    on_change={bind(&model)} error={message(errors.model)} />
                <TextField id="year" label={i18n.t("fields.year")} input_type="number"
                    value={(*year).clone()} on_change={bind(&year)} error={message(errors.year)} />
                <TextField id="plate" label={i18n.t("fields.license_plate")} value={(*plate).clone()}
                    on_change={bind(&plate)} error={message(errors.plate)} />
                <TextField id="vin" label={i18n.t("fields.vin")} value={(*vin).clone()} required={false}
                    on_change={bind(&vin)} error={message(errors.vin)} />
                <div class="md:col-span-2">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        { i18n.t("vehicles.add") }
                    </button>
                </div>
            </form>
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_vehicle_without_vin() {
        let vehicle = check("Toyota", "Corolla", Ok(2019), "abc-123", "").unwrap();
        assert_eq!(vehicle.license_plate, "ABC-123");
        assert_eq!(vehicle.vin, None);
    }

    #[test]
    fn collects_field_errors() {
        let errors = check(" ", "Corolla", Err(ValidationError::YearOutOfRange), "!", "SHORT")
            .unwrap_err();
        assert_eq!(errors.make, Some(ValidationError::Required));
        assert_eq!(errors.model, None);
        assert_eq!(errors.year, Some(ValidationError::YearOutOfRange));
        assert_eq!(errors.plate, Some(ValidationError::InvalidPlate));
        assert_eq!(errors.vin, Some(ValidationError::InvalidVin));
    }
}
