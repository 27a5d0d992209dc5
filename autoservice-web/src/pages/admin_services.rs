use crate::{
    api::ServiceCenterClient,
    components::{
        error_alert::ErrorAlert,
        form_field::{TextField, bind},
    },
    containers::page_content::PageContent,
    hooks::{report, use_reload, use_remote, use_sign_out},
    validation::{ValidationError, validate_amount, validate_duration, validate_required},
};
use i18nrs::yew::use_translation;
use shared::models::NewServiceOffering;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct ServiceErrors {
    name: Option<ValidationError>,
    price: Option<ValidationError>,
    duration: Option<ValidationError>,
}

fn check(
    name: &str,
    description: &str,
    price: &str,
    duration: &str,
) -> Result<NewServiceOffering, ServiceErrors> {
    match (
        validate_required(name),
        validate_amount(price),
        validate_duration(duration),
    ) {
        (Ok(name), Ok(price_cents), Ok(duration_minutes)) => Ok(NewServiceOffering {
            name,
            description: description.trim().to_string(),
            price_cents,
            duration_minutes,
        }),
        (name, price, duration) => Err(ServiceErrors {
            name: name.err(),
            price: price.err(),
            duration: duration.err(),
        }),
    }
}

#[function_component(AdminServicesPage)]
pub fn admin_services_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let sign_out = use_sign_out();
    let services = use_remote(reload.0, |client| async move { client.list_services().await });

    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let duration = use_state(String::new);
    let errors = use_state(ServiceErrors::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let (name, description, price, duration) =
            (name.clone(), description.clone(), price.clone(), duration.clone());
        let (errors, error, saving, reload) =
            (errors.clone(), error.clone(), saving.clone(), reload.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match check(&name, &description, &price, &duration) {
                Ok(payload) => payload,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(ServiceErrors::default());
            error.set(None);
            saving.set(true);
            let fields = [name.clone(), description.clone(), price.clone(), duration.clone()];
            let (error, saving, reload) = (error.clone(), saving.clone(), reload.clone());
            let sign_out = sign_out.clone();
            spawn_local(async move {
                match ServiceCenterClient::shared().create_service(&payload).await {
                    Ok(service) => {
                        log::info!("added service {} ({})", service.name, service.id);
                        for field in &fields {
                            field.set(String::new());
                        }
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
        <PageContent title={i18n.t("routes.services")}>
            <ErrorAlert message={(*error).clone()} />
            { services.view(|services| if services.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("services.empty") }</p> }
            } else {
                html! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.name") }</th>
                                    <th>{ i18n.t("fields.description") }</th>
                                    <th>{ i18n.t("fields.price") }</th>
                                    <th>{ i18n.t("fields.duration") }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for services.iter().map(|service| html! {
                                    <tr key={service.id.to_string()}>
                                        <td>{ service.name.clone() }</td>
                                        <td>{ service.description.clone() }</td>
                                        <td>{ service.price_display() }</td>
                                        <td>{ format!("{} min", service.duration_minutes) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            }) }

            <form class="mt-8 grid gap-2 md:grid-cols-2" {onsubmit} novalidate=true>
                <h2 class="text-xl font-semibold md:col-span-2">{ i18n.t("services.add") }</h2>
                <TextField id="service-name" label={i18n.t("fields.name")} value={(*name).clone()}
                    on_change={bind(&name)} error={message(errors.name)} />
                <TextField id="service-price" label={i18n.t("fields.price")} value={(*price).clone()}
                    on_change={bind(&price)} placeholder="49.99" error={message(errors.price)} />
                <TextField id="service-duration" label={i18n.t("fields.duration_minutes")}
                    input_type="number" value={(*duration).clone()} on_change={bind(&duration)}
                    error={message(errors.duration)} />
                <TextField id="service-description" label={i18n.t("fields.description")}
                    value={(*description).clone()} on_change={bind(&description)}
                    required={false} multiline=true />
                <div class="md:col-span-2">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        { i18n.t("services.add") }
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
    fn price_is_converted_to_cents() {
        let service = check("Oil change", " Synthetic ", "49.9", "45").unwrap();
        assert_eq!(service.price_cents, 4990);
        assert_eq!(service.duration_minutes, 45);
        assert_eq!(service.description, "Synthetic");
    }

    #[test]
    fn free_services_are_allowed_but_zero_duration_is_not() {
        let errors = check("Inspection", "", "0", "0").unwrap_err();
        assert_eq!(errors.price, None);
        assert_eq!(errors.duration, Some(ValidationError::DurationOutOfRange));
    }
}
