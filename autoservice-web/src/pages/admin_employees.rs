use crate::{
    api::ServiceCenterClient,
    components::{
        error_alert::ErrorAlert,
        form_field::{TextField, bind},
    },
    containers::page_content::PageContent,
    hooks::{report, use_reload, use_remote, use_sign_out},
    validation::{
        ValidationError, validate_amount, validate_email, validate_password, validate_required,
    },
};
use i18nrs::yew::use_translation;
use shared::models::{DEFAULT_CURRENCY, NewEmployee, format_money};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct EmployeeErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    rate: Option<ValidationError>,
}

fn optional_rate(value: &str) -> Result<Option<i64>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    validate_amount(value).map(Some)
}

fn check(
    name: &str,
    email: &str,
    position: &str,
    password: &str,
    rate: &str,
) -> Result<NewEmployee, EmployeeErrors> {
    match (
        validate_required(name),
        validate_email(email),
        validate_password(password),
        optional_rate(rate),
    ) {
        (Ok(name), Ok(email), Ok(()), Ok(hourly_rate_cents)) => Ok(NewEmployee {
            name,
            email,
            position: position.trim().to_string(),
            password: password.to_string(),
            hourly_rate_cents,
        }),
        (name, email, password, rate) => Err(EmployeeErrors {
            name: name.err(),
            email: email.err(),
            password: password.err(),
            rate: rate.err(),
        }),
    }
}

#[function_component(AdminEmployeesPage)]
pub fn admin_employees_page() -> Html {
    let (i18n, _) = use_translation();
    let reload = use_reload();
    let sign_out = use_sign_out();
    let employees = use_remote(reload.0, |client| async move { client.list_employees().await });

    let name = use_state(String::new);
    let email = use_state(String::new);
    let position = use_state(String::new);
    let password = use_state(String::new);
    let rate = use_state(String::new);
    let errors = use_state(EmployeeErrors::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let fields = [
            name.clone(),
            email.clone(),
            position.clone(),
            password.clone(),
            rate.clone(),
        ];
        let (errors, error, saving, reload) =
            (errors.clone(), error.clone(), saving.clone(), reload.clone());
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let [name, email, position, password, rate] = &fields;
            let payload = match check(name, email, position, password, rate) {
                Ok(payload) => payload,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(EmployeeErrors::default());
            error.set(None);
            saving.set(true);
            let fields = fields.clone();
            let (error, saving, reload) = (error.clone(), saving.clone(), reload.clone());
            let sign_out = sign_out.clone();
            spawn_local(async move {
                match ServiceCenterClient::shared().create_employee(&payload).await {
                    Ok(employee) => {
                        log::info!("added employee {}", employee.email);
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
        <PageContent title={i18n.t("routes.employees")}>
            <ErrorAlert message={(*error).clone()} />
            { employees.view(|employees| if employees.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("employees.empty") }</p> }
            } else {
                html! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("fields.name") }</th>
                                    <th>{ i18n.t("fields.email") }</th>
                                    <th>{ i18n.t("fields.position") }</th>
                                    <th>{ i18n.t("fields.hourly_rate") }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for employees.iter().map(|employee| html! {
                                    <tr key={employee.id.to_string()}>
                                        <td>{ employee.name.clone() }</td>
                                        <td>{ employee.email.clone() }</td>
                                        <td>{ employee.position.clone() }</td>
                                        <td>{ employee
                                            .hourly_rate_cents
                                            .map(|cents| format_money(cents, DEFAULT_CURRENCY))
                                            .unwrap_or_default() }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            }) }

            <form class="mt-8 grid gap-2 md:grid-cols-2" {onsubmit} novalidate=true>
                <h2 class="text-xl font-semibold md:col-span-2">{ i18n.t("employees.add") }</h2>
                <TextField id="employee-name" label={i18n.t("fields.name")} value={(*name).clone()}
                    on_change={bind(&name)} error={message(errors.name)} />
                <TextField id="employee-email" label={i18n.t("fields.email")} input_type="email"
                    value={(*email).clone()} on_change={bind(&email)} error={message(errors.email)} />
                <TextField id="employee-position" label={i18n.t("fields.position")}
                    value={(*position).clone()} on_change={bind(&position)} required={false} />
                <TextField id="employee-rate" label={i18n.t("fields.hourly_rate")}
                    value={(*rate).clone()} on_change={bind(&rate)} required={false}
                    error={message(errors.rate)} />
                <TextField id="employee-password" label={i18n.t("fields.initial_password")}
                    input_type="password" value={(*password).clone()} on_change={bind(&password)}
                    error={message(errors.password)} />
                <div class="md:col-span-2">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        { i18n.t("employees.add") }
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
    fn hourly_rate_is_optional() {
        let employee = check("Rosa", "rosa@example.com", " Mechanic ", "changeme1", "").unwrap();
        assert_eq!(employee.hourly_rate_cents, None);
        assert_eq!(employee.position, "Mechanic");

        let paid = check("Rosa", "rosa@example.com", "", "changeme1", "32.5").unwrap();
        assert_eq!(paid.hourly_rate_cents, Some(3250));
    }

    #[test]
    fn rejects_bad_credentials_and_rate() {
        let errors = check("Rosa", "rosa", "", "short", "abc").unwrap_err();
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
        assert_eq!(errors.rate, Some(ValidationError::InvalidAmount));
    }
}
