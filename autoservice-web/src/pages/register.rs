use crate::{
    api::ServiceCenterClient,
    components::{error_alert::ErrorAlert, form_field::{TextField, bind}},
    hooks::complete_sign_in,
    models::app_state::AppState,
    routes::MainRoute,
    validation::{
        ValidationError, validate_confirm_password, validate_email, validate_password,
        validate_required,
    },
};
use i18nrs::yew::use_translation;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

#[derive(Debug, Default, Clone, PartialEq)]
struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    confirm: Option<ValidationError>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn check(name: &str, email: &str, password: &str, confirm: &str) -> Result<RegisterRequest, FieldErrors> {
    let errors = FieldErrors {
        name: validate_required(name).err(),
        email: validate_email(email).err(),
        password: validate_password(password).err(),
        confirm: validate_confirm_password(confirm, password).err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Self-service sign-up; new accounts are customers.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, _) = use_translation();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let field_errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let (name, email, password, confirm) =
            (name.clone(), email.clone(), password.clone(), confirm.clone());
        let field_errors = field_errors.clone();
        let error = error.clone();
        let loading = loading.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match check(&name, &email, &password, &confirm) {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::default());
            error.set(None);
            loading.set(true);
            let (error, loading) = (error.clone(), loading.clone());
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                match ServiceCenterClient::shared().register(&request).await {
                    Ok(response) => match complete_sign_in(response, &dispatch) {
                        Ok(role) => {
                            if let Some(nav) = &navigator {
                                nav.push(&MainRoute::home_for(role));
                            }
                        }
                        Err(err) => error.set(Some(i18n.t(err.translation_key()))),
                    },
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let message = |err: Option<ValidationError>| err.map(|err| i18n.t(err.translation_key()));

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("auth.create_account") }</h2>
                    <ErrorAlert message={(*error).clone()} />
                    <TextField id="name" label={i18n.t("fields.name")} value={(*name).clone()}
                        on_change={bind(&name)} error={message(field_errors.name)} />
                    <TextField id="email" label={i18n.t("fields.email")} input_type="email"
                        value={(*email).clone()} on_change={bind(&email)} error={message(field_errors.email)} />
                    <TextField id="password" label={i18n.t("fields.password")} input_type="password"
                        value={(*password).clone()} on_change={bind(&password)}
                        error={message(field_errors.password)} />
                    <TextField id="confirm" label={i18n.t("fields.confirm_password")} input_type="password"
                        value={(*confirm).clone()} on_change={bind(&confirm)}
                        error={message(field_errors.confirm)} />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            { i18n.t("auth.register") }
                        </button>
                    </div>
                    <p class="text-sm mt-2">
                        { i18n.t("auth.have_account") }{" "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            { i18n.t("auth.sign_in") }
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_builds_trimmed_request() {
        let request = check(" Ana ", " ana@example.com", "secret123", "secret123").unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.password, "secret123");
    }

    #[test]
    fn every_bad_field_is_reported_at_once() {
        let errors = check("", "nope", "short", "other").unwrap_err();
        assert_eq!(errors.name, Some(ValidationError::Required));
        assert_eq!(errors.email, Some(ValidationError::InvalidEmail));
        assert_eq!(errors.password, Some(ValidationError::PasswordTooShort));
        assert_eq!(errors.confirm, Some(ValidationError::PasswordsDoNotMatch));
    }
}
