use crate::{
    api::ServiceCenterClient,
    components::{error_alert::ErrorAlert, form_field::{TextField, bind}},
    hooks::complete_sign_in,
    models::app_state::AppState,
    routes::MainRoute,
    validation::{ValidationError, validate_email, validate_required},
};
use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

#[derive(Debug, Default, Clone, PartialEq)]
struct LoginErrors {
    email: Option<ValidationError>,
    password: Option<ValidationError>,
}

/// Credentials are only checked for shape; the password policy applies at
/// registration, not here.
fn check(email: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let email = validate_email(email);
    let password_error = validate_required(password).err();
    match email {
        Ok(email) if password_error.is_none() => Ok(LoginRequest {
            email,
            password: password.to_string(),
        }),
        email => Err(LoginErrors {
            email: email.err(),
            password: password_error,
        }),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, _) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(LoginErrors::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let field_errors = field_errors.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match check(&email_handle, &password_handle) {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(LoginErrors::default());
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let client = ServiceCenterClient::shared();
                match client.login(&request).await {
                    Ok(response) => match complete_sign_in(response, &dispatch) {
                        Ok(role) => {
                            if let Some(ref nav) = navigator_handle {
                                nav.push(&MainRoute::home_for(role));
                            }
                        }
                        Err(err) => error_ref.set(Some(i18n.t(err.translation_key()))),
                    },
                    Err(err) => {
                        let message = if err.is_unauthorized() {
                            i18n.t("auth.invalid_credentials")
                        } else {
                            err.user_message()
                        };
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let message = |err: Option<ValidationError>| err.map(|err| i18n.t(err.translation_key()));
    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{ i18n.t("auth.sign_in") }</h2>
                    <ErrorAlert message={(*error).clone()} />
                    <TextField
                        id="email"
                        label={i18n.t("fields.email")}
                        input_type="email"
                        value={(*email).clone()}
                        on_change={bind(&email)}
                        error={message(field_errors.email)}
                    />
                    <TextField
                        id="password"
                        label={i18n.t("fields.password")}
                        input_type="password"
                        value={(*password).clone()}
                        on_change={bind(&password)}
                        error={message(field_errors.password)}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            { if is_busy { i18n.t("auth.signing_in") } else { i18n.t("auth.sign_in") } }
                        </button>
                    </div>
                    <p class="text-sm mt-2">
                        { i18n.t("auth.no_account") }{" "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            { i18n.t("auth.register") }
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
