use crate::{
    api::ServiceCenterClient,
    components::{error_alert::ErrorAlert, loading::Loading},
    config::FrontendConfig,
    containers::page_content::PageContent,
    hooks::{Remote, report, use_remote, use_sign_out},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use serde::Deserialize;
use shared::models::{CheckoutRequest, CheckoutStatus, Invoice};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_location};

/// Placeholder the payment provider substitutes with the real session id.
const SESSION_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Return URLs handed to the provider for a given page origin.
pub fn return_urls(origin: &str) -> (String, String) {
    let origin = origin.trim_end_matches('/');
    (
        format!("{origin}/pay/success?session_id={SESSION_PLACEHOLDER}"),
        format!("{origin}/pay/cancel"),
    )
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

fn redirect_to(url: &str) -> bool {
    web_sys::window()
        .map(|window| window.location().set_href(url).is_ok())
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq)]
enum CheckoutStep {
    Preparing,
    NotPayable(Invoice),
    Redirecting,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct CheckoutPageProps {
    pub invoice_id: String,
}

/// Loads the invoice and hands the browser over to hosted checkout.
#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let (i18n, _) = use_translation();
    let step = use_state(|| CheckoutStep::Preparing);
    let sign_out = use_sign_out();

    {
        let step = step.clone();
        let invalid_id = i18n.t("checkout.invalid_invoice");
        let no_redirect = i18n.t("checkout.redirect_failed");
        use_effect_with(props.invoice_id.clone(), move |invoice_id| {
            let invoice_id = Uuid::parse_str(invoice_id);
            spawn_local(async move {
                let Ok(invoice_id) = invoice_id else {
                    step.set(CheckoutStep::Failed(invalid_id));
                    return;
                };
                let client = ServiceCenterClient::shared();
                let invoice = match client.get_invoice(&invoice_id).await {
                    Ok(invoice) => invoice,
                    Err(err) => {
                        step.set(CheckoutStep::Failed(report(&err, &sign_out)));
                        return;
                    }
                };
                if !invoice.status.is_payable() {
                    log::info!("invoice {} is {}, not starting checkout", invoice.id, invoice.status);
                    step.set(CheckoutStep::NotPayable(invoice));
                    return;
                }
                let Some(origin) = window_origin() else {
                    step.set(CheckoutStep::Failed(no_redirect));
                    return;
                };
                let (success_url, cancel_url) = return_urls(&origin);
                let request = CheckoutRequest {
                    invoice_id,
                    success_url,
                    cancel_url,
                };
                match client.create_checkout_session(&request).await {
                    Ok(session) => {
                        log::info!("checkout session {} opened for invoice {invoice_id}", session.id);
                        step.set(CheckoutStep::Redirecting);
                        if !redirect_to(&session.url) {
                            log::error!("could not navigate to {}", session.url);
                            step.set(CheckoutStep::Failed(no_redirect));
                        }
                    }
                    Err(err) => step.set(CheckoutStep::Failed(report(&err, &sign_out))),
                }
            });
            || ()
        });
    }

    let body = match &*step {
        CheckoutStep::Preparing => html! { <Loading /> },
        CheckoutStep::Redirecting => html! {
            <p class="flex items-center gap-2">
                <span class="loading loading-spinner loading-sm"></span>
                { i18n.t("checkout.redirecting") }
            </p>
        },
        CheckoutStep::NotPayable(invoice) => html! {
            <div class="alert alert-info">
                <span>
                    { i18n.t("checkout.not_payable") }{" "}
                    { format!("({}, {})", invoice.amount_display(),
                        i18n.t(&format!("status.invoice.{}", invoice.status.as_str()))) }
                </span>
            </div>
        },
        CheckoutStep::Failed(message) => html! { <ErrorAlert message={Some(message.clone())} /> },
    };

    html! {
        <PageContent title={i18n.t("routes.checkout")}>
            { body }
            <div class="mt-6">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost">
                    { i18n.t("common.back_to_dashboard") }
                </Link<MainRoute>>
            </div>
        </PageContent>
    }
}

#[derive(Debug, Default, Deserialize)]
struct ResultQuery {
    session_id: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct CheckoutResultPageProps {
    pub success: bool,
}

/// Landing page for the provider's success and cancel redirects.
#[function_component(CheckoutResultPage)]
pub fn checkout_result_page(props: &CheckoutResultPageProps) -> Html {
    let (i18n, _) = use_translation();
    let session_id = use_location()
        .and_then(|location| location.query::<ResultQuery>().ok())
        .and_then(|query| query.session_id)
        .filter(|id| !id.is_empty() && id != SESSION_PLACEHOLDER);
    let success = props.success;
    let status = use_remote(0, move |client| async move {
        match session_id {
            Some(session_id) if success => client.checkout_status(&session_id).await.map(Some),
            _ => Ok(None::<CheckoutStatus>),
        }
    });
    let support_url = FrontendConfig::new().support_url;

    let body = if success {
        match &*status {
            Remote::Loaded(Some(status)) if status.paid => html! {
                <div class="alert alert-success"><span>{ i18n.t("checkout.paid") }</span></div>
            },
            Remote::Loaded(Some(_)) => html! {
                <div class="alert alert-warning"><span>{ i18n.t("checkout.pending") }</span></div>
            },
            Remote::Loaded(None) => html! {
                <div class="alert alert-info"><span>{ i18n.t("checkout.unverified") }</span></div>
            },
            other => other.view(|_| Html::default()),
        }
    } else {
        html! {
            <div class="alert alert-warning"><span>{ i18n.t("checkout.cancelled") }</span></div>
        }
    };

    html! {
        <PageContent title={i18n.t("routes.checkout")}>
            { body }
            <div class="mt-6 flex gap-2">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                    { i18n.t("common.back_to_dashboard") }
                </Link<MainRoute>>
                <a class="btn btn-ghost" href={support_url}>{ i18n.t("common.contact_support") }</a>
            </div>
        </PageContent>
    }
}
