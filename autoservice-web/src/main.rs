mod api;
mod app;
#[cfg(test)]
mod app_test;
mod auth;
mod components;
mod config;
mod containers;
mod error;
mod hooks;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
#[cfg(test)]
mod routes_test;
mod session;
mod validation;

use app::App;
use config::FrontendConfig;
use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{LANGUAGE_KEY, initial_language, supported_languages};
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();
    let saved: Option<String> = LocalStorage::get(LANGUAGE_KEY).ok();

    let config = I18nProviderConfig {
        translations,
        default_language: initial_language(saved.as_deref()).to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    let config = FrontendConfig::new();
    logging::init(config.log_level);
    logging::install_panic_hook();
    log::info!("starting AutoService frontend against {}", config.api_base_url());

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => log::error!("no document body to mount the application on"),
    };
}
