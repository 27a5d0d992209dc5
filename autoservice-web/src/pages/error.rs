use crate::{config::FrontendConfig, routes::MainRoute};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

/// `ErrorPage` page component, shown for unknown paths
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();
    let support_url = FrontendConfig::new().support_url;

    html! {
        <div class="p-4 space-y-6 text-center">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-12 h-12 mx-auto text-warning" />
            <h1 class="text-2xl font-bold">{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <div class="flex justify-center gap-2">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                    { i18n.t("common.back_to_dashboard") }
                </Link<MainRoute>>
                <a class="btn btn-ghost" href={support_url}>{ i18n.t("common.contact_support") }</a>
            </div>
        </div>
    }
}
