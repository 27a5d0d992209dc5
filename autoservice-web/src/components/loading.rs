use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, _) = use_translation();
    html! {
        <div class="flex items-center justify-center p-8 gap-3 text-base-content/70">
            <span class="loading loading-spinner loading-md"></span>
            <span>{ i18n.t("common.loading") }</span>
        </div>
    }
}
