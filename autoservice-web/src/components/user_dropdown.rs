use crate::{hooks::use_sign_out, models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let sign_out = use_sign_out();
    let session = use_selector(|state: &AppState| state.session.clone());
    let Some(session) = (*session).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            log::info!("signing out");
            sign_out.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ session.user.name.clone() }</div>
                    <div class="text-xs text-base-content/70">{ session.user.email.clone() }</div>
                    <div class="text-xs text-base-content/70">{ i18n.t(&format!("roles.{}", session.role)) }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
