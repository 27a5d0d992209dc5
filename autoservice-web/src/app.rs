use crate::api::ServiceCenterClient;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::session::{BrowserStorage, Session, SessionStorage, now_secs};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

/// Startup store contents for whatever session survived in storage.
pub fn restored_state(storage: &impl SessionStorage, now_secs: i64) -> AppState {
    match Session::restore(storage, now_secs) {
        Some(session) => {
            log::info!("restored session for {} ({})", session.user.email, session.role);
            AppState::signed_in(session)
        }
        None => AppState::signed_out(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    use_effect_with((), move |_| {
        let state = restored_state(&BrowserStorage, now_secs());
        let token = state.session.as_ref().map(|session| session.token.clone());
        ServiceCenterClient::shared().set_token(token);
        dispatch.set(state);
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
