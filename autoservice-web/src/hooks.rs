//! Hooks shared by the pages: fetch-on-mount and sign-out.

use crate::api::ServiceCenterClient;
use crate::error::ApiError;
use crate::models::app_state::AppState;
use crate::session::{BrowserStorage, Session, SessionError, now_secs};
use shared::models::{AuthResponse, Role};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, Reducible, UseReducerHandle, UseStateHandle, hook, html, use_effect_with,
    use_reducer, use_state,
};
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

/// Transient view state of one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Render the loaded value, or the loading/error placeholder.
    pub fn view(&self, render: impl FnOnce(&T) -> Html) -> Html {
        match self {
            Self::Loading => html! { <crate::components::loading::Loading /> },
            Self::Failed(message) => html! {
                <crate::components::error_alert::ErrorAlert message={Some(message.clone())} />
            },
            Self::Loaded(value) => render(value),
        }
    }
}

/// Forget the session everywhere: storage, API client and store.
#[hook]
pub fn use_sign_out() -> Callback<()> {
    let dispatch = use_dispatch::<AppState>();
    Callback::from(move |()| {
        Session::end(&BrowserStorage);
        ServiceCenterClient::shared().set_token(None);
        dispatch.set(AppState::signed_out());
    })
}

/// Turn a login/registration response into the active session.
pub fn complete_sign_in(
    response: AuthResponse,
    dispatch: &Dispatch<AppState>,
) -> Result<Role, SessionError> {
    let client = ServiceCenterClient::shared();
    match Session::establish(&BrowserStorage, response, now_secs()) {
        Ok(session) => {
            log::info!("signed in as {} ({})", session.user.email, session.role);
            client.set_token(Some(session.token.clone()));
            let role = session.role;
            dispatch.set(AppState::signed_in(session));
            Ok(role)
        }
        Err(err) => {
            log::warn!("sign-in rejected: {err}");
            client.set_token(None);
            Err(err)
        }
    }
}

/// Surface an API failure inline and drop the session when it was rejected.
pub fn report(error: &ApiError, sign_out: &Callback<()>) -> String {
    log::warn!("api call failed: {error}");
    if error.is_unauthorized() {
        sign_out.emit(());
    }
    error.user_message()
}

/// Generation counter fed to [`use_remote`]. Each dispatch increments the
/// current value, so several mutations finishing in one frame all count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reload(pub u32);

impl Reducible for Reload {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[hook]
pub fn use_reload() -> UseReducerHandle<Reload> {
    use_reducer(Reload::default)
}

/// Fetch a resource when the component mounts and again whenever `reload`
/// changes.
#[hook]
pub fn use_remote<T, F, Fut>(reload: u32, fetch: F) -> UseStateHandle<Remote<T>>
where
    T: 'static,
    F: FnOnce(ServiceCenterClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Remote::Loading);
    let sign_out = use_sign_out();
    {
        let state = state.clone();
        use_effect_with(reload, move |_| {
            spawn_local(async move {
                match fetch(ServiceCenterClient::shared()).await {
                    Ok(value) => state.set(Remote::Loaded(value)),
                    Err(err) => state.set(Remote::Failed(report(&err, &sign_out))),
                }
            });
            || ()
        });
    }
    state
}
