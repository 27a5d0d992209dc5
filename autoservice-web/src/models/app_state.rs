use crate::session::Session;
use yewdux::Store;

/// Global store mirroring the persisted session.
///
/// `restored` flips once the startup read of local storage has happened, so
/// route guards do not bounce a returning user to the login page while the
/// session is still being loaded.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub restored: bool,
    pub session: Option<Session>,
}

impl AppState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            restored: true,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            restored: true,
            session: None,
        }
    }
}
