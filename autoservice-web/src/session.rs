//! Persisted sign-in state and the role checks built on it.
//!
//! The token and the user record are kept in local storage as plain strings.
//! Nothing is verified client-side beyond the token's `exp` claim; the API is
//! the authority and answers 401 when the cached claim is wrong.

use crate::auth::{Claims, decode_claims};
use gloo_storage::{LocalStorage, Storage};
use shared::models::{AuthResponse, Role, User};
use thiserror::Error;

pub const TOKEN_KEY: &str = "autoservice.token";
pub const USER_KEY: &str = "autoservice.user";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("account role {0:?} is not recognised")]
    UnknownRole(String),
    #[error("token has already expired")]
    Expired,
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl SessionError {
    /// Translation key for the message shown on the sign-in forms.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "auth.unknown_role",
            Self::Expired => "auth.session_expired",
            Self::Storage(_) => "auth.sign_in_failed",
        }
    }
}

/// Key/value persistence for the session.
pub trait SessionStorage {
    fn load_token(&self) -> Option<String>;
    fn load_user(&self) -> Option<String>;
    fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError>;
    fn clear(&self);
}

/// Browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn get(key: &str) -> Option<String> {
        LocalStorage::raw()
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    }
}

impl SessionStorage for BrowserStorage {
    fn load_token(&self) -> Option<String> {
        Self::get(TOKEN_KEY)
    }

    fn load_user(&self) -> Option<String> {
        Self::get(USER_KEY)
    }

    fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError> {
        let storage = LocalStorage::raw();
        storage
            .set_item(TOKEN_KEY, token)
            .and_then(|()| storage.set_item(USER_KEY, user_json))
            .map_err(|err| SessionError::Storage(format!("{err:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

/// A signed-in user as far as the client knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub role: Role,
}

impl Session {
    /// Rebuild the session from storage.
    ///
    /// Returns `None` when either half is missing, the user record does not
    /// parse, the token is expired (storage is cleared in that case), or no
    /// role can be inferred from the user record or the token.
    pub fn restore(storage: &impl SessionStorage, now_secs: i64) -> Option<Self> {
        let token = storage.load_token()?;
        let user_json = storage.load_user()?;
        let Ok(user) = serde_json::from_str::<User>(&user_json) else {
            log::warn!("discarding unreadable cached user record");
            storage.clear();
            return None;
        };

        let claims = decode_claims(&token).ok();
        if claims.as_ref().is_some_and(|claims| claims.is_expired(now_secs)) {
            log::info!("cached session for {} has expired", user.email);
            storage.clear();
            return None;
        }

        let role = resolve_role(&user, claims.as_ref())?;
        Some(Self { token, user, role })
    }

    /// Accept a login/register response and persist it.
    ///
    /// A storage failure is logged and ignored: the session still works for
    /// this tab, it just will not survive a reload.
    pub fn establish(
        storage: &impl SessionStorage,
        response: AuthResponse,
        now_secs: i64,
    ) -> Result<Self, SessionError> {
        let AuthResponse { token, user } = response;
        let claims = decode_claims(&token).ok();
        if claims.as_ref().is_some_and(|claims| claims.is_expired(now_secs)) {
            return Err(SessionError::Expired);
        }
        let role = resolve_role(&user, claims.as_ref())
            .ok_or_else(|| SessionError::UnknownRole(user.role.clone()))?;

        match serde_json::to_string(&user) {
            Ok(user_json) => {
                if let Err(err) = storage.save(&token, &user_json) {
                    log::warn!("session not persisted: {err}");
                }
            }
            Err(err) => log::warn!("session not persisted: {err}"),
        }

        Ok(Self { token, user, role })
    }

    /// Forget the session in storage.
    pub fn end(storage: &impl SessionStorage) {
        storage.clear();
    }
}

fn resolve_role(user: &User, claims: Option<&Claims>) -> Option<Role> {
    user.inferred_role().or_else(|| {
        claims
            .and_then(|claims| claims.role.as_deref())
            .and_then(Role::infer)
    })
}

/// Seconds since the epoch, as used by the `exp` claim.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Outcome of checking a session against a route's requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
    /// Signed in, but the route belongs to another role; go home instead.
    RedirectHome(Role),
}

/// Decide whether `session` may see a route restricted to `allowed`.
/// An empty `allowed` list admits any signed-in user.
pub fn authorize(session: Option<&Session>, allowed: &[Role]) -> Access {
    match session {
        None => Access::RedirectToLogin,
        Some(session) if allowed.is_empty() || allowed.contains(&session.role) => Access::Granted,
        Some(session) => Access::RedirectHome(session.role),
    }
}

/// Decide whether a sign-in/registration page should render.
pub fn authorize_guest(session: Option<&Session>) -> Access {
    match session {
        None => Access::Granted,
        Some(session) => Access::RedirectHome(session.role),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::auth::jwt::tests::token_with;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use uuid::Uuid;

    #[derive(Debug, Default)]
    pub(crate) struct MemoryStorage {
        items: RefCell<HashMap<&'static str, String>>,
        pub(crate) fail_writes: bool,
    }

    impl MemoryStorage {
        pub(crate) fn with(token: &str, user_json: &str) -> Self {
            let storage = Self::default();
            storage.save(token, user_json).unwrap();
            storage
        }

        pub(crate) fn is_empty(&self) -> bool {
            self.items.borrow().is_empty()
        }
    }

    impl SessionStorage for MemoryStorage {
        fn load_token(&self) -> Option<String> {
            self.items.borrow().get(TOKEN_KEY).cloned()
        }

        fn load_user(&self) -> Option<String> {
            self.items.borrow().get(USER_KEY).cloned()
        }

        fn save(&self, token: &str, user_json: &str) -> Result<(), SessionError> {
            if self.fail_writes {
                return Err(SessionError::Storage("quota exceeded".to_string()));
            }
            let mut items = self.items.borrow_mut();
            items.insert(TOKEN_KEY, token.to_string());
            items.insert(USER_KEY, user_json.to_string());
            Ok(())
        }

        fn clear(&self) {
            self.items.borrow_mut().clear();
        }
    }

    pub(crate) fn user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Robin".to_string(),
            email: "robin@example.com".to_string(),
            role: role.to_string(),
        }
    }

    fn user_json(role: &str) -> String {
        serde_json::to_string(&user(role)).unwrap()
    }

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn session_errors_have_distinct_messages() {
        assert_eq!(
            SessionError::UnknownRole("guest".to_string()).translation_key(),
            "auth.unknown_role"
        );
        assert_eq!(SessionError::Expired.translation_key(), "auth.session_expired");
        assert_eq!(
            SessionError::Storage("quota exceeded".to_string()).translation_key(),
            "auth.sign_in_failed"
        );
    }

    #[test]
    fn restore_requires_token_and_user() {
        let storage = MemoryStorage::default();
        assert_eq!(Session::restore(&storage, NOW), None);

        storage.items.borrow_mut().insert(TOKEN_KEY, "opaque".to_string());
        assert_eq!(Session::restore(&storage, NOW), None);
    }

    #[test]
    fn restore_with_opaque_token_trusts_user_role() {
        let storage = MemoryStorage::with("opaque-token", &user_json("Technician"));
        let session = Session::restore(&storage, NOW).unwrap();

        assert_eq!(session.role, Role::Employee);
        assert_eq!(session.token, "opaque-token");
    }

    #[test]
    fn restore_falls_back_to_token_role_claim() {
        let token = token_with(&serde_json::json!({ "role": "admin", "exp": NOW + 60 }));
        let storage = MemoryStorage::with(&token, &user_json(""));

        assert_eq!(Session::restore(&storage, NOW).unwrap().role, Role::Admin);
    }

    #[test]
    fn restore_prefers_user_role_over_claim() {
        let token = token_with(&serde_json::json!({ "role": "admin" }));
        let storage = MemoryStorage::with(&token, &user_json("customer"));

        assert_eq!(Session::restore(&storage, NOW).unwrap().role, Role::Customer);
    }

    #[test]
    fn restore_drops_expired_token_and_clears_storage() {
        let token = token_with(&serde_json::json!({ "exp": NOW }));
        let storage = MemoryStorage::with(&token, &user_json("customer"));

        assert_eq!(Session::restore(&storage, NOW), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_drops_unreadable_user() {
        let storage = MemoryStorage::with("opaque", "{not json");

        assert_eq!(Session::restore(&storage, NOW), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn restore_without_inferable_role_is_anonymous() {
        let storage = MemoryStorage::with("opaque", &user_json("guest"));
        assert_eq!(Session::restore(&storage, NOW), None);
    }

    #[test]
    fn establish_persists_and_round_trips() {
        let storage = MemoryStorage::default();
        let response = AuthResponse {
            token: token_with(&serde_json::json!({ "exp": NOW + 3600 })),
            user: user("customer"),
        };

        let session = Session::establish(&storage, response, NOW).unwrap();

        assert_eq!(session.role, Role::Customer);
        assert_eq!(Session::restore(&storage, NOW), Some(session));
    }

    #[test]
    fn establish_rejects_unknown_role() {
        let storage = MemoryStorage::default();
        let response = AuthResponse {
            token: "opaque".to_string(),
            user: user("visitor"),
        };

        assert_eq!(
            Session::establish(&storage, response, NOW),
            Err(SessionError::UnknownRole("visitor".to_string()))
        );
        assert!(storage.is_empty());
    }

    #[test]
    fn establish_rejects_expired_token() {
        let storage = MemoryStorage::default();
        let response = AuthResponse {
            token: token_with(&serde_json::json!({ "exp": NOW - 1 })),
            user: user("admin"),
        };

        assert_eq!(
            Session::establish(&storage, response, NOW),
            Err(SessionError::Expired)
        );
    }

    #[test]
    fn establish_survives_storage_failure() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let response = AuthResponse {
            token: "opaque".to_string(),
            user: user("employee"),
        };

        let session = Session::establish(&storage, response, NOW).unwrap();
        assert_eq!(session.role, Role::Employee);
        assert!(storage.is_empty());
    }

    #[test]
    fn end_clears_storage() {
        let storage = MemoryStorage::with("opaque", &user_json("admin"));
        Session::end(&storage);
        assert!(storage.is_empty());
    }

    fn session(role: Role) -> Session {
        Session {
            token: "t".to_string(),
            user: user(role.as_str()),
            role,
        }
    }

    #[test]
    fn authorize_matrix() {
        let admin = session(Role::Admin);
        let customer = session(Role::Customer);

        assert_eq!(authorize(None, &[Role::Customer]), Access::RedirectToLogin);
        assert_eq!(authorize(None, &[]), Access::RedirectToLogin);
        assert_eq!(authorize(Some(&customer), &[Role::Customer]), Access::Granted);
        assert_eq!(
            authorize(Some(&customer), &[Role::Admin]),
            Access::RedirectHome(Role::Customer)
        );
        assert_eq!(
            authorize(Some(&admin), &[Role::Customer, Role::Admin]),
            Access::Granted
        );
        assert_eq!(authorize(Some(&admin), &[]), Access::Granted);
    }

    #[test]
    fn guest_pages_bounce_signed_in_users() {
        assert_eq!(authorize_guest(None), Access::Granted);
        assert_eq!(
            authorize_guest(Some(&session(Role::Employee))),
            Access::RedirectHome(Role::Employee)
        );
    }
}
