//! Tests for the startup session restore

#[cfg(test)]
mod tests {
    use crate::app::restored_state;
    use crate::auth::jwt::tests::token_with;
    use crate::session::tests::{MemoryStorage, user};
    use shared::models::Role;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn empty_storage_starts_signed_out() {
        let state = restored_state(&MemoryStorage::default(), NOW);
        assert!(state.restored);
        assert!(state.session.is_none());
    }

    #[test]
    fn valid_session_is_restored() {
        let token = token_with(&serde_json::json!({ "sub": "1", "exp": NOW + 60 }));
        let user_json = serde_json::to_string(&user("mechanic")).unwrap();
        let state = restored_state(&MemoryStorage::with(&token, &user_json), NOW);

        let session = state.session.expect("session restored");
        assert_eq!(session.role, Role::Employee);
        assert_eq!(session.token, token);
    }

    #[test]
    fn expired_session_is_dropped_and_cleared() {
        let token = token_with(&serde_json::json!({ "sub": "1", "exp": NOW }));
        let user_json = serde_json::to_string(&user("customer")).unwrap();
        let storage = MemoryStorage::with(&token, &user_json);

        let state = restored_state(&storage, NOW);
        assert!(state.restored);
        assert!(state.session.is_none());
        assert!(storage.is_empty());
    }
}
