use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

/// The three kinds of account the service center knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Employee,
    Admin,
}

impl Role {
    /// Return the canonical string representation sent to the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    /// Infer a role from the free-form string stored on a user record or token.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The API
    /// has historically emitted a few synonyms (`technician`, `client`, ...),
    /// all of which map onto the three canonical roles. Anything else yields
    /// `None` and is treated as an anonymous visitor.
    #[must_use]
    pub fn infer(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Some(Self::Admin),
            "employee" | "technician" | "mechanic" | "staff" => Some(Self::Employee),
            "customer" | "client" | "user" => Some(Self::Customer),
            _ => None,
        }
    }

    /// Path of the dashboard a user with this role lands on.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Customer => "/customer",
            Self::Employee => "/employee",
            Self::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::infer(value).ok_or("unknown role")
    }
}

/// User record returned by the auth endpoints and cached in local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    /// Raw role string as sent by the API; see [`Role::infer`].
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Role inferred from the stored role string, if any.
    #[must_use]
    pub fn inferred_role(&self) -> Option<Role> {
        Role::infer(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use uuid::Uuid;

    #[test_case("admin", Some(Role::Admin))]
    #[test_case("  Administrator ", Some(Role::Admin))]
    #[test_case("EMPLOYEE", Some(Role::Employee))]
    #[test_case("technician", Some(Role::Employee))]
    #[test_case("mechanic", Some(Role::Employee))]
    #[test_case("customer", Some(Role::Customer))]
    #[test_case("client", Some(Role::Customer))]
    #[test_case("", None)]
    #[test_case("superuser", None)]
    fn role_inference(raw: &str, expected: Option<Role>) {
        assert_eq!(Role::infer(raw), expected);
    }

    #[test]
    fn role_canonical_strings_parse_back() {
        for role in Role::iter() {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn role_home_paths_are_distinct() {
        let paths: Vec<_> = Role::iter().map(Role::home_path).collect();
        assert_eq!(paths, vec!["/customer", "/employee", "/admin"]);
    }

    #[test]
    fn user_without_role_field_deserializes() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{id}","name":"Dana","email":"dana@example.com"}}"#);
        let user: User = serde_json::from_str(&json).unwrap();

        assert_eq!(user.role, "");
        assert_eq!(user.inferred_role(), None);
    }

    #[test]
    fn user_round_trips_through_storage_json() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            role: "Technician".to_string(),
        };

        let stored = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&stored).unwrap();

        assert_eq!(restored, user);
        assert_eq!(restored.inferred_role(), Some(Role::Employee));
    }
}
