#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{RoleResponse, UserId, UserRecord};
    use crate::state::session::{SessionProvider, ADMIN_ROLE};
    use std::collections::BTreeSet;

    /// In-memory stand-in for the browser's session storage.
    #[derive(Debug, Clone, Default)]
    pub struct MemorySession {
        token: Option<String>,
        roles: Option<BTreeSet<String>>,
    }

    impl MemorySession {
        pub fn new(token: Option<&str>, roles: Option<&[&str]>) -> Self {
            Self {
                token: token.map(str::to_string),
                roles: roles.map(|roles| roles.iter().map(|r| r.to_string()).collect()),
            }
        }

        pub fn admin(token: &str) -> Self {
            Self::new(Some(token), Some(&[ADMIN_ROLE]))
        }

        pub fn empty() -> Self {
            Self::default()
        }
    }

    impl SessionProvider for MemorySession {
        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn roles(&self) -> Option<BTreeSet<String>> {
            self.roles.clone()
        }
    }

    pub fn user(id: UserId, username: &str, roles: &[(i64, &str)]) -> UserRecord {
        UserRecord {
            id,
            username: username.into(),
            email: format!("{}@example.org", username),
            church: "Igreja Central".into(),
            phone: "555-0100".into(),
            roles: roles
                .iter()
                .map(|(id, name)| RoleResponse {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    pub fn user_json(user: &UserRecord) -> serde_json::Value {
        serde_json::to_value(user).expect("serialize user")
    }
}
