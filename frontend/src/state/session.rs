use leptos::*;
use serde_json::Value;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::utils::storage;

pub const TOKEN_KEY: &str = "token";
pub const ROLES_KEY: &str = "roles";
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Credentials written at login by another page. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub roles: BTreeSet<String>,
}

impl Session {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Source of the current token and role claims, queried at the start of
/// every guarded operation.
pub trait SessionProvider {
    fn token(&self) -> Option<String>;
    fn roles(&self) -> Option<BTreeSet<String>>;
}

/// Reads `token` and the JSON-encoded `roles` array from `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn token(&self) -> Option<String> {
        storage::read_item(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn roles(&self) -> Option<BTreeSet<String>> {
        storage::read_item(ROLES_KEY).and_then(|raw| parse_roles(&raw))
    }
}

/// Decodes the `roles` claim. Non-string entries are skipped, so a stray
/// number does not hide an admin role next to it.
pub fn parse_roles(raw: &str) -> Option<BTreeSet<String>> {
    match serde_json::from_str::<Option<Vec<Value>>>(raw) {
        Ok(roles) => roles.map(|roles| {
            roles
                .into_iter()
                .filter_map(|role| match role {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect()
        }),
        Err(err) => {
            log::warn!("Ignoring unreadable roles claim: {}", err);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    MissingToken,
    MissingRoles,
    NotAdmin,
}

/// Passes only for a session holding a token and the administrator role.
pub fn require_admin(provider: &dyn SessionProvider) -> Result<Session, GuardRejection> {
    let token = provider.token().ok_or(GuardRejection::MissingToken)?;
    let roles = provider.roles().ok_or(GuardRejection::MissingRoles)?;
    let session = Session { token, roles };
    if session.has_role(ADMIN_ROLE) {
        Ok(session)
    } else {
        Err(GuardRejection::NotAdmin)
    }
}

#[derive(Clone)]
pub struct SessionContext(Rc<dyn SessionProvider>);

impl SessionContext {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn SessionProvider {
        self.0.as_ref()
    }
}

pub fn provide_session(provider: impl SessionProvider + 'static) {
    provide_context(SessionContext::new(provider));
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(LocalStorageSession))
}
