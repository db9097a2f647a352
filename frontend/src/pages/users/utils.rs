use crate::{
    api::{UserId, UserRecord},
    router::{HOME_ROUTE, USERS_ROUTE},
    state::session::GuardRejection,
};

pub const DELETE_SUCCESS_MESSAGE: &str = "Usuário excluído com sucesso.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsersError {
    #[error("Token não encontrado. Faça login novamente.")]
    AuthMissing,
    #[error("Token não encontrado. Faça login novamente.")]
    AuthMissingOnDelete,
    #[error("Erro ao buscar usuários.")]
    FetchFailed,
    #[error("Erro ao excluir usuário.")]
    DeleteFailed,
}

impl UsersError {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            UsersError::AuthMissing => Some(HOME_ROUTE),
            UsersError::AuthMissingOnDelete => Some(USERS_ROUTE),
            UsersError::FetchFailed | UsersError::DeleteFailed => None,
        }
    }
}

impl From<GuardRejection> for UsersError {
    fn from(_: GuardRejection) -> Self {
        UsersError::AuthMissing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub users: Vec<UserRecord>,
}

impl Default for UsersViewState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            users: Vec::new(),
        }
    }
}

impl UsersViewState {
    /// Applies a finished list request. `loading` is cleared on every path;
    /// a failure keeps whatever `users` already held.
    pub fn finish_loading(&mut self, outcome: Result<Vec<UserRecord>, UsersError>) {
        match outcome {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    /// Drops every entry with `id`, keeping the order of the rest.
    pub fn remove_user(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.users.len() != before
    }
}
