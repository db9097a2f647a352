use crate::api::{ApiClient, ApiError, UserId, UserRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl Default for UsersRepository {
    fn default() -> Self {
        Self::new(ApiClient::new())
    }
}

impl UsersRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        self.client.admin_list_users(token).await
    }

    pub async fn delete_user(&self, token: &str, user_id: UserId) -> Result<(), ApiError> {
        self.client.admin_delete_user(token, user_id).await
    }
}
