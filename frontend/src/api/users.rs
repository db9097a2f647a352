use reqwest::StatusCode;

use super::{
    client::ApiClient,
    types::{ApiError, UserId, UserRecord},
};

impl ApiClient {
    /// `GET /api/admin`: every user, in server order.
    pub async fn admin_list_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client().get(format!("{}/api/admin", base_url)),
            token,
        );
        let response = self.send(request).await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// `DELETE /api/admin/delete/{id}`. Only a 200 counts as deleted.
    pub async fn admin_delete_user(&self, token: &str, user_id: UserId) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = Self::authorized(
            self.http_client()
                .delete(format!("{}/api/admin/delete/{}", base_url, user_id)),
            token,
        );
        let response = self.send(request).await?;

        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }
}
