use reqwest::{header, Client, Request, RequestBuilder, Response};
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn status_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        ApiError::from_status(status, body)
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &Request) -> Option<Result<Response, ApiError>> {
    let responder = mock_hook::responder_for(request)?;
    Some(
        responder
            .respond(request)
            .and_then(MockResponse::into_response),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hook::{register_mock, MockResponse, TestResponder};
