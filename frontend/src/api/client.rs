use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config, utils::storage as storage_utils};

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        with_credentials(self.client.post(url))
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        with_credentials(self.client.get(url))
    }

    /// Bearer header for the stored session token, empty when none is stored.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = storage_utils::local_storage()
            .ok()
            .and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten());
        if let Some(token) = token {
            match format!("Bearer {}", token).parse() {
                Ok(value) => {
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored access token is not a valid header value"),
            }
        }
        headers
    }

    pub(crate) fn clear_stored_session() {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().to_string();
        log::debug!("{} {}", method, url);
        self.execute(request).await.map_err(|err| {
            log::warn!("{} {} failed: {}", method, url, err);
            err
        })
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn execute(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        match mock_for(request.url().as_str()) {
            Some(responder) => responder
                .respond(&request)
                .and_then(MockResponse::into_response),
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e))),
        }
    }

    pub(crate) fn map_error_payload_parse_failure(err: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error: {}", err))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(map_error_response(response).await)
    }
}

/// Like [`map_typed_response`] but tolerates an empty success body.
pub(crate) async fn map_message_response(response: Response) -> Result<MessageResponse, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(map_error_response(response).await);
    }
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
    if body.trim().is_empty() {
        return Ok(MessageResponse::default());
    }
    serde_json::from_str(&body)
        .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
}

async fn map_error_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return ApiClient::map_error_payload_parse_failure(err),
    };
    // Non-JSON error bodies (proxies, HTML error pages) carry no user message.
    let payload = serde_json::from_str::<MessageResponse>(&body).unwrap_or_default();
    ApiError::server(status, payload)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_hook::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_hook::mock_for;
