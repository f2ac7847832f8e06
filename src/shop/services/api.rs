//! # API Client
//!
//! Thin JSON-over-HTTP client. Successful responses are decoded into the
//! requested type; anything outside 2xx becomes [`ApiError::Status`] carrying
//! the server's `error` message when it sent one.

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Methods that carry a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostMethod {
    Post,
    Put,
    Patch,
    Delete,
}

impl From<PostMethod> for Method {
    fn from(method: PostMethod) -> Self {
        match method {
            PostMethod::Post => Method::POST,
            PostMethod::Put => Method::PUT,
            PostMethod::Patch => Method::PATCH,
            PostMethod::Delete => Method::DELETE,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        tracing::debug!("ApiClient created for '{}'", base_url);
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/product`
    pub fn url(&self, uri: &str) -> String {
        if uri.starts_with('/') {
            format!("{}{}", self.base_url, uri)
        } else {
            format!("{}/{}", self.base_url, uri)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, uri: &str) -> Result<T, ApiError> {
        let url = self.url(uri);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    pub async fn post<B, T>(&self, uri: &str, body: &B, method: PostMethod) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(uri);
        let method = Method::from(method);
        tracing::debug!("{} {}", method, url);
        let response = self.client.request(method, &url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        let message = error_message(&text)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        tracing::debug!("Request rejected with {}: {}", status, message);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull the `error` field out of a JSON error body
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_should_join_base_and_path() {
        let client = ApiClient::new("http://localhost:3000/api/weblarek/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api/weblarek");
        assert_eq!(
            client.url("/product"),
            "http://localhost:3000/api/weblarek/product"
        );
        assert_eq!(
            client.url("order"),
            "http://localhost:3000/api/weblarek/order"
        );
    }

    #[test]
    fn error_message_should_read_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Неверная сумма заказа"}"#).as_deref(),
            Some("Неверная сумма заказа")
        );
        assert_eq!(error_message(r#"{"error":""}"#), None);
        assert_eq!(error_message("<html>oops</html>"), None);
        assert_eq!(error_message(r#"{"message":"x"}"#), None);
    }

    #[test]
    fn post_methods_should_map_to_http_methods() {
        assert_eq!(Method::from(PostMethod::Post), Method::POST);
        assert_eq!(Method::from(PostMethod::Delete), Method::DELETE);
    }

    #[test]
    fn status_error_should_display_message_and_code() {
        let error = ApiError::Status {
            status: 400,
            message: "Bad order".to_string(),
        };
        assert_eq!(error.to_string(), "Bad order (HTTP 400)");
    }
}
