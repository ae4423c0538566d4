use std::time::Duration;

use biblioteca_core::api_error::{classify, ApiErrorBody, ErrorKind};

use crate::prelude::*;

/// Default API base, matching the development server.
pub const DEFAULT_API_URL: &str = "http://localhost:5004/api";

/// Client-wide request timeout (the only timeout any request carries).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to the
    /// default development URL.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BIBLIOTECA_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration.
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    pub fn resolve(global: &crate::Global) -> Self {
        Self::from_env().with_overrides(global.api_url.clone())
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// HTTP client with a JSON Content-Type header and the client-wide timeout.
pub fn create_client() -> Result<reqwest::Client, Error> {
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Generic(format!("No se pudo crear el cliente HTTP: {e}")))
}

/// Decode a non-2xx response into a classified [`Error`].
///
/// Reads the optional `{ message, code }` body the API attaches to error
/// responses; an unreadable body falls back to the generic message.
pub async fn decode_error(response: reqwest::Response) -> Error {
    let body: ApiErrorBody = response.json().await.unwrap_or_default();

    match classify(&body) {
        ErrorKind::OutOfStock(message) => Error::OutOfStock(message),
        ErrorKind::Other(message) => Error::Api(message),
    }
}

/// GET a JSON resource, classifying any failure.
pub async fn get_json<T>(client: &reqwest::Client, url: &str) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| Error::Generic(format!("Respuesta inválida de la API: {e}")))
}
