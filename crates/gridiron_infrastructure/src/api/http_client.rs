use std::fmt;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;

use gridiron_interface::errors::AppError;

/// Failure of an upstream call, before it is mapped to the domain errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Status { status: u16, message: String },
    Transport { msg: String },
    Decode { msg: String },
}

pub fn status_message(status: u16) -> String {
    match status {
        400 => "Bad request. Check the parameters".to_string(),
        401 => "Invalid API key or endpoint not available on this plan".to_string(),
        404 => "Resource not found".to_string(),
        429 => "Rate limit exceeded. Wait a moment".to_string(),
        500 => "Internal server error. Try again later".to_string(),
        503 => "Service temporarily unavailable".to_string(),
        _ => format!("HTTP error: {}", status),
    }
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        ApiError::Status {
            status,
            message: status_message(status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Status { status, message } => write!(f, "HTTP {}: '{}'", status, message),
            ApiError::Transport { msg } => write!(f, "Transport Error: '{}'", msg),
            ApiError::Decode { msg } => write!(f, "Decode Error: '{}'", msg),
        }
    }
}

// Repositories turn 404 into `None` before reaching this conversion. Anything
// else that gets here is a real failure.
impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Status { status, message } => match status {
                401 => AppError::Unauthorized { msg: message },
                404 => AppError::NotFound {
                    resource: "Resource".to_string(),
                    identifier: "unknown".to_string(),
                },
                429 => AppError::RateLimit { msg: message },
                400 => AppError::ValidationError {
                    msg: message,
                    field: None,
                },
                _ => AppError::ServerError { msg: message },
            },
            ApiError::Transport { msg } | ApiError::Decode { msg } => {
                AppError::UnknownError { msg }
            }
        }
    }
}

/// Query string pairs. Absent values are never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: ToString>(mut self, key: &str, value: V) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// `key[0]=a&key[1]=b`. The upstream ignores repeated plain keys and
    /// comma joined values, so this is the only accepted array format.
    pub fn with_indexed<V: ToString>(mut self, key: &str, values: Option<&[V]>) -> Self {
        for (index, value) in values.unwrap_or_default().iter().enumerate() {
            self.pairs.push((format!("{key}[{index}]"), value.to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get_url(&url, params).await
    }

    /// GET an absolute url, i.g., a `$ref` handed out by the upstream.
    pub async fn get_url<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<T, ApiError> {
        debug!(url, params = ?params.pairs(), "GET");

        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, api_key);
        }

        if !params.is_empty() {
            request = request.query(params.pairs());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport { msg: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "upstream answered with an error");
            return Err(ApiError::from_status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode { msg: e.to_string() })
    }
}
