use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::warn;

use crate::config::ResolvedConfig;
use crate::error::EurekaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMethod::Get => write!(f, "GET"),
            ApiMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request relative to the configured base address.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, EurekaError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    dev_mode: bool,
}

impl HttpTransport {
    pub fn new(config: &ResolvedConfig) -> Result<Self, EurekaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("eureka-client/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| EurekaError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| EurekaError::Http(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            dev_mode: config.dev_mode,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Value, EurekaError> {
        let url = self.url_for(&request.path);
        let builder = match request.method {
            ApiMethod::Get => self.client.get(&url),
            ApiMethod::Post => self.client.post(&url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let response = handle_status(response).await?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|err| EurekaError::Decode(err.to_string()))
    }

    /// Logs failures in development mode and hands the result back untouched.
    fn observe(
        &self,
        request: &ApiRequest,
        result: Result<Value, EurekaError>,
    ) -> Result<Value, EurekaError> {
        if !self.dev_mode {
            return result;
        }
        if let Err(err) = &result {
            warn!(
                method = %request.method,
                path = %request.path,
                error = %err,
                "[Eureka API] request failed"
            );
        }
        result
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, EurekaError> {
        let result = self.execute(&request).await;
        self.observe(&request, result)
    }
}

async fn handle_status(response: reqwest::Response) -> Result<reqwest::Response, EurekaError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "research API request failed".to_string());
    Err(EurekaError::Status { status, message })
}

fn map_reqwest_error(err: reqwest::Error) -> EurekaError {
    if err.is_timeout() {
        EurekaError::Timeout
    } else {
        EurekaError::Http(err.to_string())
    }
}
