use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EurekaError {
    #[error("research API request failed: {0}")]
    Http(String),

    #[error("research API request timed out")]
    Timeout,

    #[error("research API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("research API returned a non-JSON body: {0}")]
    Decode(String),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("research API returned an empty {0} list")]
    EmptyList(&'static str),

    #[error("invalid API base address: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("invalid vote direction: {0} (expected up or down)")]
    InvalidVoteDirection(String),
}

impl EurekaError {
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            EurekaError::InvalidBaseUrl(_)
                | EurekaError::ConfigRead(_)
                | EurekaError::ConfigParse(_)
        )
    }
}
