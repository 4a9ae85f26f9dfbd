use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Entity not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("API error: {0}")]
    Api(String),

    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
