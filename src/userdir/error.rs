use crate::state::RequestKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserdirError {
    #[error("Transport error: {0}")]
    Transport(#[from] curl::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),

    #[error("A {0} request is already in flight")]
    Busy(RequestKind),
}

pub type Result<T> = std::result::Result<T, UserdirError>;
