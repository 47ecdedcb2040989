// Типы ошибок

use thiserror::Error;

/// Every way a single sidecar invocation can fail.
///
/// `Display` is what ends up in the `error` field of the response, so the
/// wording of the first three variants is part of the output contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SidecarError {
    #[error("failed to parse request: {0}")]
    Parse(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("{0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SidecarError {
    fn from(error: serde_json::Error) -> Self {
        SidecarError::Parse(error.to_string())
    }
}

impl From<base64::DecodeError> for SidecarError {
    fn from(error: base64::DecodeError) -> Self {
        SidecarError::Decode(error.to_string())
    }
}

impl From<std::io::Error> for SidecarError {
    fn from(error: std::io::Error) -> Self {
        SidecarError::Io(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SidecarError>;
