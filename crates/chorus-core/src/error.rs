use chorus_models::MalformedPayload;
use thiserror::Error;

use crate::record::EntityKey;

/// Everything that can go wrong while mapping a payload or resolving a
/// relationship. Nothing in this crate retries; each variant is handed to
/// the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedPayload(#[from] MalformedPayload),
    #[error("{key} not found")]
    NotFound { key: EntityKey },
    #[error("transport error: {message}")]
    Transport {
        /// HTTP status, when the failure came with a response.
        status: Option<u16>,
        message: String,
    },
    #[error("not authorized to access {key}")]
    Unauthorized { key: EntityKey },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn transport_status(status: u16, message: impl Into<String>) -> Self {
        Error::Transport {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Whether issuing the same request again could succeed. Only transport
    /// failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
