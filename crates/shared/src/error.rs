use thiserror::Error;

/// The only error kind the catalog core produces: the remote source could
/// not deliver a usable payload. Opaque beyond logging.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("catalog request failed: {message}")]
    Transport { message: String },
    #[error("catalog response could not be decoded: {message}")]
    Decode { message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
