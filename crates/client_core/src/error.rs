use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    Config,
    Transport,
    Status,
    Decode,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid events base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("events server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn kind(&self) -> ClientErrorKind {
        match self {
            Self::InvalidBaseUrl { .. } => ClientErrorKind::Config,
            Self::Transport(_) => ClientErrorKind::Transport,
            Self::Status { .. } => ClientErrorKind::Status,
            Self::Decode(_) => ClientErrorKind::Decode,
        }
    }
}
