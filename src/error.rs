use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable environment configuration. The message is shown
    /// to the user as-is.
    #[error("{0}")]
    Configuration(String),

    #[error("{reason}\n{usage}", usage = crate::cli::USAGE)]
    Usage { reason: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("search API returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },
}

impl Error {
    pub fn usage(reason: impl Into<String>) -> Self {
        Error::Usage {
            reason: reason.into(),
        }
    }
}
