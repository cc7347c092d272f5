use thiserror::Error;

#[derive(Error, Debug)]
pub enum KonnectorError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Invoice fetch failed: {message}")]
    Fetch { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl KonnectorError {
    pub fn authentication(message: impl Into<String>) -> Self {
        KonnectorError::Authentication {
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        KonnectorError::Fetch {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KonnectorError>;
