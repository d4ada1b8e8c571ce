use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    /// The HTTP exchange did not complete (connect, DNS, timeout, body read).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with status >= 400 and a readable `{"error": ..}` body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A body was received but did not match the expected shape.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TranslateError {
    /// HTTP status attached to the failure, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
