use crate::application::session::TranslationSession;
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::LibreClient;
use crate::infrastructure::network::http::create_client;
use std::sync::Arc;

/// Process-wide handles, built once at start and passed down explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<LibreClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let http_client = create_client(&config)?;
        let client = LibreClient::new(http_client, &config.base_url)?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
        })
    }

    /// A fresh session backed by the shared client.
    pub fn session(&self) -> TranslationSession {
        TranslationSession::new(self.client.clone())
    }
}
