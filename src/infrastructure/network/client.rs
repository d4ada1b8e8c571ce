use crate::domain::error::TranslateError;
use crate::domain::model::{ApiErrorBody, Language, Translation, TranslationRequest};
use crate::domain::traits::TranslationApi;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// LibreTranslate client
///
/// Performs `GET /languages` and `POST /translate` against one base URL.
/// No retries and no caching; every call is independent.
#[derive(Clone)]
pub struct LibreClient {
    client: Client,
    base_url: String,
}

impl LibreClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, TranslateError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| TranslateError::Config(format!("Invalid base_url '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TranslateError::Config(format!(
                "Unsupported base_url scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, TranslateError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed before a response arrived: {}", e);
            TranslateError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(status, bytes = body.len(), "Received response");

        classify_response(status, &body).inspect_err(|e| {
            tracing::warn!(status, "Request failed: {}", e);
        })
    }
}

/// Turn a status code and raw body into the expected payload or an error.
///
/// Status >= 400 must carry `{"error": ".."}`; anything else there is a
/// decode error. Lower statuses must decode as `T`.
pub fn classify_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, TranslateError> {
    if status >= 400 {
        return match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(api_error) => Err(TranslateError::Api {
                status,
                message: api_error.error,
            }),
            Err(source) => Err(TranslateError::Decode { status, source }),
        };
    }

    serde_json::from_slice::<T>(body).map_err(|source| TranslateError::Decode { status, source })
}

/// Count (and log) entries with an empty or repeated id.
///
/// Ids should be non-empty and unique; a list that breaks this is still
/// returned as the server sent it.
pub fn invalid_language_ids(languages: &[Language]) -> usize {
    let mut seen = HashSet::new();
    let mut invalid = 0;
    for language in languages {
        if language.id.is_empty() || !seen.insert(language.id.as_str()) {
            tracing::warn!("Server returned invalid language id {:?} ({})", language.id, language.name);
            invalid += 1;
        }
    }
    invalid
}

#[async_trait]
impl TranslationApi for LibreClient {
    async fn list_languages(&self) -> Result<Vec<Language>, TranslateError> {
        let url = self.url("/languages");
        tracing::debug!("GET {}", url);

        let languages: Vec<Language> = self.execute(self.client.get(url)).await?;
        invalid_language_ids(&languages);
        Ok(languages)
    }

    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<Translation, TranslateError> {
        // Encode before touching the network; a failure here sends nothing
        let payload = serde_json::to_vec(&TranslationRequest::new(text, source, target))
            .map_err(TranslateError::Serialization)?;

        let url = self.url("/translate");
        tracing::debug!("POST {} ({} -> {})", url, source.id, target.id);

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload);

        self.execute(request).await
    }
}
