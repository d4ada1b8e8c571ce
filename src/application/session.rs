use crate::domain::model::Language;
use crate::domain::traits::TranslationApi;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Source language for every translation request.
pub static DEFAULT_SOURCE_LANGUAGE: Lazy<Language> = Lazy::new(|| Language::new("en", "English"));

/// Snapshot of everything the front-end renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub languages: Vec<Language>,
    pub translated_text: String,
    pub is_loading: bool,
    pub error_message: String,
    pub has_error: bool,
}

/// Mediates between the front-end and a [`TranslationApi`].
///
/// State lives in a watch channel, so every mutation wakes subscribers.
/// Overlapping `translate` calls are not prevented: whichever completes
/// last owns `translated_text`.
pub struct TranslationSession {
    api: Arc<dyn TranslationApi>,
    state: watch::Sender<SessionState>,
}

impl TranslationSession {
    pub fn new(api: Arc<dyn TranslationApi>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { api, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn find_language(&self, id: &str) -> Option<Language> {
        self.state
            .borrow()
            .languages
            .iter()
            .find(|l| l.id.eq_ignore_ascii_case(id))
            .cloned()
    }

    /// Session start: fetch the language list once.
    pub async fn initialize(&self) {
        self.refresh_languages().await;
    }

    pub async fn refresh_languages(&self) {
        self.state.send_modify(|s| s.is_loading = true);

        let result = self.api.list_languages().await;

        self.state.send_modify(|s| {
            s.is_loading = false;
            match result {
                Ok(languages) => {
                    tracing::info!("Loaded {} languages", languages.len());
                    s.languages = languages;
                }
                Err(e) => raise(s, e.to_string()),
            }
        });
    }

    pub async fn translate(&self, text: &str, target: &Language) {
        self.state.send_modify(|s| s.translated_text.clear());
        if text.is_empty() {
            return;
        }

        self.state.send_modify(|s| s.is_loading = true);

        let result = self
            .api
            .translate(text, &DEFAULT_SOURCE_LANGUAGE, target)
            .await;

        self.state.send_modify(|s| {
            s.is_loading = false;
            match result {
                Ok(translation) => s.translated_text = translation.translated_text,
                Err(e) => raise(s, e.to_string()),
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.state.send_modify(|s| {
            s.error_message.clear();
            s.has_error = false;
        });
    }
}

// Only dismiss_error clears the flag again; later successes leave it set.
fn raise(state: &mut SessionState, message: String) {
    tracing::debug!("Surfacing error: {}", message);
    state.error_message = message;
    state.has_error = true;
}
