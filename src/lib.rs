//! LibreTranslate client and translation session.
//!
//! [`LibreClient`] talks to the server, [`TranslationSession`] holds the
//! state a front-end renders.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::session::{SessionState, TranslationSession, DEFAULT_SOURCE_LANGUAGE};
pub use domain::error::TranslateError;
pub use domain::model::{Language, Translation};
pub use domain::traits::TranslationApi;
pub use infrastructure::network::client::LibreClient;
pub use state::AppState;
