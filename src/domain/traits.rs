use crate::domain::error::TranslateError;
use crate::domain::model::{Language, Translation};
use async_trait::async_trait;

/// Operations a translation backend offers to the session.
///
/// `LibreClient` is the production implementation; the session only sees
/// this trait so a stub can stand in for it.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Fetch the languages supported by the server, in server order.
    async fn list_languages(&self) -> Result<Vec<Language>, TranslateError>;

    /// Translate `text` from `source` into `target`.
    async fn translate(
        &self,
        text: &str,
        source: &Language,
        target: &Language,
    ) -> Result<Translation, TranslateError>;
}
