use async_trait::async_trait;

/// Fixed text rendered when a translation request fails, so a broken
/// translator never silently drops an update.
pub const TRANSLATION_ERROR_PLACEHOLDER: &str = "Ошибка перевода";

/// Errors reported by a translation service.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// The request could not be sent or the service did not answer.
    #[error("translation request failed: {0}")]
    RequestFailed(String),
    /// The service answered with something that is not a translation.
    #[error("translator returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Contract for the external translation service.
///
/// A translator takes one source-language line and resolves to its
/// translated form. Requests may be slow or fail; callers recover locally
/// (see [`TRANSLATION_ERROR_PLACEHOLDER`]) and never treat a failure as
/// fatal to the session.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}
