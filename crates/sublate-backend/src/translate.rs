//! HTTP adapter for the external translation service.
//!
//! Speaks a minimal JSON request/response dialect (`q`/`source`/`target` in,
//! `translatedText` out) against the endpoint from the translation config.

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use sublate_bridge::config::TranslationConfig;
use sublate_subtitle::{TranslationError, Translator};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Translation client backed by an HTTP translation endpoint.
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: Url,
    source_language: String,
    target_language: String,
}

impl HttpTranslator {
    /// Builds a translator from the shared HTTP client and the translation
    /// section of the application config.
    pub fn new(
        client: reqwest::Client,
        config: &TranslationConfig,
    ) -> Result<Self, TranslationError> {
        let endpoint = Url::from_str(&config.endpoint)
            .map_err(|e| TranslationError::RequestFailed(format!("invalid endpoint: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let request = TranslateRequest {
            q: text,
            source: &self.source_language,
            target: &self.target_language,
            format: "text",
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.without_url().to_string()))?
            .error_for_status()
            .map_err(|e| TranslationError::RequestFailed(e.without_url().to_string()))?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.without_url().to_string()))?;

        if body.translated_text.is_empty() {
            return Err(TranslationError::InvalidResponse(
                "empty translation".to_string(),
            ));
        }
        Ok(body.translated_text)
    }
}
