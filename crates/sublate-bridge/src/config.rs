use serde::{Deserialize, Serialize};

/// Configuration for the subtitle display window. This struct controls how
/// many lines are kept on screen and the cadence of subtitle generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubtitleConfig {
    /// Maximum number of recent subtitle lines shown at once. Older lines are
    /// evicted as new ones arrive.
    pub max_lines: usize,
    /// Interval in seconds between subtitle lines when the fixed phrase list
    /// drives the display (no speech recognition available).
    pub tick_seconds: u64,
    /// How long in seconds the recognizer may stay quiet before a fallback
    /// phrase is injected so the display never stalls.
    pub quiet_period_seconds: u64,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            max_lines: 3,
            tick_seconds: 3,
            quiet_period_seconds: 5,
        }
    }
}

/// Configuration for the external translation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// HTTP endpoint of the translation service.
    pub endpoint: String,
    /// Source language code of subtitle lines fed into the translator.
    pub source_language: String,
    /// Target language code of the rendered subtitles.
    pub target_language: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/translate".to_string(),
            source_language: "en".to_string(),
            target_language: "ru".to_string(),
        }
    }
}

/// Configuration for the embedded video playback surface.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// YouTube API key appended to embed URLs, if the user stored one.
    pub api_key: Option<String>,
    /// Interface language passed to the embedded player.
    pub interface_language: String,
    /// Whether playback should begin as soon as the player page loads.
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            interface_language: "ru".to_string(),
            autoplay: true,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Whether to source subtitle lines from speech recognition when a
    /// recognizer is available. When disabled (or when no recognizer exists)
    /// the fixed phrase list drives the display.
    pub enable_recognition: bool,
    /// Configuration for the subtitle display window.
    pub subtitle_config: SubtitleConfig,
    /// Configuration for the translation service.
    pub translation_config: TranslationConfig,
    /// Configuration for the playback surface.
    pub playback_config: PlaybackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_recognition: true,
            subtitle_config: SubtitleConfig::default(),
            translation_config: TranslationConfig::default(),
            playback_config: PlaybackConfig::default(),
        }
    }
}
