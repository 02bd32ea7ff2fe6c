use std::sync::Arc;

use sublate_subtitle::{DedupGate, PhraseSource, SamplePhrases, SessionState, SubtitleBuffer};
use sublate_video::PlaybackSurface;

/// Mutable state of the subtitle display surface.
///
/// Owned exclusively by the subtitle controller: only its tasks mutate the
/// buffer, the dedup gate, or the recognition timestamps, always through the
/// shared state lock.
pub struct DisplayState {
    /// Rolling window of the most recent translated lines.
    pub buffer: SubtitleBuffer,
    /// Suppresses re-translation of a repeated source line.
    pub dedup: DedupGate,
    /// Source of built-in sample phrases for phrase mode and fallbacks.
    pub phrases: Box<dyn PhraseSource>,
    /// When the recognizer last produced a result in the current session.
    pub last_recognition_at: Option<tokio::time::Instant>,
}

impl DisplayState {
    /// Creates a fresh display state with a window of `max_lines` lines.
    pub fn new(max_lines: usize) -> Self {
        Self {
            buffer: SubtitleBuffer::new(max_lines),
            dedup: DedupGate::new(),
            phrases: Box::new(SamplePhrases::new()),
            last_recognition_at: None,
        }
    }
}

/// The core application state that holds configuration, service clients, and
/// other shared resources.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
pub struct State {
    /// The loaded application configuration.
    pub config: sublate_bridge::config::Config,
    /// Client for the external translation service.
    pub translator: Arc<dyn sublate_subtitle::Translator>,
    /// The surface hosting the embedded video player.
    pub surface: Arc<dyn PlaybackSurface>,
    /// Speech recognition service, if one is available on this host.
    pub recognizer: Option<Arc<dyn sublate_subtitle::SpeechRecognizer>>,
    /// Lifecycle of the current playback/subtitle session.
    pub session: SessionState,
    /// State of the subtitle display surface.
    pub display: DisplayState,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
