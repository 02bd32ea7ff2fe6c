use std::sync::atomic::{AtomicU64, Ordering};

/// Lifecycle of a playback/subtitle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No video has been played yet.
    #[default]
    Idle,
    /// A video is playing and subtitles come from the fixed phrase list.
    PlayingNoRecognition,
    /// A video is playing and subtitles come from speech recognition, with
    /// phrase-list fallback during quiet periods.
    PlayingWithRecognition,
    /// A previous session was torn down.
    Stopped,
}

impl SessionState {
    /// Whether subtitle generation is currently active.
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            SessionState::PlayingNoRecognition | SessionState::PlayingWithRecognition
        )
    }
}

/// Monotonically increasing session marker.
///
/// Every subtitle session takes a fresh token from the counter; timers and
/// async completions carry their token and compare it against the current
/// value before touching shared state. Platform callbacks cannot always be
/// aborted, so a stale token is how late completions from a superseded
/// session get discarded.
#[derive(Debug, Default)]
pub struct GenerationCounter(AtomicU64);

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates all outstanding tokens and returns a fresh one.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The token of the current session.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Whether `token` still belongs to the current session.
    pub fn is_current(&self, token: u64) -> bool {
        self.current() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_older_tokens() {
        let counter = GenerationCounter::new();
        let first = counter.advance();
        assert!(counter.is_current(first));

        let second = counter.advance();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn playing_states_report_playing() {
        assert!(SessionState::PlayingNoRecognition.is_playing());
        assert!(SessionState::PlayingWithRecognition.is_playing());
        assert!(!SessionState::Idle.is_playing());
        assert!(!SessionState::Stopped.is_playing());
    }
}
