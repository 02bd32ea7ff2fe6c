use async_trait::async_trait;
use tokio::sync::mpsc::Receiver;

/// Events emitted during one listening cycle of a speech recognizer.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// A finalized utterance. Terminal for the listening cycle.
    Result(String),
    /// An intermediate hypothesis that may still be refined.
    Partial(String),
    /// The cycle ended with an error. Terminal for the listening cycle.
    Error(RecognitionError),
}

/// Errors a speech recognizer can end a listening cycle with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("audio recording error")]
    Audio,
    #[error("client side error")]
    Client,
    #[error("insufficient permissions")]
    Permissions,
    #[error("network error")]
    Network,
    #[error("network timeout")]
    NetworkTimeout,
    #[error("no match found")]
    NoMatch,
    #[error("recognition service busy")]
    Busy,
    #[error("server error")]
    Server,
    #[error("no speech input")]
    SpeechTimeout,
}

/// Contract for the external speech recognition service.
///
/// A recognizer runs in listening cycles: [`start_listening`] opens a cycle
/// and returns a channel of [`RecognitionEvent`]s for it. The channel closes
/// after a terminal event (a final result or an error); while the session is
/// still generating subtitles, the controller opens the next cycle.
///
/// [`start_listening`]: SpeechRecognizer::start_listening
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn start_listening(&self) -> Result<Receiver<RecognitionEvent>, RecognitionError>;
}
