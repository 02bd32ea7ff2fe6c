//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the user-facing
//! frontend with an asynchronous backend responsible for video playback
//! sessions, subtitle generation, translation, and configuration.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., play a link, stop the session,
//!   update the API key, request config).
//! - The backend pushes events (e.g., subtitle text updates, playback
//!   lifecycle responses, notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous events (e.g., fresh subtitle lines, notifications).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// The playback surface accepted the link and finished loading the
    /// embedded player page.
    PlaybackStartedResponse {
        /// Extracted video identifier for the running session.
        video_id: String,
    },
    /// The active playback session (if any) has been torn down.
    PlaybackStoppedResponse,
    /// A user input was rejected by validation. Rendered inline at the
    /// offending field, not as a transient notification.
    FieldErrorResponse {
        /// The field the rejected input came from.
        field: notification::InputField,
        /// User-facing rejection reason.
        message: String,
    },
    /// The rendered subtitle window changed. The payload is the full text of
    /// the display surface (recent lines joined by newlines); an empty string
    /// clears the surface.
    SubtitleUpdate { text: String },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to store a new YouTube API key in the configuration.
    UpdateApiKeyRequest(String),
    /// Request to start playing the given video link with live subtitles.
    PlayRequest(String),
    /// Request to stop the current playback session and subtitle generation.
    StopRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
