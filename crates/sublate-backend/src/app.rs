//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use sublate_bridge::{MessageFromBackend, MessageToBackend};
use sublate_subtitle::GenerationCounter;
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
    /// Session generation counter for stale-callback rejection.
    pub generations: GenerationCounter,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::UpdateApiKeyRequest(api_key) => {
                services::config_service::handle_api_key_update(self.clone(), api_key).await;
            }
            MessageToBackend::PlayRequest(link) => {
                services::playback_service::handle_play_request(self.clone(), link).await;
            }
            MessageToBackend::StopRequest => {
                services::playback_service::handle_stop_request(self.clone()).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send an inline field validation error to the frontend bridge.
    pub async fn send_field_error(
        &self,
        field: sublate_bridge::notification::InputField,
        message: impl Into<String>,
    ) {
        self.send(MessageFromBackend::FieldErrorResponse {
            field,
            message: message.into(),
        })
        .await;
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: sublate_bridge::notification::NotificationType,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            sublate_bridge::notification::NotificationMessage {
                notification_type,
                message: content.into(),
            },
        ))
        .await;
    }
}
