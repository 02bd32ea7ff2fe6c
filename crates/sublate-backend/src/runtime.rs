//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use sublate_bridge::{MessageFromBackend, MessageToBackend};
use sublate_subtitle::{GenerationCounter, SessionState, Translator};
use sublate_video::{DetachedSurface, PlaybackSurface};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::{DisplayState, State};
use crate::translate::HttpTranslator;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");

    let translator: Arc<dyn Translator> = Arc::new(
        HttpTranslator::new(reqwest::Client::new(), &config.translation_config)
            .expect("failed to build the translation client"),
    );
    // No real player or recognizer is attached in the headless build: the
    // surface resolves loads immediately and subtitles run in phrase mode.
    let surface: Arc<dyn PlaybackSurface> = Arc::new(DetachedSurface::new());

    let state = Arc::new(RwLock::new(State {
        display: DisplayState::new(config.subtitle_config.max_lines),
        config,
        translator,
        surface,
        recognizer: None,
        session: SessionState::default(),
    }));

    let context = Arc::new(AppContext {
        state,
        tx,
        generations: GenerationCounter::new(),
    });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
