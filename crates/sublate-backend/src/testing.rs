//! Shared test doubles for the backend service tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sublate_bridge::MessageFromBackend;
use sublate_bridge::config::Config;
use sublate_subtitle::{
    GenerationCounter, PhraseSource, RecognitionError, RecognitionEvent, SessionState,
    SpeechRecognizer, TranslationError, Translator,
};
use sublate_video::DetachedSurface;
use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::app::AppContext;
use crate::services::AppContextHandle;
use crate::state::{DisplayState, State};

/// Translator that prefixes the input with `ru:` and counts its calls.
#[derive(Default)]
pub(crate) struct CountingTranslator {
    calls: AtomicUsize,
}

impl CountingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("ru:{text}"))
    }
}

/// Translator whose requests never resolve.
pub(crate) struct StalledTranslator;

#[async_trait]
impl Translator for StalledTranslator {
    async fn translate(&self, _text: &str) -> Result<String, TranslationError> {
        std::future::pending().await
    }
}

/// Translator whose every request fails.
pub(crate) struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str) -> Result<String, TranslationError> {
        Err(TranslationError::RequestFailed(
            "translator offline".to_string(),
        ))
    }
}

/// Phrase source that always returns the same phrase, for deterministic
/// fallback assertions.
pub(crate) struct FixedPhrases(&'static str);

impl FixedPhrases {
    pub fn new(phrase: &'static str) -> Self {
        Self(phrase)
    }
}

impl PhraseSource for FixedPhrases {
    fn next_phrase(&mut self) -> String {
        self.0.to_string()
    }

    fn random_phrase(&self) -> String {
        self.0.to_string()
    }
}

/// Recognizer that plays back pre-scripted listening cycles.
///
/// Each call to `start_listening` consumes the next script; its events are
/// buffered into the returned channel and the channel closes afterwards
/// (terminal cycle). Once the scripts run out, cycles stay open and silent.
pub(crate) struct ScriptedRecognizer {
    scripts: Mutex<VecDeque<Vec<RecognitionEvent>>>,
    idle_senders: Mutex<Vec<Sender<RecognitionEvent>>>,
}

impl ScriptedRecognizer {
    pub fn new(scripts: Vec<Vec<RecognitionEvent>>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            idle_senders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn start_listening(&self) -> Result<Receiver<RecognitionEvent>, RecognitionError> {
        let script = self
            .scripts
            .lock()
            .expect("scripts lock poisoned")
            .pop_front();
        match script {
            Some(events) => {
                let (tx, rx) = mpsc::channel(events.len().max(1));
                for event in events {
                    tx.try_send(event).expect("script channel overflow");
                }
                Ok(rx)
            }
            None => {
                let (tx, rx) = mpsc::channel(1);
                // Keep the sender alive so the cycle never terminates.
                self.idle_senders
                    .lock()
                    .expect("idle senders lock poisoned")
                    .push(tx);
                Ok(rx)
            }
        }
    }
}

/// Builds an application context with test doubles and returns it together
/// with the receiving end of the frontend bridge.
pub(crate) fn test_context(
    translator: Arc<dyn Translator>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
) -> (AppContextHandle, Receiver<MessageFromBackend>) {
    let (tx, rx) = mpsc::channel(64);
    let config = Config::default();
    let state = Arc::new(RwLock::new(State {
        display: DisplayState::new(config.subtitle_config.max_lines),
        config,
        translator,
        surface: Arc::new(DetachedSurface::new()),
        recognizer,
        session: SessionState::default(),
    }));
    let context = Arc::new(AppContext {
        state,
        tx,
        generations: GenerationCounter::new(),
    });
    (context, rx)
}
