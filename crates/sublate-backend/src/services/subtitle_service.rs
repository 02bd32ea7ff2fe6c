//! The subtitle display controller.
//!
//! Subtitle generation runs as a small set of tasks tied to a session
//! generation token: a phrase ticker (when no recognizer is available), a
//! recognition loop with automatic listen restarts, and a quiet-period
//! checker that keeps the display moving when the recognizer stalls. Every
//! task re-checks its token before touching shared state, so completions
//! belonging to a superseded session are discarded instead of cancelled.

use std::sync::Arc;
use std::time::Duration;

use sublate_bridge::MessageFromBackend;
use sublate_subtitle::{
    RecognitionEvent, SessionState, SpeechRecognizer, SubtitleLine, TRANSLATION_ERROR_PLACEHOLDER,
};

use crate::services::AppContextHandle;

/// Pause before reopening a listening cycle that failed to start.
const RECOGNIZER_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Starts subtitle generation for the session identified by `token`.
///
/// The caller mints the token (see [`crate::app::AppContext::generations`]);
/// a token that is already stale means a newer session superseded this one
/// and the call is a no-op. Otherwise the display window is reset, one line
/// is emitted immediately so the surface is never blank while the first
/// asynchronous source responds, and the source tasks are spawned: the
/// recognition loop plus the quiet-period checker when a recognizer is
/// available, or the plain phrase ticker otherwise.
pub(crate) async fn start_subtitle_generation(context: &AppContextHandle, token: u64) {
    if !context.generations.is_current(token) {
        return;
    }

    let (recognizer, tick_period, quiet_period) = {
        let mut state = context.state.write().await;
        state.display.buffer.clear();
        state.display.dedup.reset();
        state.display.last_recognition_at = None;

        let recognizer = if state.config.enable_recognition {
            state.recognizer.clone()
        } else {
            None
        };
        state.session = if recognizer.is_some() {
            SessionState::PlayingWithRecognition
        } else {
            SessionState::PlayingNoRecognition
        };

        (
            recognizer,
            Duration::from_secs(state.config.subtitle_config.tick_seconds),
            Duration::from_secs(state.config.subtitle_config.quiet_period_seconds),
        )
    };

    let initial_phrase = {
        let mut state = context.state.write().await;
        state.display.phrases.next_phrase()
    };
    translate_and_display(context, token, initial_phrase).await;

    match recognizer {
        Some(recognizer) => {
            spawn_recognition_loop(context.clone(), token, recognizer);
            spawn_quiet_period_checker(context.clone(), token, quiet_period);
        }
        None => {
            log::info!("Speech recognition is unavailable, using sample phrases");
            spawn_phrase_ticker(context.clone(), token, tick_period);
        }
    }
}

/// Stops subtitle generation, clearing the display surface and orphaning all
/// outstanding timers and async completions of the previous session.
pub(crate) async fn stop_subtitle_generation(context: &AppContextHandle) {
    context.generations.advance();
    {
        let mut state = context.state.write().await;
        state.display.buffer.clear();
        state.display.dedup.reset();
        state.display.last_recognition_at = None;
        state.session = SessionState::Stopped;
    }
    context
        .send(MessageFromBackend::SubtitleUpdate {
            text: String::new(),
        })
        .await;
}

/// Periodically feeds the next sample phrase to the display while the session
/// token stays current.
fn spawn_phrase_ticker(context: AppContextHandle, token: u64, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick resolves immediately; the initial line is already out.
        interval.tick().await;
        loop {
            interval.tick().await;
            if !context.generations.is_current(token) {
                break;
            }
            let phrase = {
                let mut state = context.state.write().await;
                state.display.phrases.next_phrase()
            };
            translate_and_display(&context, token, phrase).await;
        }
        log::debug!("Phrase ticker for generation {token} stopped");
    });
}

/// Injects a random sample phrase whenever the recognizer has been quiet for
/// a full period, so the display never stalls mid-session.
fn spawn_quiet_period_checker(context: AppContextHandle, token: u64, quiet_period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(quiet_period);
        interval.tick().await;
        loop {
            interval.tick().await;
            if !context.generations.is_current(token) {
                break;
            }
            let fallback = {
                let state = context.state.read().await;
                let quiet = state
                    .display
                    .last_recognition_at
                    .is_none_or(|at| at.elapsed() >= quiet_period);
                if quiet {
                    Some(state.display.phrases.random_phrase())
                } else {
                    None
                }
            };
            if let Some(phrase) = fallback {
                log::debug!("No recent recognition results, using fallback phrase: {phrase}");
                translate_and_display(&context, token, phrase).await;
            }
        }
        log::debug!("Quiet-period checker for generation {token} stopped");
    });
}

/// Runs listening cycles against the recognizer until the session token is
/// superseded. Results and partials go straight to the display; a cycle that
/// ends in an error yields one fallback phrase and a restarted cycle.
fn spawn_recognition_loop(
    context: AppContextHandle,
    token: u64,
    recognizer: Arc<dyn SpeechRecognizer>,
) {
    tokio::spawn(async move {
        while context.generations.is_current(token) {
            match recognizer.start_listening().await {
                Ok(mut events) => {
                    while let Some(event) = events.recv().await {
                        if !context.generations.is_current(token) {
                            return;
                        }
                        match event {
                            RecognitionEvent::Result(text) | RecognitionEvent::Partial(text) => {
                                {
                                    let mut state = context.state.write().await;
                                    state.display.last_recognition_at =
                                        Some(tokio::time::Instant::now());
                                }
                                translate_and_display(&context, token, text).await;
                            }
                            RecognitionEvent::Error(error) => {
                                log::error!("Error in speech recognition: {error}");
                                let fallback = {
                                    let state = context.state.read().await;
                                    state.display.phrases.random_phrase()
                                };
                                translate_and_display(&context, token, fallback).await;
                                // Reopen the listening cycle.
                                break;
                            }
                        }
                    }
                }
                Err(error) => {
                    log::error!("Failed to start a listening cycle: {error}");
                    let fallback = {
                        let state = context.state.read().await;
                        state.display.phrases.random_phrase()
                    };
                    translate_and_display(&context, token, fallback).await;
                    tokio::time::sleep(RECOGNIZER_RETRY_DELAY).await;
                }
            }
        }
        log::debug!("Recognition loop for generation {token} stopped");
    });
}

/// Translates one source line and renders the display window.
///
/// A line identical to the previously admitted one is dropped without a
/// translation request. On success the translated line is pushed into the
/// rolling window and the full window is re-rendered; on failure a fixed
/// placeholder is shown and the window is left untouched. The token is
/// re-checked after every suspension point so a completion that outlived its
/// session mutates nothing.
pub(crate) async fn translate_and_display(
    context: &AppContextHandle,
    token: u64,
    source_text: String,
) {
    {
        let mut state = context.state.write().await;
        if !context.generations.is_current(token) {
            return;
        }
        if !state.display.dedup.admit(&source_text) {
            return;
        }
    }

    let translator = {
        let state = context.state.read().await;
        state.translator.clone()
    };

    log::debug!("Translating: {source_text}");
    match translator.translate(&source_text).await {
        Ok(translated) => {
            let rendered = {
                let mut state = context.state.write().await;
                if !context.generations.is_current(token) {
                    return;
                }
                state.display.buffer.push(SubtitleLine {
                    source: source_text,
                    translated,
                });
                state.display.buffer.render()
            };
            context
                .send(MessageFromBackend::SubtitleUpdate { text: rendered })
                .await;
        }
        Err(error) => {
            log::error!("Translation failed: {error}");
            if !context.generations.is_current(token) {
                return;
            }
            context
                .send(MessageFromBackend::SubtitleUpdate {
                    text: TRANSLATION_ERROR_PLACEHOLDER.to_string(),
                })
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        CountingTranslator, FailingTranslator, FixedPhrases, ScriptedRecognizer, test_context,
    };
    use sublate_subtitle::{RecognitionError, SAMPLE_ENGLISH_PHRASES};

    fn subtitle_text(message: MessageFromBackend) -> String {
        match message {
            MessageFromBackend::SubtitleUpdate { text } => text,
            other => panic!("expected a subtitle update, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn identical_consecutive_lines_translate_once() {
        let translator = Arc::new(CountingTranslator::default());
        let (context, mut rx) = test_context(translator.clone(), None);
        let token = context.generations.advance();

        translate_and_display(&context, token, "Welcome to this video".to_string()).await;
        translate_and_display(&context, token, "Welcome to this video".to_string()).await;

        assert_eq!(translator.calls(), 1);
        assert_eq!(subtitle_text(rx.recv().await.unwrap()), "ru:Welcome to this video");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_token_mutates_nothing() {
        let translator = Arc::new(CountingTranslator::default());
        let (context, mut rx) = test_context(translator.clone(), None);
        let stale = context.generations.advance();
        context.generations.advance();

        translate_and_display(&context, stale, "Welcome to this video".to_string()).await;

        assert_eq!(translator.calls(), 0);
        assert!(rx.try_recv().is_err());
        assert!(context.state.read().await.display.buffer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_discards_late_translation_results() {
        let translator = Arc::new(CountingTranslator::default());
        let (context, mut rx) = test_context(translator.clone(), None);
        let token = context.generations.advance();

        stop_subtitle_generation(&context).await;
        assert_eq!(subtitle_text(rx.recv().await.unwrap()), "");

        // A callback from the stopped session resolves afterwards.
        translate_and_display(&context, token, "Welcome to this video".to_string()).await;
        assert!(rx.try_recv().is_err());
        assert!(context.state.read().await.display.buffer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_translation_renders_placeholder_and_keeps_buffer() {
        let (context, mut rx) = test_context(Arc::new(FailingTranslator), None);
        let token = context.generations.advance();

        translate_and_display(&context, token, "Welcome to this video".to_string()).await;

        assert_eq!(
            subtitle_text(rx.recv().await.unwrap()),
            TRANSLATION_ERROR_PLACEHOLDER
        );
        assert!(context.state.read().await.display.buffer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn window_evicts_oldest_line_at_capacity() {
        let (context, mut rx) = test_context(Arc::new(CountingTranslator::default()), None);
        let token = context.generations.advance();

        for line in ["one", "two", "three", "four"] {
            translate_and_display(&context, token, line.to_string()).await;
            rx.recv().await.unwrap();
        }

        let state = context.state.read().await;
        assert_eq!(state.display.buffer.len(), 3);
        assert_eq!(state.display.buffer.render(), "ru:two\nru:three\nru:four");
    }

    #[tokio::test(start_paused = true)]
    async fn phrase_mode_emits_initial_line_then_ticks() {
        let (context, mut rx) = test_context(Arc::new(CountingTranslator::default()), None);

        start_subtitle_generation(&context, context.generations.advance()).await;
        assert_eq!(
            subtitle_text(rx.recv().await.unwrap()),
            format!("ru:{}", SAMPLE_ENGLISH_PHRASES[0])
        );
        assert_eq!(
            context.state.read().await.session,
            SessionState::PlayingNoRecognition
        );

        tokio::time::advance(Duration::from_secs(3)).await;
        assert_eq!(
            subtitle_text(rx.recv().await.unwrap()),
            format!("ru:{}\nru:{}", SAMPLE_ENGLISH_PHRASES[0], SAMPLE_ENGLISH_PHRASES[1])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_dies_with_its_generation() {
        let translator = Arc::new(CountingTranslator::default());
        let (context, mut rx) = test_context(translator.clone(), None);

        start_subtitle_generation(&context, context.generations.advance()).await;
        rx.recv().await.unwrap();
        stop_subtitle_generation(&context).await;
        assert_eq!(subtitle_text(rx.recv().await.unwrap()), "");

        let calls_after_stop = translator.calls();
        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(translator.calls(), calls_after_stop);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn recognition_results_feed_the_display() {
        let recognizer = Arc::new(ScriptedRecognizer::new(vec![vec![
            RecognitionEvent::Partial("hello".to_string()),
            RecognitionEvent::Result("hello world".to_string()),
        ]]));
        let (context, mut rx) =
            test_context(Arc::new(CountingTranslator::default()), Some(recognizer));

        start_subtitle_generation(&context, context.generations.advance()).await;
        assert_eq!(
            subtitle_text(rx.recv().await.unwrap()),
            format!("ru:{}", SAMPLE_ENGLISH_PHRASES[0])
        );
        assert_eq!(
            context.state.read().await.session,
            SessionState::PlayingWithRecognition
        );

        let partial = subtitle_text(rx.recv().await.unwrap());
        assert!(partial.ends_with("ru:hello"));
        let final_result = subtitle_text(rx.recv().await.unwrap());
        assert!(final_result.ends_with("ru:hello world"));
    }

    #[tokio::test(start_paused = true)]
    async fn recognition_error_yields_fallback_phrase() {
        let recognizer = Arc::new(ScriptedRecognizer::new(vec![vec![RecognitionEvent::Error(
            RecognitionError::Network,
        )]]));
        let translator = Arc::new(CountingTranslator::default());
        let (context, mut rx) = test_context(translator.clone(), Some(recognizer));

        start_subtitle_generation(&context, context.generations.advance()).await;
        // Swap in a deterministic fallback source before the loop runs.
        context.state.write().await.display.phrases =
            Box::new(FixedPhrases::new(SAMPLE_ENGLISH_PHRASES[1]));
        rx.recv().await.unwrap(); // initial line

        let fallback = subtitle_text(rx.recv().await.unwrap());
        let last_line = fallback.rsplit('\n').next().unwrap();
        assert_eq!(last_line, format!("ru:{}", SAMPLE_ENGLISH_PHRASES[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_recognizer_triggers_phrase_injection() {
        // A recognizer that opens a cycle and then stays silent.
        let recognizer = Arc::new(ScriptedRecognizer::new(Vec::new()));
        let (context, mut rx) =
            test_context(Arc::new(CountingTranslator::default()), Some(recognizer));

        start_subtitle_generation(&context, context.generations.advance()).await;
        context.state.write().await.display.phrases =
            Box::new(FixedPhrases::new(SAMPLE_ENGLISH_PHRASES[1]));
        rx.recv().await.unwrap(); // initial line

        tokio::time::advance(Duration::from_secs(5)).await;
        let injected = subtitle_text(rx.recv().await.unwrap());
        let last_line = injected.rsplit('\n').next().unwrap();
        assert_eq!(last_line, format!("ru:{}", SAMPLE_ENGLISH_PHRASES[1]));
    }
}
