//! Playback session lifecycle: link validation, surface loading, and the
//! playback monitor.

use std::time::Duration;

use sublate_bridge::MessageFromBackend;
use sublate_bridge::notification::{InputField, NotificationType};
use sublate_video::{
    ParseError, PlaybackSurface, SurfaceError, VideoReference, extract_video_reference,
};

use crate::services::{AppContextHandle, subtitle_service};

/// Source text for the placeholder shown while the player page loads.
const LOADING_PLACEHOLDER_SOURCE: &str = "Loading video...";

/// Fixed fallback when even the placeholder cannot be translated.
const LOADING_PLACEHOLDER_FALLBACK: &str = "Загрузка видео...";

/// How often the playback monitor nudges a paused player back into playback.
const PLAYBACK_MONITOR_PERIOD: Duration = Duration::from_millis(500);

/// Cap on the placeholder translation request during session setup.
const PLACEHOLDER_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the surface may take to report the player page as loaded.
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Handles an incoming play request (see
/// [`sublate_bridge::MessageToBackend::PlayRequest`]).
///
/// Validation failures are reported inline at the link field and never start
/// a session. Session setup itself waits on the network, so it runs in a
/// spawned task tied to a fresh generation token and the dispatch loop stays
/// free to process a stop or a superseding play request.
pub async fn handle_play_request(context: AppContextHandle, link: String) {
    let link = link.trim();
    let reference = match extract_video_reference(link) {
        Ok(reference) => reference,
        Err(error) => {
            let message = match error {
                ParseError::EmptyInput => "Введите ссылку на YouTube видео.",
                ParseError::UnknownDomain => {
                    "Введите корректную ссылку (youtube.com или youtu.be)."
                }
                ParseError::NotFound => {
                    "Не удалось извлечь идентификатор видео. Поддерживаемые форматы: \
                     youtube.com/watch?v=VIDEO_ID и youtu.be/VIDEO_ID."
                }
            };
            context
                .send_field_error(InputField::VideoLink, message)
                .await;
            return;
        }
    };

    log::info!("Playing video with the identifier: {reference}");

    // Tear down the previous session before anything new starts.
    subtitle_service::stop_subtitle_generation(&context).await;

    let token = context.generations.advance();
    tokio::spawn(run_session_setup(context, token, reference));
}

/// Handles an incoming stop request (see
/// [`sublate_bridge::MessageToBackend::StopRequest`]).
pub async fn handle_stop_request(context: AppContextHandle) {
    log::info!("Stopping the playback session");
    subtitle_service::stop_subtitle_generation(&context).await;

    let surface = {
        let state = context.state.read().await;
        state.surface.clone()
    };
    surface.pause().await;

    context.send(MessageFromBackend::PlaybackStoppedResponse).await;
}

/// Brings up one playback session: loading placeholder, surface load with a
/// bounded page-load wait, then subtitle generation.
///
/// A surface that fails to load is reported to the user, but subtitle
/// generation still starts so the display keeps working in degraded phrase
/// mode. The token is re-checked after every wait; a setup superseded by a
/// newer request stops without touching shared state.
async fn run_session_setup(context: AppContextHandle, token: u64, reference: VideoReference) {
    show_loading_placeholder(&context, token).await;
    if !context.generations.is_current(token) {
        return;
    }

    let (surface, embed_url) = {
        let state = context.state.read().await;
        let playback = &state.config.playback_config;
        let url = sublate_video::embed_url(
            &reference,
            playback.api_key.as_deref(),
            &playback.interface_language,
            playback.autoplay,
        );
        (state.surface.clone(), url)
    };

    let load_result = match surface.load(&embed_url).await {
        Ok(()) => wait_for_page_load(surface.as_ref()).await,
        Err(error) => Err(error),
    };
    if !context.generations.is_current(token) {
        return;
    }
    let loaded = match load_result {
        Ok(()) => true,
        Err(error) => {
            report_load_failure(&context, &error).await;
            false
        }
    };

    subtitle_service::start_subtitle_generation(&context, token).await;

    if loaded {
        context
            .send(MessageFromBackend::PlaybackStartedResponse {
                video_id: reference.as_str().to_string(),
            })
            .await;
        spawn_playback_monitor(context, token);
    }
}

/// Shows a translated "loading" placeholder, falling back to the fixed
/// localized text when the translator is unreachable or slow.
async fn show_loading_placeholder(context: &AppContextHandle, token: u64) {
    let translator = {
        let state = context.state.read().await;
        state.translator.clone()
    };
    let request = translator.translate(LOADING_PLACEHOLDER_SOURCE);
    let text = match tokio::time::timeout(PLACEHOLDER_TIMEOUT, request).await {
        Ok(Ok(translated)) => translated,
        Ok(Err(_)) | Err(_) => LOADING_PLACEHOLDER_FALLBACK.to_string(),
    };
    if !context.generations.is_current(token) {
        return;
    }
    context
        .send(MessageFromBackend::SubtitleUpdate { text })
        .await;
}

/// Waits until the surface reports the player page as loaded, up to
/// [`PAGE_LOAD_TIMEOUT`].
async fn wait_for_page_load(surface: &dyn PlaybackSurface) -> Result<(), SurfaceError> {
    let mut loaded = surface.page_loaded();
    match tokio::time::timeout(PAGE_LOAD_TIMEOUT, loaded.wait_for(|loaded| *loaded)).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(_)) => Err(SurfaceError::LoadFailed(
            "page load signal closed".to_string(),
        )),
        Err(_) => Err(SurfaceError::LoadFailed("page load timed out".to_string())),
    }
}

async fn report_load_failure(context: &AppContextHandle, error: &SurfaceError) {
    log::error!("Failed to load the player page: {error}");
    context
        .send_notification(
            NotificationType::Error,
            format!("Ошибка загрузки видео: {error}"),
        )
        .await;
}

/// Keeps the player from silently staying paused: the embedded player likes
/// to pause itself on buffering hiccups, so while the session token stays
/// current the monitor nudges a paused player back into playback.
fn spawn_playback_monitor(context: AppContextHandle, token: u64) {
    tokio::spawn(async move {
        let surface = {
            let state = context.state.read().await;
            state.surface.clone()
        };
        let mut interval = tokio::time::interval(PLAYBACK_MONITOR_PERIOD);
        loop {
            interval.tick().await;
            if !context.generations.is_current(token) {
                break;
            }
            if surface.is_paused().await {
                log::debug!("The player paused itself, forcing playback to continue");
                surface.resume().await;
            }
        }
        log::debug!("Playback monitor for generation {token} stopped");
    });
}
