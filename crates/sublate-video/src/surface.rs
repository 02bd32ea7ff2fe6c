use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::watch;

/// Errors reported by a playback surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The player page could not be loaded into the surface.
    #[error("failed to load the player page: {0}")]
    LoadFailed(String),
}

/// Contract for the component that hosts the embedded video player.
///
/// The backend owns exactly one surface for the lifetime of the process and
/// drives it from the playback session service. Implementations signal page
/// readiness through the watch channel returned by [`page_loaded`], which
/// flips to `true` once the player page has finished loading.
///
/// [`page_loaded`]: PlaybackSurface::page_loaded
#[async_trait]
pub trait PlaybackSurface: Send + Sync {
    /// Navigates the surface to the given embed URL.
    async fn load(&self, url: &Url) -> Result<(), SurfaceError>;

    /// Pauses playback, e.g. when the application goes to the background.
    async fn pause(&self);

    /// Resumes playback if the player is currently paused.
    async fn resume(&self);

    /// Whether the player is currently paused.
    async fn is_paused(&self) -> bool;

    /// Page-load signal; `true` once the current player page finished loading.
    fn page_loaded(&self) -> watch::Receiver<bool>;
}

/// A headless playback surface used when no real player is attached.
///
/// Loads resolve immediately and playback state is plain bookkeeping, which
/// keeps the session services fully exercisable without a browser component.
pub struct DetachedSurface {
    loaded_tx: watch::Sender<bool>,
    paused: AtomicBool,
    current_url: Mutex<Option<Url>>,
}

impl DetachedSurface {
    pub fn new() -> Self {
        let (loaded_tx, _) = watch::channel(false);
        Self {
            loaded_tx,
            paused: AtomicBool::new(false),
            current_url: Mutex::new(None),
        }
    }

    /// The embed URL of the most recent load, if any.
    pub fn current_url(&self) -> Option<Url> {
        self.current_url
            .lock()
            .expect("surface url lock poisoned")
            .clone()
    }
}

impl Default for DetachedSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaybackSurface for DetachedSurface {
    async fn load(&self, url: &Url) -> Result<(), SurfaceError> {
        log::info!("Loading the embedded player page: {url}");
        {
            let mut current = self
                .current_url
                .lock()
                .expect("surface url lock poisoned");
            *current = Some(url.clone());
        }
        self.paused.store(false, Ordering::SeqCst);
        self.loaded_tx.send_replace(true);
        Ok(())
    }

    async fn pause(&self) {
        log::debug!("Pausing the playback surface");
        self.paused.store(true, Ordering::SeqCst);
    }

    async fn resume(&self) {
        if self.paused.swap(false, Ordering::SeqCst) {
            log::debug!("Resuming the playback surface");
        }
    }

    async fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    fn page_loaded(&self) -> watch::Receiver<bool> {
        self.loaded_tx.subscribe()
    }
}
