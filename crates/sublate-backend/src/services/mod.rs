//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, playback surface, timers),
//! and emit subtitle updates or notifications back to the frontend.

pub mod config_service;
pub mod playback_service;
pub mod subtitle_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
