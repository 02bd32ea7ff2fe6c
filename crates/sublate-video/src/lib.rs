//! Video link handling for the embedded playback side of the application.
//!
//! This crate wraps everything the backend needs to turn a user-pasted
//! YouTube link into a running playback surface. It focuses on:
//! - Extracting a canonical video identifier from the known link shapes.
//! - Building the embedded player URL with the playback parameter set.
//! - The [`PlaybackSurface`] contract the session services drive, plus a
//!   headless implementation used when no real player is attached.
//!
//! Parsing is pure string work with no I/O; the playback surface is the only
//! part with side effects.

pub mod embed;
pub mod reference;
pub mod surface;

pub use embed::embed_url;
pub use reference::{ParseError, VideoReference, extract_video_reference};
pub use surface::{DetachedSurface, PlaybackSurface, SurfaceError};
