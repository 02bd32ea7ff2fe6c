//! Subtitle display primitives and scheduling contracts.
//!
//! This crate provides the building blocks the backend composes into the
//! subtitle display controller:
//! - A bounded rolling [`SubtitleBuffer`] of the most recent display lines.
//! - A [`DedupGate`] that suppresses re-translation of a repeated source line.
//! - The built-in sample phrase list used whenever no live source is
//!   available or a live source goes quiet.
//! - The [`Translator`] and [`SpeechRecognizer`] contracts for the external
//!   translation and speech-to-text services.
//! - Session bookkeeping: playback/recognition state and the generation
//!   counter used to discard results from superseded sessions.
//!
//! Everything here is side-effect free; timers, channels, and rendering live
//! in the backend services that drive these types.

pub mod buffer;
pub mod dedup;
pub mod phrases;
pub mod recognize;
pub mod session;
pub mod translate;

pub use buffer::{SubtitleBuffer, SubtitleLine};
pub use dedup::DedupGate;
pub use phrases::{PhraseSource, SAMPLE_ENGLISH_PHRASES, SamplePhrases};
pub use recognize::{RecognitionError, RecognitionEvent, SpeechRecognizer};
pub use session::{GenerationCounter, SessionState};
pub use translate::{TRANSLATION_ERROR_PLACEHOLDER, TranslationError, Translator};
