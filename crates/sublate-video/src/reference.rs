use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the path segment following a `youtu.be/` short link.
static SHORT_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([^?&#]+)").expect("failed to build short link regex"));

/// Matches the `v` query parameter of a `youtube.com/watch` link.
static WATCH_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^?&#]+)").expect("failed to build watch link regex"));

/// Path and query markers tried when neither the short-link nor the watch
/// form matched. The identifier is whatever follows the marker, up to the
/// first terminator. Percent-encoded variants cover links copied out of
/// other embeddings.
const FALLBACK_MARKERS: &[&str] = &[
    "watch?v=",
    "/videos/",
    "embed/",
    "youtu.be/",
    "/v/",
    "/e/",
    "watch?v%3D",
    "watch?feature=player_embedded&v=",
    "%2Fvideos%2F",
    "embed%2F",
    "youtu.be%2F",
    "%2Fv%2F",
];

/// Characters that terminate a video identifier inside a link.
const IDENTIFIER_TERMINATORS: [char; 4] = ['#', '&', '?', '\n'];

/// A validated video identifier extracted from a user-supplied link.
///
/// Guaranteed to be non-empty and free of query/fragment delimiters, so it
/// can be spliced into an embed URL path without further escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference(String);

impl VideoReference {
    /// Validates and wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Result<Self, ParseError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ParseError::NotFound);
        }
        if id.contains(['?', '&', '#']) {
            return Err(ParseError::NotFound);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while extracting a video identifier from a link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input string was empty or whitespace only.
    #[error("the link is empty")]
    EmptyInput,
    /// The input does not mention a known YouTube domain.
    #[error("not a youtube.com or youtu.be link")]
    UnknownDomain,
    /// The link looked like a YouTube link but no identifier could be found.
    #[error("no video identifier found in the link")]
    NotFound,
}

/// Extracts a video identifier from an arbitrary link string.
///
/// Extraction strategies are tried in a fixed priority order and the first
/// successful one wins:
/// 1. short-link form (`youtu.be/{id}`);
/// 2. watch form (`youtube.com/...?v={id}`);
/// 3. generic marker scan over the [`FALLBACK_MARKERS`] set.
///
/// In every strategy the identifier is truncated before the first `?`, `&`,
/// `#`, or newline. Matching is case-sensitive and performs no I/O.
pub fn extract_video_reference(url: &str) -> Result<VideoReference, ParseError> {
    if url.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if !url.contains("youtube.com") && !url.contains("youtu.be") {
        return Err(ParseError::UnknownDomain);
    }

    if url.contains("youtu.be")
        && let Some(captures) = SHORT_LINK_PATTERN.captures(url)
    {
        log::debug!("Extracted the video identifier from a short link: {url}");
        return VideoReference::new(&captures[1]);
    }

    if url.contains("youtube.com")
        && let Some(captures) = WATCH_LINK_PATTERN.captures(url)
    {
        log::debug!("Extracted the video identifier from a watch link: {url}");
        return VideoReference::new(&captures[1]);
    }

    match fallback_extract(url) {
        Some(id) => {
            log::debug!("Extracted the video identifier with the marker scan: {url}");
            VideoReference::new(id)
        }
        None => {
            log::error!("All extraction strategies failed for the link: {url}");
            Err(ParseError::NotFound)
        }
    }
}

/// Scans the link for known path/query markers and returns the substring
/// immediately following the leftmost one, truncated at the first terminator.
fn fallback_extract(url: &str) -> Option<&str> {
    let mut best: Option<(usize, usize)> = None; // (marker position, identifier start)
    for marker in FALLBACK_MARKERS {
        if let Some(position) = url.find(marker) {
            let candidate = (position, position + marker.len());
            if best.is_none_or(|(best_position, _)| position < best_position) {
                best = Some(candidate);
            }
        }
    }

    let (_, id_start) = best?;
    let rest = &url[id_start..];
    let end = rest.find(IDENTIFIER_TERMINATORS).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}
