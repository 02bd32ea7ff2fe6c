use std::str::FromStr;

use reqwest::Url;

use crate::reference::VideoReference;

/// Base URL of the embedded player pages.
const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Origin identifier the embedded player reports requests under.
const APP_ORIGIN: &str = "dev.sublate.sublate";

/// Builds the embedded player URL for the given video reference.
///
/// The parameter set keeps the player stable inside a hosted surface: the
/// JS API stays enabled for the playback monitor, related videos and
/// annotations are hidden, the HTML5 player is forced, and the initial
/// quality is capped at medium so buffering starts quickly.
pub fn embed_url(
    reference: &VideoReference,
    api_key: Option<&str>,
    interface_language: &str,
    autoplay: bool,
) -> Url {
    let mut url = Url::from_str(EMBED_BASE_URL)
        .expect("failed to build the base embed URL")
        .join(reference.as_str())
        .expect("failed to append the video identifier");

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("enablejsapi", "1");
        if let Some(api_key) = api_key {
            query.append_pair("key", api_key);
        }
        query.append_pair("autoplay", if autoplay { "1" } else { "0" });
        query.append_pair("rel", "0");
        query.append_pair("showinfo", "0");
        query.append_pair("controls", "1");
        query.append_pair("fs", "1");
        query.append_pair("modestbranding", "1");
        query.append_pair("iv_load_policy", "3");
        query.append_pair("hl", interface_language);
        query.append_pair("playsinline", "1");
        query.append_pair("html5", "1");
        query.append_pair("vq", "medium");
        query.append_pair("origin", APP_ORIGIN);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_lands_in_the_path() {
        let reference = VideoReference::new("dQw4w9WgXcQ").unwrap();
        let url = embed_url(&reference, None, "ru", true);
        assert_eq!(url.path(), "/embed/dQw4w9WgXcQ");
        assert!(url.query().unwrap().contains("autoplay=1"));
        assert!(url.query().unwrap().contains("hl=ru"));
        assert!(!url.query().unwrap().contains("key="));
    }

    #[test]
    fn api_key_is_appended_when_stored() {
        let reference = VideoReference::new("dQw4w9WgXcQ").unwrap();
        let url = embed_url(&reference, Some("test-api-key-0123456789"), "ru", false);
        assert!(url.query().unwrap().contains("key=test-api-key-0123456789"));
        assert!(url.query().unwrap().contains("autoplay=0"));
    }
}
