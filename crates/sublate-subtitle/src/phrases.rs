use rand::Rng;

/// Built-in source-language phrases used when no live subtitle source is
/// available, or when a live source goes quiet.
pub const SAMPLE_ENGLISH_PHRASES: &[&str] = &[
    "Welcome to this video",
    "Today we will discuss important topics",
    "Thank you for watching this content",
    "Don't forget to subscribe",
    "Let me show you how this works",
    "This is a demonstration of our app",
    "The main features include video playback",
    "We also provide real-time translation",
    "This technology can be very useful",
    "We hope you enjoy using our application",
];

/// A source of source-language subtitle lines.
///
/// The controller pulls from a phrase source in two ways: sequentially on the
/// periodic tick, and randomly when it needs a one-off fallback line. Keeping
/// this behind a trait lets tests substitute a deterministic source.
pub trait PhraseSource: Send + Sync {
    /// Returns the next phrase in sequence, wrapping around at the end.
    fn next_phrase(&mut self) -> String;

    /// Returns an arbitrary phrase, used as a fallback line.
    fn random_phrase(&self) -> String;
}

/// The default phrase source backed by [`SAMPLE_ENGLISH_PHRASES`].
#[derive(Debug, Clone, Default)]
pub struct SamplePhrases {
    cursor: usize,
}

impl SamplePhrases {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhraseSource for SamplePhrases {
    fn next_phrase(&mut self) -> String {
        let phrase = SAMPLE_ENGLISH_PHRASES[self.cursor % SAMPLE_ENGLISH_PHRASES.len()];
        self.cursor += 1;
        phrase.to_string()
    }

    fn random_phrase(&self) -> String {
        let index = rand::rng().random_range(0..SAMPLE_ENGLISH_PHRASES.len());
        SAMPLE_ENGLISH_PHRASES[index].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_the_list_in_order() {
        let mut phrases = SamplePhrases::new();
        assert_eq!(phrases.next_phrase(), SAMPLE_ENGLISH_PHRASES[0]);
        assert_eq!(phrases.next_phrase(), SAMPLE_ENGLISH_PHRASES[1]);
        for _ in 2..SAMPLE_ENGLISH_PHRASES.len() {
            phrases.next_phrase();
        }
        // Wraps around after the last phrase.
        assert_eq!(phrases.next_phrase(), SAMPLE_ENGLISH_PHRASES[0]);
    }

    #[test]
    fn random_phrase_comes_from_the_list() {
        let phrases = SamplePhrases::new();
        for _ in 0..20 {
            let phrase = phrases.random_phrase();
            assert!(SAMPLE_ENGLISH_PHRASES.contains(&phrase.as_str()));
        }
    }
}
