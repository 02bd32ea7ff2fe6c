/// Debounce gate that suppresses re-translation of a repeated source line.
///
/// The subtitle sources can hand the controller the same text twice in a row
/// (a recognizer re-emitting a partial result, or a phrase tick racing a
/// recognition result). Translating and re-rendering the identical line only
/// makes the display flicker, so the gate admits a line exactly when it
/// differs from the previously admitted one.
#[derive(Debug, Clone, Default)]
pub struct DedupGate {
    last_admitted: Option<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits `text` if it differs from the previously admitted line,
    /// remembering it for the next comparison. Returns `false` when the line
    /// should be dropped.
    pub fn admit(&mut self, text: &str) -> bool {
        if self.last_admitted.as_deref() == Some(text) {
            return false;
        }
        self.last_admitted = Some(text.to_string());
        true
    }

    /// Forgets the previously admitted line, so the next one always passes.
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_always_passes() {
        let mut gate = DedupGate::new();
        assert!(gate.admit("Welcome to this video"));
    }

    #[test]
    fn identical_consecutive_line_is_dropped() {
        let mut gate = DedupGate::new();
        assert!(gate.admit("Welcome to this video"));
        assert!(!gate.admit("Welcome to this video"));
    }

    #[test]
    fn alternating_lines_pass() {
        let mut gate = DedupGate::new();
        assert!(gate.admit("a"));
        assert!(gate.admit("b"));
        assert!(gate.admit("a"));
    }

    #[test]
    fn reset_clears_the_memory() {
        let mut gate = DedupGate::new();
        assert!(gate.admit("a"));
        gate.reset();
        assert!(gate.admit("a"));
    }
}
