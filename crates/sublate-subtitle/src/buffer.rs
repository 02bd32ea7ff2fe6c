use std::collections::VecDeque;

/// A single subtitle line with both of its language facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleLine {
    /// The source-language text the line was produced from.
    pub source: String,
    /// The translated text shown on the display surface.
    pub translated: String,
}

/// Bounded rolling window of the most recent subtitle lines.
///
/// Lines are kept in insertion order; once the window is full, pushing a new
/// line evicts the oldest one. The rendered form is the translated texts
/// joined by newlines, mimicking how hosted players stack caption rows.
#[derive(Debug, Clone)]
pub struct SubtitleBuffer {
    lines: VecDeque<SubtitleLine>,
    capacity: usize,
}

impl SubtitleBuffer {
    /// Creates an empty buffer holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Appends a line, evicting the oldest one when the window is full.
    pub fn push(&mut self, line: SubtitleLine) {
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Renders the window as newline-joined translated text.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            parts.push(line.translated.as_str());
        }
        parts.join("\n")
    }

    /// Drops all lines from the window.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
