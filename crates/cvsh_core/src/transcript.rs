//! The running terminal transcript.
//!
//! An append-only ordered log of input echoes and output lines,
//! cleared only by the `clear` command. Output lines carry a style
//! class so the UI can map them onto the palette.

/// Style class of one transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echoed user input, rendered with the prompt prefix.
    Input,
    /// Plain output text.
    Text,
    /// Headings and emphasized words.
    Accent,
    /// URLs and mail links.
    Link,
    /// User-input warnings and operator notes.
    Warning,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(LineKind::Text, text)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(LineKind::Accent, text)
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::new(LineKind::Link, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(LineKind::Warning, text)
    }
}

/// Ordered log of everything shown in the terminal pane.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo an input line.
    pub fn push_input(&mut self, prompt: &str, input: &str) {
        self.lines.push(Line::new(LineKind::Input, format!("{prompt}{input}")));
    }

    /// Append output lines.
    pub fn push_output(&mut self, lines: &[Line]) {
        self.lines.extend_from_slice(lines);
    }

    /// Drop everything (the `clear` command).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_input("karthi> ", "help");
        transcript.push_output(&[Line::accent("Commands"), Line::text("summary")]);

        let texts: Vec<&str> = transcript.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["karthi> help", "Commands", "summary"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push_input("> ", "about");
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
