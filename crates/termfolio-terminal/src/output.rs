//! The display log a view paints.

/// Whether a line echoes user input or was produced by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echoed submission, already carrying its prompt glyph.
    Input,
    /// Command output, rendered with the output marker.
    Output,
}

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub content: String,
}

impl OutputLine {
    pub fn input(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Input,
            content: content.into(),
        }
    }

    pub fn output(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            content: content.into(),
        }
    }

    /// Render with `marker` in front of produced output. Input lines are
    /// returned as-is.
    pub fn render(&self, marker: &str) -> String {
        match self.kind {
            LineKind::Input => self.content.clone(),
            LineKind::Output => format!("{marker}{}", self.content),
        }
    }
}

/// Ordered, append-only list of lines.
///
/// Only the trailing line may change after it is appended (while it is
/// being revealed), and only `clear` removes lines.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// Replace the content of the trailing line. No-op on an empty log.
    pub fn set_last_content(&mut self, content: String) {
        if let Some(last) = self.lines.last_mut() {
            last.content = content;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line contents without markers.
    pub fn contents(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.content.as_str()).collect()
    }
}
