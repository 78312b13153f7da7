//! Submission history with shell-style up/down recall.

/// Bounded list of submitted lines, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    max: usize,
    /// Index of the entry currently recalled into the input buffer.
    cursor: Option<usize>,
    /// Input that was being typed before recall started.
    draft: String,
}

impl History {
    pub fn new(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max: max.max(1),
            cursor: None,
            draft: String::new(),
        }
    }

    /// Record a submission and reset recall.
    pub fn push(&mut self, line: &str) {
        self.reset_cursor();
        // Don't duplicate the last entry.
        if self.entries.last().is_none_or(|last| last != line) {
            self.entries.push(line.to_string());
            if self.entries.len() > self.max {
                self.entries.remove(0);
            }
        }
    }

    /// Step back one entry. `current` is remembered on the first step so
    /// that stepping forward past the newest entry restores it.
    pub fn prev(&mut self, current: &str) -> Option<String> {
        let idx = match self.cursor {
            None => {
                let last = self.entries.len().checked_sub(1)?;
                self.draft = current.to_string();
                last
            },
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.entries.get(idx).cloned()
    }

    /// Step forward one entry, ending with the saved draft.
    pub fn next(&mut self) -> Option<String> {
        let i = self.cursor?;
        if i + 1 < self.entries.len() {
            self.cursor = Some(i + 1);
            self.entries.get(i + 1).cloned()
        } else {
            self.cursor = None;
            Some(std::mem::take(&mut self.draft))
        }
    }

    /// Forget any recall position.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
        self.draft.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_push_and_retrieve() {
        let mut h = History::new(10);
        h.push("whoami");
        h.push("pwd");
        assert_eq!(h.entries(), ["whoami", "pwd"]);
    }

    #[test]
    fn history_no_duplicates() {
        let mut h = History::new(10);
        h.push("help");
        h.push("help");
        h.push("pwd");
        h.push("help");
        assert_eq!(h.entries(), ["help", "pwd", "help"]);
    }

    #[test]
    fn history_is_bounded() {
        let mut h = History::new(3);
        for cmd in ["a", "b", "c", "d"] {
            h.push(cmd);
        }
        assert_eq!(h.entries(), ["b", "c", "d"]);
    }

    #[test]
    fn prev_walks_back_and_stops_at_oldest() {
        let mut h = History::new(10);
        h.push("one");
        h.push("two");
        assert_eq!(h.prev("").as_deref(), Some("two"));
        assert_eq!(h.prev("").as_deref(), Some("one"));
        assert_eq!(h.prev("").as_deref(), Some("one"));
    }

    #[test]
    fn next_restores_draft() {
        let mut h = History::new(10);
        h.push("one");
        h.push("two");
        assert_eq!(h.prev("wh").as_deref(), Some("two"));
        assert_eq!(h.prev("").as_deref(), Some("one"));
        assert_eq!(h.next().as_deref(), Some("two"));
        assert_eq!(h.next().as_deref(), Some("wh"));
        assert_eq!(h.next(), None);
    }

    #[test]
    fn prev_on_empty_is_none() {
        let mut h = History::new(10);
        assert_eq!(h.prev("x"), None);
        assert_eq!(h.next(), None);
    }
}
