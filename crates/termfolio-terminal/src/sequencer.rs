//! Typing effect: reveal lines one character at a time.
//!
//! [`Reveal`] produces the partial strings of a single line. [`Sequencer`]
//! owns a queue of lines and plays them into an [`OutputLog`] strictly one
//! after another, stepping on a virtual timeline so that a large clock jump
//! replays every step that came due, in order.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::output::{OutputLine, OutputLog};

/// Lazy sequence of growing prefixes of `text`.
///
/// Yields `""` first, then one more character per step, ending with the full
/// text. Once exhausted it stays exhausted; a new reveal needs a new value.
#[derive(Debug)]
pub struct Reveal {
    text: String,
    /// Byte offset of the end of the next prefix to yield.
    next_end: Option<usize>,
}

impl Reveal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next_end: Some(0),
        }
    }

    /// The full line being revealed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the full text has been yielded.
    pub fn is_finished(&self) -> bool {
        self.next_end.is_none()
    }
}

impl Iterator for Reveal {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let end = self.next_end?;
        let prefix = self.text[..end].to_string();
        self.next_end = self.text[end..]
            .chars()
            .next()
            .map(|c| end + c.len_utf8());
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next_end {
            None => 0,
            Some(end) => self.text[end..].chars().count() + 1,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Reveal {}
impl FusedIterator for Reveal {}

/// Plays queued lines into a log at a fixed per-character delay.
#[derive(Debug)]
pub struct Sequencer {
    char_delay_ms: u64,
    line_gap_ms: u64,
    pending: VecDeque<String>,
    active: Option<Reveal>,
    /// Virtual time of the next step.
    next_due: u64,
    lines_done: usize,
}

impl Sequencer {
    pub fn new(char_delay_ms: u64, line_gap_ms: u64) -> Self {
        Self {
            char_delay_ms,
            line_gap_ms,
            pending: VecDeque::new(),
            active: None,
            next_due: 0,
            lines_done: 0,
        }
    }

    /// Queue `lines` and schedule the first step at `start_ms`.
    ///
    /// Anything still queued or in flight is dropped: a new batch owns the
    /// trailing log slot exclusively.
    pub fn begin<I, S>(&mut self, lines: I, start_ms: u64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cancel();
        self.pending.extend(lines.into_iter().map(Into::into));
        self.next_due = start_ms;
    }

    /// Apply every step due at or before `now_ms`. Returns the number of
    /// partial strings written.
    pub fn advance(&mut self, now_ms: u64, log: &mut OutputLog) -> usize {
        let mut steps = 0;
        while self.next_due <= now_ms {
            if self.active.is_none() {
                match self.pending.pop_front() {
                    Some(text) => {
                        log.push(OutputLine::output(String::new()));
                        self.active = Some(Reveal::new(text));
                    },
                    None => break,
                }
            }
            let Some(reveal) = self.active.as_mut() else {
                break;
            };

            if let Some(prefix) = reveal.next() {
                log.set_last_content(prefix);
                steps += 1;
            }

            if reveal.is_finished() {
                self.active = None;
                self.lines_done += 1;
                self.next_due += self.line_gap_ms;
            } else {
                self.next_due += self.char_delay_ms;
            }
        }
        steps
    }

    /// Nothing queued and nothing in flight.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    /// Drop the queue and the reveal in flight. The partial line already in
    /// the log is left as it is.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.active = None;
    }

    /// Virtual time of the next step, or of the end of the last batch when
    /// idle.
    pub fn cursor_ms(&self) -> u64 {
        self.next_due
    }

    /// Lines fully revealed since construction.
    pub fn lines_done(&self) -> usize {
        self.lines_done
    }

    pub fn char_delay_ms(&self) -> u64 {
        self.char_delay_ms
    }
}
