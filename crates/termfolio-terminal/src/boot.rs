//! Loader shown before the terminal: typed-out boot messages with progress.

use termfolio_types::config::BootConfig;

use crate::clock::Clock;
use crate::output::OutputLog;
use crate::sequencer::Sequencer;

const BOOT_MESSAGES: [&str; 5] = [
    "Initializing system...",
    "Checking dependencies...",
    "Loading assets...",
    "Establishing connection...",
    "System ready!",
];

/// Plays the boot messages on a clock.
pub struct BootSequence<C: Clock> {
    clock: C,
    sequencer: Sequencer,
    log: OutputLog,
    total_chars: usize,
}

impl<C: Clock> BootSequence<C> {
    /// Start the sequence at the clock's current time.
    pub fn new(config: &BootConfig, clock: C) -> Self {
        let mut sequencer = Sequencer::new(config.char_delay_ms, config.message_gap_ms);
        sequencer.begin(BOOT_MESSAGES, clock.now_ms());
        let mut log = OutputLog::new();
        sequencer.advance(clock.now_ms(), &mut log);
        Self {
            clock,
            sequencer,
            log,
            total_chars: BOOT_MESSAGES.iter().map(|m| m.chars().count()).sum(),
        }
    }

    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.sequencer.advance(now, &mut self.log);
    }

    /// Every message fully typed.
    pub fn is_done(&self) -> bool {
        self.sequencer.is_idle()
    }

    /// Share of boot text revealed so far, 0 to 100.
    pub fn progress_percent(&self) -> u8 {
        if self.is_done() || self.total_chars == 0 {
            return 100;
        }
        let shown: usize = self.log.lines().iter().map(|l| l.content.chars().count()).sum();
        let pct = shown * 100 / self.total_chars;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    /// Messages typed so far, the last possibly partial.
    pub fn lines(&self) -> Vec<&str> {
        self.log.contents()
    }

    /// Whether a message is mid-reveal (drives the blinking cursor).
    pub fn is_typing(&self) -> bool {
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn boot(clock: &ManualClock) -> BootSequence<ManualClock> {
        BootSequence::new(&BootConfig::default(), clock.clone())
    }

    #[test]
    fn starts_with_empty_first_line() {
        let clock = ManualClock::new();
        let b = boot(&clock);
        assert_eq!(b.lines(), vec![""]);
        assert_eq!(b.progress_percent(), 0);
        assert!(!b.is_done());
    }

    #[test]
    fn pauses_between_messages() {
        let clock = ManualClock::new();
        let mut b = boot(&clock);
        let first_done = "Initializing system...".chars().count() as u64 * 50;
        clock.set(first_done);
        b.tick();
        assert_eq!(b.lines(), vec!["Initializing system..."]);
        clock.set(first_done + 499);
        b.tick();
        assert_eq!(b.lines().len(), 1);
        clock.set(first_done + 500);
        b.tick();
        assert_eq!(b.lines().len(), 2);
    }

    #[test]
    fn progress_is_monotonic_and_completes() {
        let clock = ManualClock::new();
        let mut b = boot(&clock);
        let mut last = 0;
        while !b.is_done() {
            clock.advance(25);
            b.tick();
            let p = b.progress_percent();
            assert!(p >= last);
            last = p;
        }
        assert_eq!(b.progress_percent(), 100);
        assert_eq!(b.lines(), BOOT_MESSAGES.to_vec());
        assert!(!b.is_typing());
    }
}
