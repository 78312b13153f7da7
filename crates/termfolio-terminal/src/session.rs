//! One interactive terminal: input buffer, submission state machine, and
//! the output log a view paints.
//!
//! A submission moves through `Idle -> Echoing -> Resolving -> Revealing ->
//! Idle`. Echoing and resolving complete inside [`Session::submit`];
//! revealing spans as many [`Session::tick`] calls as the typing effect
//! needs. A command's side effect runs once its last line is fully shown.

use std::collections::VecDeque;

use termfolio_types::config::{SubmitPolicy, TerminalConfig};
use termfolio_types::error::FolioError;
use termfolio_types::input::InputEvent;

use crate::clock::Clock;
use crate::command::normalize;
use crate::effects::{AssetHost, NullHost, SideEffect};
use crate::history::History;
use crate::output::{OutputLine, OutputLog};
use crate::registry::{CommandRegistry, Lookup, not_found_message};
use crate::sequencer::Sequencer;

/// Where the submission handler is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Echoing,
    Resolving,
    Revealing,
}

/// The command currently revealing its output.
#[derive(Debug)]
struct Job {
    /// Registered name, or `None` for an unknown command.
    name: Option<String>,
    effect: Option<SideEffect>,
}

/// A terminal instance backing one mounted view.
pub struct Session<C: Clock> {
    registry: CommandRegistry,
    config: TerminalConfig,
    clock: C,
    host: Box<dyn AssetHost>,
    log: OutputLog,
    input: String,
    history: History,
    sequencer: Sequencer,
    state: SessionState,
    job: Option<Job>,
    /// Submissions held back under [`SubmitPolicy::Queue`].
    queued: VecDeque<String>,
    torn_down: bool,
}

impl<C: Clock> Session<C> {
    /// Create a session with no asset host; download commands fall through
    /// to their (silent) failure path until one is attached.
    pub fn new(registry: CommandRegistry, config: TerminalConfig, clock: C) -> Self {
        let sequencer = Sequencer::new(config.char_delay_ms, config.line_gap_ms);
        let history = History::new(config.max_history);
        Self {
            registry,
            config,
            clock,
            host: Box::new(NullHost),
            log: OutputLog::new(),
            input: String::new(),
            history,
            sequencer,
            state: SessionState::Idle,
            job: None,
            queued: VecDeque::new(),
            torn_down: false,
        }
    }

    /// Attach the collaborator that performs downloads.
    pub fn with_host(mut self, host: Box<dyn AssetHost>) -> Self {
        self.host = host;
        self
    }

    // -- Input --

    /// Apply one input event. Only [`InputEvent::Submit`] evaluates the
    /// buffer.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::TextInput(ch) => {
                self.input.push(*ch);
            },
            InputEvent::Backspace => {
                self.input.pop();
            },
            InputEvent::Submit => self.submit(),
            InputEvent::HistoryPrev => {
                if let Some(entry) = self.history.prev(&self.input) {
                    self.input = entry;
                }
            },
            InputEvent::HistoryNext => {
                if let Some(entry) = self.history.next() {
                    self.input = entry;
                }
            },
            InputEvent::Complete => {
                let matches = self.registry.completions(&self.input);
                if let [only] = matches.as_slice() {
                    self.input = only.clone();
                }
            },
            InputEvent::ClearInput => self.input.clear(),
        }
    }

    /// Replace the pending input buffer.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// The pending (uncommitted) input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the pending input buffer.
    pub fn submit(&mut self) {
        let raw = self.input.clone();
        self.submit_line(&raw);
    }

    /// Submit `raw` as if typed and entered. Empty or whitespace-only input
    /// is ignored entirely.
    pub fn submit_line(&mut self, raw: &str) {
        if self.torn_down || raw.trim().is_empty() {
            return;
        }
        self.input.clear();
        self.history.push(raw.trim());

        if self.job.is_some() {
            match self.config.submit_policy {
                SubmitPolicy::Queue => {
                    log::debug!("queued '{raw}' behind running command");
                    self.queued.push_back(raw.to_string());
                    return;
                },
                SubmitPolicy::Ignore => {
                    log::debug!("ignored '{raw}' while revealing");
                    return;
                },
                SubmitPolicy::Interrupt => {
                    log::debug!("interrupting running command for '{raw}'");
                    self.sequencer.cancel();
                    self.job = None;
                    self.state = SessionState::Idle;
                },
            }
        }

        let now = self.clock.now_ms();
        self.start(raw, now);
        self.drive(now);
    }

    // -- Time --

    /// Advance the typing effect to the clock's current time, running side
    /// effects and queued submissions as they come due.
    pub fn tick(&mut self) {
        if self.torn_down {
            return;
        }
        let now = self.clock.now_ms();
        self.drive(now);
    }

    /// Stop everything. No further log mutation happens after this.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.sequencer.cancel();
        self.job = None;
        self.queued.clear();
        self.state = SessionState::Idle;
        self.torn_down = true;
        log::debug!("session torn down");
    }

    // -- Read-only view state --

    pub fn lines(&self) -> &[OutputLine] {
        self.log.lines()
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    /// Lines as the view paints them, with the output marker applied.
    pub fn display_lines(&self) -> Vec<String> {
        self.log
            .lines()
            .iter()
            .map(|l| l.render(&self.config.output_marker))
            .collect()
    }

    /// True while a command's output is being revealed.
    pub fn is_typing(&self) -> bool {
        self.state == SessionState::Revealing
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Submissions waiting for the running command to finish.
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    // -- State machine --

    /// Echo and resolve `raw`, then hand its lines to the sequencer
    /// starting at `start_ms`.
    fn start(&mut self, raw: &str, start_ms: u64) {
        self.state = SessionState::Echoing;
        let normalized = normalize(raw);
        self.log
            .push(OutputLine::input(format!("{}{normalized}", self.config.prompt)));

        self.state = SessionState::Resolving;
        let (lines, job) = match self.registry.lookup(raw) {
            Lookup::Found(cmd) => {
                let mut lines = cmd.output_lines().to_vec();
                let effect = cmd.side_effect().cloned();
                if let (Some(banner), Some(e)) = (&self.config.action_banner, &effect)
                    && !matches!(e, SideEffect::Clear)
                {
                    lines.push(banner.clone());
                }
                let job = Job {
                    name: Some(cmd.name().to_string()),
                    effect,
                };
                (lines, job)
            },
            Lookup::NotFound => {
                log::debug!("unknown command '{normalized}'");
                let job = Job {
                    name: None,
                    effect: None,
                };
                (vec![not_found_message(raw)], job)
            },
        };

        log::debug!(
            "revealing {} line(s) for {:?}",
            lines.len(),
            job.name.as_deref().unwrap_or("<unknown>")
        );
        self.sequencer.begin(lines, start_ms);
        self.job = Some(job);
        self.state = SessionState::Revealing;
    }

    /// Step the sequencer; finish the job when it goes idle and start the
    /// next queued submission on the same virtual timeline.
    fn drive(&mut self, now: u64) {
        loop {
            self.sequencer.advance(now, &mut self.log);
            if !self.sequencer.is_idle() {
                break;
            }
            let Some(job) = self.job.take() else {
                break;
            };
            self.finish(job);
            self.state = SessionState::Idle;

            match self.queued.pop_front() {
                Some(next) => {
                    let at = self.sequencer.cursor_ms();
                    self.start(&next, at);
                },
                None => break,
            }
        }
    }

    fn finish(&mut self, job: Job) {
        let Some(effect) = job.effect else {
            return;
        };
        let name = job.name.unwrap_or_default();
        let result = match effect {
            SideEffect::Clear => {
                self.log.clear();
                Ok(())
            },
            SideEffect::Download(download) => download.run(self.host.as_mut()),
            SideEffect::Action(action) => action(),
        };
        if let Err(e) = result {
            self.report_failure(&name, &e);
        }
    }

    fn report_failure(&mut self, name: &str, err: &FolioError) {
        log::error!("error executing command '{name}': {err}");
        if self.config.report_effect_errors {
            self.log
                .push(OutputLine::output(format!("error executing command: {name}")));
        }
    }
}
