//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands are plain data
//! (output lines plus an optional side effect) registered by name. A
//! [`Session`] normalizes submitted input, resolves it against the registry,
//! and reveals the resulting lines one character at a time on an injected
//! [`Clock`].

mod boot;
mod clock;
mod command;
mod effects;
mod history;
mod output;
mod portfolio;
mod registry;
mod sequencer;
mod session;
mod skills;

/// Typed-out loader messages with progress.
pub use boot::BootSequence;
/// Monotonic millisecond time sources.
pub use clock::{Clock, ManualClock, SystemClock};
/// A named command and its input normalization.
pub use command::{Command, normalize};
/// Side effects and the collaborator that performs downloads.
pub use effects::{AssetHost, Download, NullHost, SideEffect};
/// Bounded submission history with up/down recall.
pub use history::History;
/// The ordered display log.
pub use output::{LineKind, OutputLine, OutputLog};
/// The hero terminal's command table.
pub use portfolio::{build_hero_registry, help_lines, register_portfolio_commands};
/// Registry of available commands with lookup.
pub use registry::{CommandRegistry, Lookup, not_found_message};
/// Character-by-character reveal.
pub use sequencer::{Reveal, Sequencer};
/// One interactive terminal instance.
pub use session::{Session, SessionState};
/// The skills terminal's command table.
pub use skills::{SKILL_CATEGORIES, SkillCategory, build_skills_registry, register_skill_commands};
