//! Configuration for the terminal interpreter and the desktop front end.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! behavior of the original site. Files are TOML unless the extension is
//! `.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// What to do with a submission that arrives while a previous command is
/// still revealing its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitPolicy {
    /// Hold it and run it once the current command finishes.
    #[default]
    Queue,
    /// Cancel the current command and run the new one at once.
    Interrupt,
    /// Drop it.
    Ignore,
}

/// Where the resume lives and what to call the saved copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// Asset path tried first.
    pub path: String,
    /// Suggested filename for the saved copy.
    pub filename: String,
    /// Asset path opened externally when saving fails.
    pub fallback_path: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            path: "/Resume.pdf".to_string(),
            filename: "Resume.pdf".to_string(),
            fallback_path: "/assets/docs/Resume.pdf".to_string(),
        }
    }
}

/// An extra command declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub output: Vec<String>,
}

/// Interpreter behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay between revealed characters, in milliseconds.
    pub char_delay_ms: u64,
    /// Pause after each fully revealed line, in milliseconds.
    pub line_gap_ms: u64,
    /// Prefix of echoed input lines.
    pub prompt: String,
    /// Prefix of produced output lines when rendered.
    pub output_marker: String,
    pub submit_policy: SubmitPolicy,
    /// Append a visible line when a side effect and its fallback both fail.
    pub report_effect_errors: bool,
    /// Line revealed before a command's side effect runs (`clear` excluded).
    pub action_banner: Option<String>,
    pub max_history: usize,
    pub resume: ResumeConfig,
    /// Extra commands merged into the built-in table.
    pub commands: Vec<CommandDef>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 50,
            line_gap_ms: 0,
            prompt: "$ ".to_string(),
            output_marker: "> ".to_string(),
            submit_policy: SubmitPolicy::Queue,
            report_effect_errors: false,
            action_banner: None,
            max_history: 100,
            resume: ResumeConfig::default(),
            commands: Vec::new(),
        }
    }
}

/// Boot (loader) sequence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub enabled: bool,
    pub char_delay_ms: u64,
    /// Pause between boot messages.
    pub message_gap_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_delay_ms: 50,
            message_gap_ms: 500,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub dark_mode: bool,
    /// Directory that asset paths such as `/Resume.pdf` resolve against.
    pub asset_root: PathBuf,
    /// Where downloads are saved. `None` means the user's download directory.
    pub download_dir: Option<PathBuf>,
    /// Target frame interval of the front-end loop.
    pub frame_ms: u64,
    pub boot: BootConfig,
    pub terminal: TerminalConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            asset_root: PathBuf::from("public"),
            download_dir: None,
            frame_ms: 16,
            boot: BootConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FolioError::Config(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let cfg = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_toml(&text)?
        };
        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.terminal.max_history == 0 {
            return Err(FolioError::Config(
                "terminal.max_history must be at least 1".to_string(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(FolioError::Config("frame_ms must be at least 1".to_string()));
        }
        for def in &self.terminal.commands {
            if def.name.trim().is_empty() {
                return Err(FolioError::Config("command with empty name".to_string()));
            }
            if def.name.trim().to_lowercase() == "help" {
                return Err(FolioError::Config(
                    "command name 'help' is reserved".to_string(),
                ));
            }
        }
        Ok(())
    }
}
