//! termfolio desktop entry point.
//!
//! Plays the boot loader, then hands over to the hero terminal. F1 switches
//! between the hero and skills terminals, F2 toggles the theme and Esc quits.
//! Pass a config path as the first argument or in `TERMFOLIO_CONFIG`.

mod app_state;
mod host;
mod input;
mod render;

use std::fs::File;
use std::io::{self, Stdout, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use termfolio_terminal::SystemClock;
use termfolio_types::config::FolioConfig;
use termfolio_types::error::FolioError;

use crate::app_state::AppState;
use crate::host::DesktopHost;
use crate::input::InputResult;

/// Puts the terminal in raw mode on the alternate screen and restores it on
/// drop, including on early return.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> termfolio_types::error::Result<Self> {
        enable_raw_mode().map_err(|e| terminal_error("enabling raw mode", &e))?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)
            .map_err(|e| terminal_error("entering alternate screen", &e))?;
        Ok(Self { out })
    }
}

fn terminal_error(what: &str, err: &io::Error) -> FolioError {
    FolioError::Terminal(format!("{what}: {err}"))
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Log to a file; stdout belongs to the UI.
fn init_logging() -> Result<PathBuf> {
    let path = std::env::temp_dir().join("termfolio.log");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(path)
}

fn config_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok())
        .map(PathBuf::from)
}

fn main() -> Result<()> {
    let log_path = init_logging()?;
    log::info!("termfolio starting, logging to {}", log_path.display());

    let config = FolioConfig::load_or_default(config_path().as_deref())?;
    let frame = Duration::from_millis(config.frame_ms);
    let host = DesktopHost::from_config(&config);
    let mut state = AppState::new(&config, SystemClock::new(), Box::new(host));

    let mut guard = TerminalGuard::enter()?;

    'running: loop {
        if event::poll(frame)? {
            loop {
                let ev = event::read()?;
                if input::handle_event(&ev, &mut state) == InputResult::Quit {
                    break 'running;
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        state.tick();

        let (cols, rows) = crossterm::terminal::size()
            .map_err(|e| terminal_error("querying terminal size", &e))?;
        render::draw(&mut guard.out, &state, cols, rows)?;
    }

    state.teardown();
    drop(guard);
    log::info!("termfolio shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_errors_name_the_step() {
        let io_err = io::Error::new(io::ErrorKind::Unsupported, "not a tty");
        let err = terminal_error("enabling raw mode", &io_err);
        assert!(matches!(err, FolioError::Terminal(_)));
        assert_eq!(
            format!("{err}"),
            "terminal error: enabling raw mode: not a tty"
        );
    }
}
