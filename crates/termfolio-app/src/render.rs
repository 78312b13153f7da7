//! Paints the app state into the terminal with crossterm.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use termfolio_terminal::{Clock, LineKind};
use termfolio_types::theme::Theme;

use crate::app_state::{AppState, Mode};

const BLINK_MS: u64 = 500;
const EMPTY_HINT: &str = "Type 'help' for available commands...";

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
}

pub fn palette(theme: Theme) -> Palette {
    let accent = Color::Rgb {
        r: 199,
        g: 120,
        b: 221,
    };
    match theme {
        Theme::Dark => Palette {
            background: Color::Rgb { r: 5, g: 8, b: 22 },
            text: Color::Rgb {
                r: 209,
                g: 213,
                b: 219,
            },
            dim: Color::Rgb {
                r: 107,
                g: 114,
                b: 128,
            },
            accent,
        },
        Theme::Light => Palette {
            background: Color::Rgb {
                r: 243,
                g: 244,
                b: 246,
            },
            text: Color::Rgb {
                r: 31,
                g: 41,
                b: 55,
            },
            dim: Color::Rgb {
                r: 107,
                g: 114,
                b: 128,
            },
            accent,
        },
    }
}

/// The last `n` items of `lines`.
pub fn tail<T>(lines: &[T], n: usize) -> &[T] {
    &lines[lines.len().saturating_sub(n)..]
}

/// Cut `s` to at most `width` chars.
pub fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `[#####-----] 50%` style bar with `width` cells inside the brackets.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let pct = usize::from(percent.min(100));
    let filled = width * pct / 100;
    format!(
        "[{}{}] {pct}%",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

pub fn cursor_visible(now_ms: u64) -> bool {
    (now_ms / BLINK_MS) % 2 == 0
}

/// Draw one frame.
pub fn draw<W: Write, C: Clock + Clone>(
    out: &mut W,
    state: &AppState<C>,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let pal = palette(state.theme.theme());
    let width = usize::from(cols);
    let now = state.now_ms();

    queue!(
        out,
        SetBackgroundColor(pal.background),
        Clear(ClearType::All),
        MoveTo(0, 0)
    )?;

    if state.mode == Mode::Boot {
        draw_boot(out, state, &pal, width, rows, now)?;
    } else {
        draw_terminal(out, state, &pal, width, rows, now)?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn draw_boot<W: Write, C: Clock + Clone>(
    out: &mut W,
    state: &AppState<C>,
    pal: &Palette,
    width: usize,
    rows: u16,
    now: u64,
) -> std::io::Result<()> {
    let Some(boot) = &state.boot else {
        return Ok(());
    };
    let lines = boot.lines();
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        let mut text = format!("> {line}");
        if i == last && boot.is_typing() && cursor_visible(now) {
            text.push('_');
        }
        queue!(
            out,
            MoveTo(1, 1 + i as u16),
            SetForegroundColor(pal.accent),
            Print(truncate(&text, width.saturating_sub(2)))
        )?;
    }
    let bar = progress_bar(boot.progress_percent(), width.saturating_sub(10).min(40));
    queue!(
        out,
        MoveTo(1, rows.saturating_sub(2)),
        SetForegroundColor(pal.dim),
        Print(bar)
    )
}

fn draw_terminal<W: Write, C: Clock + Clone>(
    out: &mut W,
    state: &AppState<C>,
    pal: &Palette,
    width: usize,
    rows: u16,
    now: u64,
) -> std::io::Result<()> {
    let Some(session) = state.active_session() else {
        return Ok(());
    };
    let header = match state.mode {
        Mode::Skills => "ramish@portfolio ~/portfolio/skills",
        _ => "ramish@portfolio ~/portfolio/terminal",
    };
    queue!(
        out,
        MoveTo(0, 0),
        SetForegroundColor(pal.accent),
        Print(truncate(header, width)),
        MoveTo(0, 1),
        SetForegroundColor(pal.dim),
        Print(truncate("F1 section  F2 theme  Esc quit", width))
    )?;

    // Rows 0-1 header, last row input.
    let body_rows = usize::from(rows.saturating_sub(4));
    let lines = session.display_lines();
    if lines.is_empty() {
        queue!(
            out,
            MoveTo(0, 3),
            SetForegroundColor(pal.dim),
            Print(truncate(EMPTY_HINT, width))
        )?;
    } else {
        let shown = tail(&lines, body_rows);
        let kinds = tail(session.lines(), body_rows);
        for (i, (text, line)) in shown.iter().zip(kinds).enumerate() {
            let color = match line.kind {
                LineKind::Input => pal.accent,
                LineKind::Output => pal.text,
            };
            let mut text = text.clone();
            if i + 1 == shown.len() && session.is_typing() && cursor_visible(now) {
                text.push('_');
            }
            queue!(
                out,
                MoveTo(0, 3 + i as u16),
                SetForegroundColor(color),
                Print(truncate(&text, width))
            )?;
        }
    }

    let prompt = format!("{}{}", session.config().prompt, session.input());
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        SetForegroundColor(pal.accent),
        Print(truncate(&prompt, width))
    )
}

#[cfg(test)]
mod tests {
    use termfolio_terminal::{ManualClock, NullHost};
    use termfolio_types::config::FolioConfig;

    use super::*;

    #[test]
    fn tail_keeps_last_items() {
        let v = [1, 2, 3, 4];
        assert_eq!(tail(&v, 2), &[3, 4]);
        assert_eq!(tail(&v, 10), &v);
        assert!(tail(&v, 0).is_empty());
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }

    #[test]
    fn progress_bar_fills() {
        assert_eq!(progress_bar(0, 4), "[----] 0%");
        assert_eq!(progress_bar(50, 4), "[##--] 50%");
        assert_eq!(progress_bar(200, 4), "[####] 100%");
    }

    #[test]
    fn cursor_blinks() {
        assert!(cursor_visible(0));
        assert!(cursor_visible(499));
        assert!(!cursor_visible(500));
        assert!(cursor_visible(1000));
    }

    #[test]
    fn palettes_differ_by_theme() {
        let dark = palette(Theme::Dark);
        let light = palette(Theme::Light);
        assert_ne!(dark.background, light.background);
        assert_eq!(dark.accent, light.accent);
    }

    #[test]
    fn draws_hint_and_prompt() {
        let mut config = FolioConfig::default();
        config.boot.enabled = false;
        let mut state = AppState::new(&config, ManualClock::new(), Box::new(NullHost));
        state.hero.set_input("who");
        let mut buf = Vec::new();
        draw(&mut buf, &state, 80, 24).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains(EMPTY_HINT));
        assert!(text.contains("$ who"));
        assert!(text.contains("~/portfolio/terminal"));
    }

    #[test]
    fn draws_boot_progress() {
        let state = AppState::new(
            &FolioConfig::default(),
            ManualClock::new(),
            Box::new(NullHost),
        );
        let mut buf = Vec::new();
        draw(&mut buf, &state, 80, 24).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("0%"));
    }
}
