use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_terminal::Clock;
use termfolio_types::input::InputEvent;

use crate::app_state::{AppState, Mode};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// What a key press means to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Terminal(InputEvent),
    SwitchSection,
    ToggleTheme,
    Quit,
    Ignored,
}

/// Map a crossterm key to an app action.
pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => KeyAction::Terminal(InputEvent::ClearInput),
        KeyCode::Char(_) if ctrl => KeyAction::Ignored,
        KeyCode::Char(ch) => KeyAction::Terminal(InputEvent::TextInput(ch)),
        KeyCode::F(1) => KeyAction::SwitchSection,
        KeyCode::F(2) => KeyAction::ToggleTheme,
        KeyCode::Enter => KeyAction::Terminal(InputEvent::Submit),
        KeyCode::Backspace => KeyAction::Terminal(InputEvent::Backspace),
        KeyCode::Up => KeyAction::Terminal(InputEvent::HistoryPrev),
        KeyCode::Down => KeyAction::Terminal(InputEvent::HistoryNext),
        KeyCode::Tab => KeyAction::Terminal(InputEvent::Complete),
        _ => KeyAction::Ignored,
    }
}

/// Handle one crossterm event.
pub fn handle_event<C: Clock + Clone>(event: &Event, state: &mut AppState<C>) -> InputResult {
    let Event::Key(key) = event else {
        return InputResult::Continue;
    };
    let action = map_key(key);
    if action == KeyAction::Quit {
        return InputResult::Quit;
    }

    // Any other key skips the loader.
    if state.mode == Mode::Boot {
        if action != KeyAction::Ignored {
            state.finish_boot();
        }
        return InputResult::Continue;
    }

    match action {
        KeyAction::Terminal(ev) => {
            if let Some(session) = state.active_session_mut() {
                session.handle_input(&ev);
            }
        },
        KeyAction::SwitchSection => state.switch_section(),
        KeyAction::ToggleTheme => {
            state.theme.toggle();
        },
        KeyAction::Quit | KeyAction::Ignored => {},
    }
    InputResult::Continue
}
