//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked for, independent of how it was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrev,
    Increase,
    Decrease,
    NextPreset,
    PrevPreset,
    /// Every amplitude to zero.
    ZeroAll,
    /// Every amplitude back to its mode default.
    ResetDefaults,
    DepthUp,
    DepthDown,
    SavePreset,
}

/// Map a key press to an action. Key releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')).then_some(Action::Quit);
    }
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
        KeyCode::Right | KeyCode::Char('l') => Action::Increase,
        KeyCode::Left | KeyCode::Char('h') => Action::Decrease,
        KeyCode::Char('p') => Action::NextPreset,
        KeyCode::Char('P') => Action::PrevPreset,
        KeyCode::Char('r') => Action::ZeroAll,
        KeyCode::Char('d') => Action::ResetDefaults,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::DepthUp,
        KeyCode::Char('-') | KeyCode::Char('_') => Action::DepthDown,
        KeyCode::Char('s') => Action::SavePreset,
        _ => return None,
    };
    Some(action)
}

/// Help text listing the bindings.
pub const HELP: &str = "q quit  ↑↓ mode  ←→ amplitude  p/P preset  r zero  d defaults  +/- depth  s save";
