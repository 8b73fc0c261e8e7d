//! Key bindings for the tokenizer console
//!
//! The console has a single always-editing input line, so there is no modal
//! key handling: every key maps straight to a [`KeyAction`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Semantic action derived from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor (Backspace)
    DeleteChar,
    /// Delete the character under the cursor (Delete)
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Tokenize the current input (Enter)
    Submit,
    /// Empty the input and the token pane (Esc, Ctrl+L)
    ClearInput,
    /// Switch to the next analysis mode and re-tokenize (Tab)
    CycleMode,
    /// Scroll the token pane (PageUp / PageDown)
    ScrollUp,
    ScrollDown,
    /// Toggle the help overlay (F1)
    ToggleHelp,
    /// Quit (Ctrl+C, Ctrl+Q)
    Quit,
    /// No action
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    // Release/repeat events are reported on some platforms; only presses count
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyAction::Quit,
        KeyCode::Char('l') if ctrl => KeyAction::ClearInput,
        KeyCode::Char('a') if ctrl => KeyAction::CursorHome,
        KeyCode::Char('e') if ctrl => KeyAction::CursorEnd,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => KeyAction::None,
        KeyCode::Char(c) => KeyAction::InsertChar(c),

        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::ClearInput,
        KeyCode::Tab => KeyAction::CycleMode,

        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Delete => KeyAction::DeleteForward,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,

        KeyCode::PageUp | KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::PageDown | KeyCode::Down => KeyAction::ScrollDown,

        KeyCode::F(1) => KeyAction::ToggleHelp,
        _ => KeyAction::None,
    }
}
