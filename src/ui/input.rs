use crate::calc::CalcIntent;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Intent(CalcIntent),
    Quit,
}

/// Maps a typed character to a calculator intent.
///
/// Shared by the interactive keypad and the one-shot `--keys` mode.
pub fn char_intent(c: char) -> Option<CalcIntent> {
    let intent = match c {
        '0'..='9' => CalcIntent::PressDigit(c as u8 - b'0'),
        '.' | ',' => CalcIntent::Dot,
        '+' => CalcIntent::Add,
        '-' => CalcIntent::Subtract,
        '*' | 'x' | 'X' => CalcIntent::Multiply,
        '/' => CalcIntent::Divide,
        '%' => CalcIntent::Percentage,
        '=' => CalcIntent::Equals,
        'n' | 'N' | '_' => CalcIntent::Negate,
        'c' | 'C' => CalcIntent::AllClear,
        _ => return None,
    };
    Some(intent)
}

pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyCommand::Quit),
        KeyCode::Enter => Some(KeyCommand::Intent(CalcIntent::Equals)),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyCommand::Intent(CalcIntent::AllClear)),
        KeyCode::Char(c) => char_intent(c).map(KeyCommand::Intent),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_command(key) {
        Some(KeyCommand::Quit) => app.request_quit(),
        Some(KeyCommand::Intent(intent)) => app.dispatch(intent),
        None => {}
    }
}
