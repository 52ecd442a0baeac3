use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Close details, else clear the query, else quit
    Escape,
    MoveUp,
    MoveDown,
    PreviousPage,
    NextPage,
    /// Primary activation of the cursor row
    ToggleSelection,
    /// Secondary activation of the cursor row
    ShowDetails,
    UpdateQuery(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        // Row navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        // Page selector
        (KeyCode::Left, _) | (KeyCode::PageUp, _) => Action::PreviousPage,
        (KeyCode::Right, _) | (KeyCode::PageDown, _) => Action::NextPage,

        // Row activation
        (KeyCode::Enter, _) => Action::ToggleSelection,
        (KeyCode::Tab, _) => Action::ShowDetails,

        // Query input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateQuery(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
