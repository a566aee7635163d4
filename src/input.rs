//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Navigation mutates the app
//! directly; anything that starts a load is returned as a [`Command`] for the
//! main loop, which owns the loaders and the dispatch channel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// A key press that needs more than app state to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RefreshFeed,
    RetryImage,
}

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('r') => return Some(Command::RefreshFeed),
        KeyCode::Char('R') | KeyCode::Enter => return Some(Command::RetryImage),
        _ => {}
    }
    None
}
