//! Maps terminal events to game input.

use crate::game::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space, Up, Enter, or a mouse click.
    Jump,
    /// R, only honored after a crash.
    Restart,
    /// M toggles the jump bell.
    ToggleMute,
    /// Esc or Q.
    Quit,
    /// Any other key.
    Other,
}

/// Translate a crossterm event. Returns `None` for events that are not
/// key-down or pointer-down (releases, repeats, resizes, mouse moves).
pub fn map_event(event: &Event) -> Option<FlappyInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(FlappyInput::Jump),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<FlappyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => FlappyInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => FlappyInput::Restart,
        KeyCode::Char('m') | KeyCode::Char('M') => FlappyInput::ToggleMute,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => FlappyInput::Quit,
        _ => FlappyInput::Other,
    };
    Some(input)
}

/// Feed a batch of queued events to the session in arrival order.
///
/// Returns false as soon as one of them asks to quit; the rest are dropped.
pub fn dispatch_events<R: Rng>(
    session: &mut Session<R>,
    events: impl IntoIterator<Item = Event>,
) -> bool {
    for event in events {
        if let Some(input) = map_event(&event) {
            if !session.handle_input(input) {
                return false;
            }
        }
    }
    true
}
