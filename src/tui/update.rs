//! Pure state transitions: (Checklist, Action) → Transition.
//!
//! This is the core logic of the selector. Fully testable without a
//! terminal. Every action is accepted in every state; the ones that make
//! no sense right now return the state unchanged.

use super::state::{Action, Checklist, Transition};

/// Pure state transition function.
///
/// Takes ownership of the current state and hands back the next one.
/// Never fails and never moves the cursor out of bounds.
pub fn update(state: Checklist, action: &Action) -> Transition<Checklist> {
    match action {
        Action::MoveUp => Transition::Continue(move_up(state)),
        Action::MoveDown => Transition::Continue(move_down(state)),
        Action::Toggle => Transition::Continue(toggle(state)),
        Action::Quit => Transition::Quit(state),
        Action::Other => Transition::Continue(state),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Clamp at the top, no wraparound.
fn move_up(mut state: Checklist) -> Checklist {
    let cursor = state.cursor();
    if cursor > 0 {
        state.set_cursor(cursor - 1);
    }
    state
}

/// Clamp at the bottom, no wraparound. An empty list never moves.
fn move_down(mut state: Checklist) -> Checklist {
    let cursor = state.cursor();
    if cursor + 1 < state.items().len() {
        state.set_cursor(cursor + 1);
    }
    state
}

/// Flip membership of the focused row.
fn toggle(mut state: Checklist) -> Checklist {
    let cursor = state.cursor();
    if cursor >= state.items().len() {
        // Only reachable with an empty list.
        return state;
    }
    let selected = state.selected_mut();
    if !selected.remove(&cursor) {
        selected.insert(cursor);
    }
    state
}

// ============================================================================
// TESTS
// ============================================================================
