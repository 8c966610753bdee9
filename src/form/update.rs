//! Pure form transitions and key mapping.
//!
//! A page can only be left forward when its advance rule passes. Going
//! back is always allowed. Editing a page clears its last error.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::tui::state::Transition;

use super::state::{Field, Form, FormStatus};

/// Semantic form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Previous option on a select page.
    Up,
    /// Next option on a select page.
    Down,
    /// Type a character into an input page.
    Insert(char),
    /// Delete the last character of an input page.
    Backspace,
    /// Validate the page and move on (or submit on the last page).
    Submit,
    /// Return to the previous page.
    Back,
    /// Cancel the whole form.
    Abort,
    Other,
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a key to a form action. Letters are text on input pages and
/// navigation (`j`/`k`) on select pages.
pub fn map_key(form: &Form, key: KeyEvent) -> FormAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return FormAction::Abort;
    }

    let on_input = matches!(form.page().map(|p| &p.field), Some(Field::Input { .. }));

    match key.code {
        KeyCode::Esc => FormAction::Abort,
        KeyCode::Enter => FormAction::Submit,
        KeyCode::BackTab => FormAction::Back,
        KeyCode::Up => FormAction::Up,
        KeyCode::Down => FormAction::Down,
        KeyCode::Backspace if on_input => FormAction::Backspace,
        KeyCode::Char(c)
            if on_input
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormAction::Insert(c)
        }
        KeyCode::Char('k') => FormAction::Up,
        KeyCode::Char('j') => FormAction::Down,
        _ => FormAction::Other,
    }
}

pub fn map_event(form: &Form, event: &Event) -> FormAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(form, *key),
        _ => FormAction::Other,
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Pure form transition. Quits once the form is submitted or aborted.
pub fn update(mut form: Form, action: &FormAction) -> Transition<Form> {
    if form.status != FormStatus::Editing {
        return Transition::Quit(form);
    }

    match action {
        FormAction::Up => move_option(&mut form, -1),
        FormAction::Down => move_option(&mut form, 1),
        FormAction::Insert(c) => edit(&mut form, |value| value.push(*c)),
        FormAction::Backspace => edit(&mut form, |value| {
            value.pop();
        }),
        FormAction::Submit => submit(&mut form),
        FormAction::Back => {
            if form.current > 0 {
                form.current -= 1;
            }
        }
        FormAction::Abort => form.status = FormStatus::Aborted,
        FormAction::Other => {}
    }

    if form.status == FormStatus::Editing {
        Transition::Continue(form)
    } else {
        Transition::Quit(form)
    }
}

/// Clamped cursor move on a select page; ignored elsewhere.
fn move_option(form: &mut Form, delta: isize) {
    let Some(page) = form.pages.get_mut(form.current) else {
        return;
    };
    if let Field::Select { options, cursor } = &mut page.field {
        let last = options.len().saturating_sub(1);
        *cursor = cursor.saturating_add_signed(delta).min(last);
    }
}

/// Apply a text edit on an input page; ignored elsewhere.
fn edit(form: &mut Form, change: impl FnOnce(&mut String)) {
    let Some(page) = form.pages.get_mut(form.current) else {
        return;
    };
    if let Field::Input { value, .. } = &mut page.field {
        change(value);
        page.error = None;
    }
}

/// Advance rule: validate, then move to the next page or submit.
fn submit(form: &mut Form) {
    let Some(page) = form.pages.get_mut(form.current) else {
        return;
    };
    match page.validate() {
        Err(message) => {
            debug!(page = %page.title, %message, "validation failed");
            page.error = Some(message);
        }
        Ok(()) => {
            page.error = None;
            if form.current + 1 < form.pages.len() {
                form.current += 1;
            } else {
                form.status = FormStatus::Submitted;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
