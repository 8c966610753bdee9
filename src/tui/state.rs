//! Checklist state algebra: pure types, zero effects.
//!
//! These types define the whole state space of the selector. Fields are
//! private so the two invariants (cursor in bounds, selection only holds
//! valid indices) can only be touched by the transition function.

use std::collections::BTreeSet;

use crate::types::{SelectedItem, Selection, DEFAULT_TITLE};

// ============================================================================
// ENGINE STATE
// ============================================================================

/// The (items, cursor, selection) triple that fully determines a frame.
///
/// Compared by value: the driver redraws only when an update produced a
/// different `Checklist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    title: String,
    items: Vec<String>,
    cursor: usize,
    selected: BTreeSet<usize>,
}

impl Checklist {
    /// Start a session: cursor on the first item, nothing checked.
    pub fn new(items: Vec<String>) -> Self {
        Self::with_title(DEFAULT_TITLE, items)
    }

    /// Same as [`Checklist::new`] with a custom header line.
    pub fn with_title(title: impl Into<String>, items: Vec<String>) -> Self {
        Checklist {
            title: title.into(),
            items,
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Focused row index. Always `< items().len()` unless the list is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Checked row indices.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// The checked items with their labels, in list order.
    pub fn selection(&self) -> Selection {
        let selected = self
            .selected
            .iter()
            .filter_map(|&index| {
                self.items.get(index).map(|label| SelectedItem {
                    index,
                    label: label.clone(),
                })
            })
            .collect();
        Selection { selected }
    }

    // Crate-internal mutators used by the transition function only.

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub(crate) fn selected_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.selected
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps terminal events to Actions; anything it does
/// not recognize becomes [`Action::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up one row.
    MoveUp,
    /// Move cursor down one row.
    MoveDown,
    /// Flip the checkbox under the cursor.
    Toggle,
    /// End the session.
    Quit,
    /// Unrecognized input. Always a no-op.
    Other,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Both variants carry the state so the driver can keep rendering from
/// it and report it once the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S> {
    /// Keep running with this state.
    Continue(S),
    /// Stop the loop. The state is the final one.
    Quit(S),
}

impl<S> Transition<S> {
    /// Split into `(state, terminate)`.
    pub fn into_parts(self) -> (S, bool) {
        match self {
            Transition::Continue(state) => (state, false),
            Transition::Quit(state) => (state, true),
        }
    }

    pub fn state(&self) -> &S {
        match self {
            Transition::Continue(state) | Transition::Quit(state) => state,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Transition::Quit(_))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> Checklist {
        Checklist::new(vec!["Carrots".into(), "Celery".into(), "Cinnamon".into()])
    }

    #[test]
    fn new_checklist_starts_at_top_with_nothing_selected() {
        let list = market();
        assert_eq!(list.cursor(), 0);
        assert!(list.selected().is_empty());
        assert_eq!(list.title(), DEFAULT_TITLE);
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn selection_reports_labels_in_list_order() {
        let mut list = market();
        list.selected_mut().insert(2);
        list.selected_mut().insert(0);
        let selection = list.selection();
        let labels: Vec<&str> = selection.selected.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Carrots", "Cinnamon"]);
        assert_eq!(selection.selected[1].index, 2);
    }

    #[test]
    fn transition_into_parts_reports_termination() {
        let (state, quit) = Transition::Quit(market()).into_parts();
        assert!(quit);
        assert_eq!(state, market());

        let (_, quit) = Transition::Continue(market()).into_parts();
        assert!(!quit);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let cont = Transition::Continue(market());
        let quit = Transition::Quit(market());
        assert_ne!(cont, quit);
        assert_eq!(cont.state(), quit.state());
        assert!(quit.is_quit());
    }
}
