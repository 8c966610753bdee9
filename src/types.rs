//! Domain types for checklist: configuration in, results out.

use serde::Serialize;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Header shown above the list when no title is given.
pub const DEFAULT_TITLE: &str = "What should we buy at the market?";

/// Items offered when none are given on the command line.
pub const DEFAULT_ITEMS: [&str; 3] = ["Carrots", "Celery", "Cinnamon"];

// ============================================================================
// RESULTS
// ============================================================================

/// One checked item, identified by its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedItem {
    pub index: usize,
    pub label: String,
}

/// Everything the user had checked when they quit, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub selected: Vec<SelectedItem>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// A submitted order from the form wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Option value of the chosen burger (e.g. "classic").
    pub burger: String,
    pub name: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for an interactive checklist session.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Header line above the items.
    pub title: String,
    /// Items to choose from. Fixed for the whole session.
    pub items: Vec<String>,
    pub format: OutputFormat,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
            format: OutputFormat::Human,
        }
    }
}

/// Configuration for the order form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderConfig {
    pub format: OutputFormat,
}
