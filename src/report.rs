//! Result formatting for the end of a session.
//!
//! Pure functions: (result, OutputFormat) → String.
//! No I/O, no side effects.

use crate::error::Result;
use crate::types::{Order, OutputFormat, Selection};

/// Format the checked items for stdout.
pub fn format_selection(selection: &Selection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_selection_human(selection)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(selection)? + "\n"),
    }
}

/// Format a submitted order for stdout.
pub fn format_order(order: &Order, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("Burger: {}  -  Name: {}\n", order.burger, order.name)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(order)? + "\n"),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_selection_human(selection: &Selection) -> String {
    if selection.is_empty() {
        return "Nothing selected.\n".to_string();
    }

    let mut out = String::new();
    for item in &selection.selected {
        out.push_str(&format!("[x] {}\n", item.label));
    }
    out.push_str(&format!(
        "{} item{} selected\n",
        selection.selected.len(),
        if selection.selected.len() == 1 { "" } else { "s" }
    ));
    out
}

// ============================================================================
// TESTS
// ============================================================================
