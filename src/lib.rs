//! checklist: an interactive terminal checklist and a small form wizard.

pub mod error;
pub mod form;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
