//! TUI module for the interactive checklist.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Checklist, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering to text, plus painting text into a frame
//! - `run`: Effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod update;
pub mod view;

pub use run::{Display, InputSource, Model, drive, run_checklist, run_order};
pub use state::{Action, Checklist, Transition};
