//! Form state: pages of typed fields, one shown at a time.

use std::fmt;

// ============================================================================
// VALIDATION
// ============================================================================

/// Validation function for an input field: `Ok` to accept the value,
/// `Err(message)` to keep the user on the page.
#[derive(Clone, Copy)]
pub struct Validator(pub fn(&str) -> Result<(), String>);

impl Validator {
    pub fn check(&self, value: &str) -> Result<(), String> {
        (self.0)(value)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl Eq for Validator {}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Accepts anything.
pub fn accept_any(_value: &str) -> Result<(), String> {
    Ok(())
}

// ============================================================================
// FIELDS AND PAGES
// ============================================================================

/// A labelled option; the label is shown, the value is the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The one field a page holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Pick one option with a cursor.
    Select { options: Vec<Choice>, cursor: usize },
    /// Free text, checked by `validate` before the page can be left.
    Input { value: String, validate: Validator },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub field: Field,
    /// Message from the last failed validation, cleared on the next edit.
    pub error: Option<String>,
}

impl Page {
    pub fn select(title: impl Into<String>, options: Vec<Choice>) -> Self {
        Page {
            title: title.into(),
            field: Field::Select { options, cursor: 0 },
            error: None,
        }
    }

    pub fn input(title: impl Into<String>, validate: Validator) -> Self {
        Page {
            title: title.into(),
            field: Field::Input {
                value: String::new(),
                validate,
            },
            error: None,
        }
    }

    /// The page's current result: the focused option's value, or the text typed.
    pub fn value(&self) -> Option<&str> {
        match &self.field {
            Field::Select { options, cursor } => options.get(*cursor).map(|c| c.value.as_str()),
            Field::Input { value, .. } => Some(value.as_str()),
        }
    }

    /// Run this page's advance rule.
    pub fn validate(&self) -> Result<(), String> {
        match &self.field {
            Field::Select { options, cursor } => {
                if *cursor < options.len() {
                    Ok(())
                } else {
                    Err("nothing to choose from".to_string())
                }
            }
            Field::Input { value, validate } => validate.check(value),
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Last page passed validation.
    Submitted,
    /// User cancelled.
    Aborted,
}

/// A multi-page form. Pages are fixed; only their fields change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub(crate) pages: Vec<Page>,
    pub(crate) current: usize,
    pub(crate) status: FormStatus,
}

impl Form {
    pub fn new(pages: Vec<Page>) -> Self {
        Form {
            pages,
            current: 0,
            status: FormStatus::Editing,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Index of the page on screen.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Every page's value, once the form has been submitted.
    pub fn values(&self) -> Option<Vec<&str>> {
        if self.status != FormStatus::Submitted {
            return None;
        }
        self.pages.iter().map(Page::value).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
