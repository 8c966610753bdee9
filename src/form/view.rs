//! Pure form rendering: Form → TextFrame.

use crate::tui::view::TextFrame;

use super::state::{Field, Form, Page};

/// Render the current page.
pub fn form_frame(form: &Form) -> TextFrame {
    let Some(page) = form.page() else {
        return TextFrame::new(vec![String::new(), String::new()]);
    };

    let total = form.pages().len();
    let mut lines = Vec::new();
    lines.push(if total > 1 {
        format!("{} ({}/{})", page.title, form.current() + 1, total)
    } else {
        page.title.clone()
    });
    lines.extend(page_body(page));
    if let Some(error) = &page.error {
        lines.push(String::new());
        lines.push(format!("* {}", error));
    }
    lines.push(help(page, form.current() + 1 == total).to_string());

    let frame = TextFrame::new(lines);
    match page.field {
        Field::Select { cursor, .. } => frame.with_focus(cursor),
        Field::Input { .. } => frame,
    }
}

fn page_body(page: &Page) -> Vec<String> {
    match &page.field {
        Field::Select { options, cursor } => options
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let marker = if i == *cursor { '>' } else { ' ' };
                format!("{} {}", marker, choice.label)
            })
            .collect(),
        Field::Input { value, .. } => vec![format!("> {}", value)],
    }
}

fn help(page: &Page, last: bool) -> &'static str {
    match (&page.field, last) {
        (Field::Select { .. }, false) => "[j/k] move  [Enter] next  [Shift+Tab] back  [Esc] quit",
        (Field::Select { .. }, true) => "[j/k] move  [Enter] submit  [Shift+Tab] back  [Esc] quit",
        (Field::Input { .. }, false) => "[Enter] next  [Shift+Tab] back  [Esc] quit",
        (Field::Input { .. }, true) => "[Enter] submit  [Shift+Tab] back  [Esc] quit",
    }
}
