//! Rendering: state to text, text to terminal.
//!
//! Two layers. `frame_lines` is the pure renderer: a lazy, restartable
//! sequence of lines computed from a borrowed `Checklist`. `paint` takes
//! any finished [`TextFrame`] and lays it out in a ratatui frame; it is
//! the only function here that touches a terminal buffer.

use std::iter::FusedIterator;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::state::Checklist;

/// Footer shown under the list.
pub const FOOTER: &str = "Press q to quit.";

// ============================================================================
// TEXT FRAME
// ============================================================================

/// A complete frame of text, ready to replace whatever is on screen.
///
/// The first line is the header and the last the footer; everything in
/// between is the body. `focus` is a body row that must stay visible
/// when the body is taller than the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    pub lines: Vec<String>,
    pub focus: Option<usize>,
}

impl TextFrame {
    pub fn new(lines: Vec<String>) -> Self {
        TextFrame { lines, focus: None }
    }

    pub fn with_focus(mut self, row: usize) -> Self {
        self.focus = Some(row);
        self
    }

    pub fn header(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn footer(&self) -> &str {
        match self.lines.len() {
            0 | 1 => "",
            n => self.lines[n - 1].as_str(),
        }
    }

    pub fn body(&self) -> &[String] {
        let n = self.lines.len();
        if n <= 2 {
            return &[];
        }
        &self.lines[1..n - 1]
    }

    /// The frame as one string, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

// ============================================================================
// CHECKLIST RENDERER
// ============================================================================

/// Lines of a checklist frame: header, one row per item, footer.
///
/// Borrows the state and computes each line on demand. A clone is an
/// independent iterator over the same state.
#[derive(Debug, Clone)]
pub struct FrameLines<'a> {
    state: &'a Checklist,
    next: usize,
}

/// Render a checklist as a lazy sequence of lines.
pub fn frame_lines(state: &Checklist) -> FrameLines<'_> {
    FrameLines { state, next: 0 }
}

/// Render a checklist as a single string.
pub fn frame_text(state: &Checklist) -> String {
    frame_lines(state).collect::<Vec<_>>().join("\n")
}

/// Render a checklist as a [`TextFrame`] focused on the cursor row.
pub fn checklist_frame(state: &Checklist) -> TextFrame {
    TextFrame::new(frame_lines(state).collect()).with_focus(state.cursor())
}

impl FrameLines<'_> {
    fn total(&self) -> usize {
        self.state.items().len() + 2
    }
}

impl Iterator for FrameLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let total = self.total();
        if self.next >= total {
            return None;
        }
        let pos = self.next;
        self.next += 1;

        let line = if pos == 0 {
            self.state.title().to_string()
        } else if pos == total - 1 {
            FOOTER.to_string()
        } else {
            render_row(self.state, pos - 1)
        };
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameLines<'_> {}

impl FusedIterator for FrameLines<'_> {}

/// One item row: `"> [x] Celery"`.
fn render_row(state: &Checklist, index: usize) -> String {
    let cursor = if state.cursor() == index { '>' } else { ' ' };
    let checked = if state.is_selected(index) { 'x' } else { ' ' };
    let label = state.items().get(index).map(String::as_str).unwrap_or("");
    format!("{} [{}] {}", cursor, checked, label)
}

// ============================================================================
// TERMINAL PAINTING
// ============================================================================

/// Paint a text frame into the terminal buffer.
///
/// Layout: header at the top, a blank row, the body, and the footer on
/// the bottom row. The body scrolls so the focus row stays visible.
pub fn paint(text: &TextFrame, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // body
        Constraint::Length(1), // spacer
        Constraint::Length(1), // footer
    ])
    .split(frame.area());

    frame.render_widget(Paragraph::new(text.header()), chunks[0]);
    frame.render_widget(Paragraph::new(text.footer()), chunks[4]);

    let body: Vec<Line> = text.body().iter().map(|l| Line::from(l.as_str())).collect();

    let visible_height = chunks[2].height as usize;
    let scroll_offset = match text.focus {
        Some(row) if visible_height > 0 && row >= visible_height => row - visible_height + 1,
        _ => 0,
    };

    let list = Paragraph::new(body).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, chunks[2]);
}

// ============================================================================
// TESTS
// ============================================================================
