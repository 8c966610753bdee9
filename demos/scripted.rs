//! Headless checklist session: replays a fixed key sequence and prints
//! every frame the driver would have drawn.
//!
//! Run with: cargo run --example scripted

use std::collections::VecDeque;
use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use checklist::report::format_selection;
use checklist::tui::view::TextFrame;
use checklist::tui::{Checklist, Display, drive};
use checklist::types::{OutputFormat, SelectConfig};

/// Prints frames to stdout instead of a terminal.
struct PrintFrames {
    count: usize,
}

impl Display for PrintFrames {
    fn show(&mut self, frame: &TextFrame) -> io::Result<()> {
        self.count += 1;
        println!("--- frame {} ---", self.count);
        println!("{}", frame.text());
        Ok(())
    }
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn main() {
    let config = SelectConfig::default();
    let checklist = Checklist::with_title(config.title.clone(), config.items.clone());

    let mut input: VecDeque<Event> = VecDeque::from([
        press(KeyCode::Down),
        press(KeyCode::Char(' ')),
        press(KeyCode::Down),
        press(KeyCode::Char(' ')),
        press(KeyCode::Char('q')),
    ]);
    let mut display = PrintFrames { count: 0 };

    match drive(checklist, &mut input, &mut display) {
        Ok(finished) => match format_selection(&finished.selection(), OutputFormat::Human) {
            Ok(out) => print!("\n{}", out),
            Err(e) => eprintln!("Error: {}", e),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
