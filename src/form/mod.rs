//! Multi-page form wizard, run by the same driver as the checklist.
//!
//! Organized like `tui`:
//! - `state`: pages, fields, validators
//! - `update`: pure transitions and key mapping
//! - `view`: pure rendering to a text frame
//!
//! The only form shipped is the burger order: pick a burger, then give a
//! name that passes validation.

pub mod state;
pub mod update;
pub mod view;

use crossterm::event::Event;

use crate::tui::run::Model;
use crate::tui::state::Transition;
use crate::tui::view::TextFrame;
use crate::types::Order;

pub use state::{Choice, Field, Form, FormStatus, Page, Validator};
pub use update::FormAction;

/// Rejects the one customer the shop won't serve.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name == "Frank" {
        return Err("sorry, we don't serve customers named Frank".to_string());
    }
    Ok(())
}

/// The burger order: a select page and a validated name page.
pub fn order_form() -> Form {
    Form::new(vec![
        Page::select(
            "Choose your burger",
            vec![
                Choice::new("Charmburger Classic", "classic"),
                Choice::new("ChickWich", "chickwich"),
                Choice::new("FishBurger", "fishburger"),
                Choice::new("CharmPossible Burger™", "charmpossible"),
            ],
        ),
        Page::input("What's your name?", Validator(validate_name)),
    ])
}

/// Read the order out of a submitted burger form.
pub fn order_from(form: &Form) -> Option<Order> {
    let values = form.values()?;
    match values.as_slice() {
        [burger, name] => Some(Order {
            burger: burger.to_string(),
            name: name.to_string(),
        }),
        _ => None,
    }
}

impl Model for Form {
    type Action = FormAction;

    fn map_event(&self, event: &Event) -> FormAction {
        update::map_event(self, event)
    }

    fn update(self, action: &FormAction) -> Transition<Self> {
        update::update(self, action)
    }

    fn frame(&self) -> TextFrame {
        view::form_frame(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::run::{Display, drive};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::io;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<TextFrame>,
    }

    impl Display for Recorder {
        fn show(&mut self, frame: &TextFrame) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn typed(text: &str) -> impl Iterator<Item = Event> + '_ {
        text.chars().map(|c| press(KeyCode::Char(c)))
    }

    #[test]
    fn frank_is_turned_away() {
        assert!(validate_name("Frank").is_err());
        assert!(validate_name("frank").is_ok());
        assert!(validate_name("").is_ok());
    }

    #[test]
    fn order_from_requires_submission() {
        assert_eq!(order_from(&order_form()), None);
    }

    #[test]
    fn full_order_through_the_driver() {
        let mut input: VecDeque<Event> = VecDeque::new();
        input.push_back(press(KeyCode::Char('j')));
        input.push_back(press(KeyCode::Char('j')));
        input.push_back(press(KeyCode::Enter));
        input.extend(typed("Frank"));
        input.push_back(press(KeyCode::Enter)); // rejected
        for _ in 0..5 {
            input.push_back(press(KeyCode::Backspace));
        }
        input.extend(typed("Jo"));
        input.push_back(press(KeyCode::Enter));

        let mut display = Recorder::default();
        let form = drive(order_form(), &mut input, &mut display).unwrap();

        assert!(input.is_empty());
        assert_eq!(
            order_from(&form),
            Some(Order {
                burger: "fishburger".into(),
                name: "Jo".into(),
            })
        );
        assert!(
            display
                .frames
                .iter()
                .any(|f| f.lines.iter().any(|l| l.contains("named Frank")))
        );
    }

    #[test]
    fn escape_aborts_through_the_driver() {
        let mut input: VecDeque<Event> = VecDeque::from([press(KeyCode::Esc)]);
        let mut display = Recorder::default();
        let form = drive(order_form(), &mut input, &mut display).unwrap();
        assert_eq!(form.status(), FormStatus::Aborted);
        assert_eq!(order_from(&form), None);
    }
}
