//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! All decisions live in the pure layers.
//!
//! The loop is single-threaded: it blocks on the next terminal event,
//! applies it, redraws if anything changed, and repeats until the model
//! asks to quit. The input source and the display are traits so the same
//! loop runs against a scripted event list in tests.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::sync::Once;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::form::{order_form, order_from};
use crate::types::{Order, OrderConfig, SelectConfig, Selection};

use super::state::{Action, Checklist, Transition};
use super::update::update;
use super::view::{TextFrame, checklist_frame, paint};

// ============================================================================
// SEAMS
// ============================================================================

/// A state machine the driver can run.
///
/// `update` must be pure and total; `frame` must not mutate. The driver
/// compares states by value to decide whether to redraw.
pub trait Model: Clone + PartialEq + Sized {
    type Action: std::fmt::Debug;

    /// Translate a raw terminal event. Unknown input maps to a no-op action.
    fn map_event(&self, event: &Event) -> Self::Action;

    fn update(self, action: &Self::Action) -> Transition<Self>;

    fn frame(&self) -> TextFrame;
}

/// Where events come from. Blocks until one is available.
pub trait InputSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Where frames go. Each call replaces the whole screen.
pub trait Display {
    fn show(&mut self, frame: &TextFrame) -> io::Result<()>;
}

/// Replays a fixed list of events; running dry is an unexpected EOF.
impl InputSource for VecDeque<Event> {
    fn next_event(&mut self) -> io::Result<Event> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a checklist Action.
pub fn map_key(key: KeyEvent) -> Action {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Other,
    }
}

/// Map any terminal event. Only key presses count; releases, repeats on
/// platforms that report them, mouse and resize events are `Other`.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        _ => Action::Other,
    }
}

impl Model for Checklist {
    type Action = Action;

    fn map_event(&self, event: &Event) -> Action {
        map_event(event)
    }

    fn update(self, action: &Action) -> Transition<Self> {
        update(self, action)
    }

    fn frame(&self) -> TextFrame {
        checklist_frame(self)
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// Run a model until it quits, returning its final state.
///
/// Shows the initial frame, then for each event: map, update, and redraw
/// when the state changed, the model quit, or the terminal was resized.
/// Any input or display failure stops the loop with [`Error::RuntimeIo`].
pub fn drive<M, I, D>(mut model: M, input: &mut I, display: &mut D) -> Result<M>
where
    M: Model,
    I: InputSource + ?Sized,
    D: Display + ?Sized,
{
    display.show(&model.frame()).map_err(runtime_failure)?;

    loop {
        let event = input.next_event().map_err(runtime_failure)?;
        let action = model.map_event(&event);

        let before = model.clone();
        let (next, quit) = model.update(&action).into_parts();
        let redraw = quit || next != before || matches!(event, Event::Resize(..));
        model = next;
        debug!(?action, redraw, "applied action");

        if redraw {
            display.show(&model.frame()).map_err(runtime_failure)?;
        }
        if quit {
            info!("session ended by user");
            return Ok(model);
        }
    }
}

fn runtime_failure(err: io::Error) -> Error {
    error!(error = %err, "terminal I/O failed");
    Error::RuntimeIo(err)
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Blocking reader over the process terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Raw mode plus alternate screen, held for the lifetime of the value.
///
/// Dropping the session restores the terminal, so every exit path out of
/// the loop (quit, error, early return) leaves the shell usable.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Set up the terminal for TUI mode.
    pub fn start() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().map_err(Error::Startup)?;
        match enter_alternate_screen() {
            Ok(terminal) => Ok(TerminalSession { terminal }),
            Err(e) => {
                let _ = restore_terminal();
                Err(Error::Startup(e))
            }
        }
    }
}

impl Display for TerminalSession {
    fn show(&mut self, frame: &TextFrame) -> io::Result<()> {
        self.terminal.draw(|f| paint(frame, f))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            error!(error = %e, "failed to restore terminal");
        }
    }
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            // Best-effort terminal restoration
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Run the interactive checklist on the real terminal.
///
/// Returns what was checked when the user quit.
pub fn run_checklist(config: &SelectConfig) -> Result<Selection> {
    let checklist = Checklist::with_title(config.title.clone(), config.items.clone());
    info!(items = config.items.len(), "starting checklist session");

    let finished = {
        let mut session = TerminalSession::start()?;
        drive(checklist, &mut CrosstermInput, &mut session)?
    };

    let selection = finished.selection();
    info!(selected = selection.selected.len(), "checklist finished");
    Ok(selection)
}

/// Run the order form on the real terminal.
///
/// A form closed before the last page is submitted is [`Error::Aborted`].
pub fn run_order(_config: &OrderConfig) -> Result<Order> {
    info!("starting order form");

    let finished = {
        let mut session = TerminalSession::start()?;
        drive(order_form(), &mut CrosstermInput, &mut session)?
    };

    let order = order_from(&finished).ok_or(Error::Aborted)?;
    info!(burger = %order.burger, "order submitted");
    Ok(order)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use std::collections::BTreeSet;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn market() -> Checklist {
        Checklist::new(vec!["Carrots".into(), "Celery".into(), "Cinnamon".into()])
    }

    /// Records every frame it is asked to show.
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

    /// Accepts `ok` frames, then fails.
    struct BrokenDisplay {
        ok: usize,
    }

    impl Display for BrokenDisplay {
        fn show(&mut self, _frame: &TextFrame) -> io::Result<()> {
            if self.ok == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal detached"));
            }
            self.ok -= 1;
            Ok(())
        }
    }

    // -- Key mapping --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::Quit);
    }

    #[test]
    fn q_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Action::Quit);
    }

    #[test]
    fn vim_keys_map_to_movement() {
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(map_key(j), Action::MoveDown);
        assert_eq!(map_key(k), Action::MoveUp);
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(up), Action::MoveUp);
        assert_eq!(map_key(down), Action::MoveDown);
    }

    #[test]
    fn space_and_enter_toggle() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(space), Action::Toggle);
        assert_eq!(map_key(enter), Action::Toggle);
    }

    #[test]
    fn unmapped_key_is_other() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Action::Other);
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(c), Action::Other);
    }

    #[test]
    fn non_key_events_are_other() {
        assert_eq!(map_event(&Event::Resize(80, 24)), Action::Other);
        assert_eq!(map_event(&Event::FocusGained), Action::Other);
    }

    #[test]
    fn key_release_is_other() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(&Event::Key(release)), Action::Other);
        assert_eq!(map_event(&press(KeyCode::Down)), Action::MoveDown);
    }

    // -- Driver --

    #[test]
    fn market_scenario_through_the_driver() {
        let mut input: VecDeque<Event> = VecDeque::from([
            press(KeyCode::Down),
            press(KeyCode::Char(' ')),
            press(KeyCode::Char('j')),
            press(KeyCode::Enter),
            press(KeyCode::Char('q')),
        ]);
        let mut display = Recorder::default();

        let finished = drive(market(), &mut input, &mut display).unwrap();

        assert_eq!(finished.cursor(), 2);
        assert_eq!(finished.selected(), &BTreeSet::from([1, 2]));
        // initial + four changes + quit
        assert_eq!(display.frames.len(), 6);
        let last = display.frames.last().unwrap();
        assert_eq!(
            last.body(),
            &["  [ ] Carrots", "  [x] Celery", "> [x] Cinnamon"]
        );
    }

    #[test]
    fn initial_frame_is_shown_before_any_input() {
        let mut input: VecDeque<Event> = VecDeque::from([press(KeyCode::Char('q'))]);
        let mut display = Recorder::default();
        drive(market(), &mut input, &mut display).unwrap();
        assert_eq!(display.frames[0], checklist_frame(&market()));
    }

    #[test]
    fn unchanged_state_is_not_redrawn() {
        let mut input: VecDeque<Event> = VecDeque::from([
            press(KeyCode::Up), // clamped, no change
            press(KeyCode::Char('x')),
            Event::FocusLost,
            press(KeyCode::Char('q')),
        ]);
        let mut display = Recorder::default();
        drive(market(), &mut input, &mut display).unwrap();
        // initial + quit only
        assert_eq!(display.frames.len(), 2);
    }

    #[test]
    fn resize_forces_a_redraw() {
        let mut input: VecDeque<Event> =
            VecDeque::from([Event::Resize(100, 40), press(KeyCode::Char('q'))]);
        let mut display = Recorder::default();
        let finished = drive(market(), &mut input, &mut display).unwrap();
        assert_eq!(finished, market());
        assert_eq!(display.frames.len(), 3);
    }

    #[test]
    fn quit_stops_consuming_input() {
        let mut input: VecDeque<Event> = VecDeque::from([
            press(KeyCode::Char('q')),
            press(KeyCode::Down),
            press(KeyCode::Down),
        ]);
        let mut display = Recorder::default();
        let finished = drive(market(), &mut input, &mut display).unwrap();
        assert_eq!(finished.cursor(), 0);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn input_running_dry_is_a_runtime_error() {
        let mut input: VecDeque<Event> = VecDeque::from([press(KeyCode::Down)]);
        let mut display = Recorder::default();
        let result = drive(market(), &mut input, &mut display);
        match result {
            Err(Error::RuntimeIo(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected RuntimeIo, got {:?}", other.map(|m| m.cursor())),
        }
        assert_eq!(display.frames.len(), 2);
    }

    #[test]
    fn display_failure_stops_the_loop() {
        let mut input: VecDeque<Event> = VecDeque::from([
            press(KeyCode::Down),
            press(KeyCode::Down),
            press(KeyCode::Char('q')),
        ]);
        let mut display = BrokenDisplay { ok: 1 };
        let result = drive(market(), &mut input, &mut display);
        assert!(matches!(result, Err(Error::RuntimeIo(_))));
        // The failing redraw happened after the first event; the rest is untouched.
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn drive_accepts_trait_objects() {
        let mut input: VecDeque<Event> = VecDeque::from([press(KeyCode::Char('q'))]);
        let mut display = Recorder::default();
        let input_ref: &mut dyn InputSource = &mut input;
        let display_ref: &mut dyn Display = &mut display;
        assert!(drive(market(), input_ref, display_ref).is_ok());
    }
}
