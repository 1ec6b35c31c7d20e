//! Test helpers for sheet and demo app testing.
//!
//! Provides input constructors, a `TestBackend` harness for the demo app,
//! and a counting sheet fixture driven by synthetic `Instant`s.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use coversheet_config::SheetConfig;
use coversheet_tui::App;
use coversheet_tui::action::Action;
use coversheet_tui::sheet::{CoverSheet, HeightFactor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc::{Receiver, channel};

/// Shorthand for a millisecond duration.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a left mouse click at the given position.
pub fn mouse_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a mouse scroll event at the given position.
pub fn mouse_scroll(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Counts how many times a sheet reported a completed dismissal.
#[derive(Debug, Clone, Default)]
pub struct DismissCounter(Rc<Cell<usize>>);

impl DismissCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn callback(&self) -> impl FnMut() + 'static + use<> {
        let count = Rc::clone(&self.0);
        move || count.set(count.get() + 1)
    }
}

/// A sheet showing fixed text, with a dismissal counter.
pub fn text_sheet(
    height: HeightFactor,
    text: &'static str,
) -> (
    CoverSheet<Paragraph<'static>, impl FnMut() -> Paragraph<'static>, impl FnMut()>,
    DismissCounter,
) {
    let counter = DismissCounter::default();
    let sheet = CoverSheet::new(
        height,
        SheetConfig::default(),
        move || Paragraph::new(text),
        counter.callback(),
    );
    (sheet, counter)
}

/// Test harness for rendering the demo app on a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
    pub rx: Receiver<Action>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let (tx, rx) = channel(64);
        let app = App::new(SheetConfig::default(), tx);
        Self { app, terminal, rx }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Apply every action the sheets have sent back, as the event loop would.
    pub fn pump(&mut self, now: std::time::Instant) {
        while let Ok(action) = self.rx.try_recv() {
            self.app.update(action, now);
        }
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        output.push_str(&row_text(buffer, y));
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Text of a single buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area();
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol().chars().next().unwrap_or(' '))
        .collect()
}

/// The full area of a terminal of the given size.
pub fn screen(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height)
}
