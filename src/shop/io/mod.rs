//! # I/O Abstraction Layer
//!
//! Trait abstractions for terminal input and output so the storefront can run
//! headless in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::queue!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ shared screen log
//! ```

use crate::shop::views::LineStyle;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, ScreenLog};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event source
pub trait EventStream: Send {
    /// Whether an event is ready within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Next event; only call after `poll` returned true
    fn read(&mut self) -> Result<Event>;
}

/// Output sink for rendered frames
pub trait RenderStream: Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Print text at the cursor in the given style
    fn print_styled(&mut self, text: &str, style: LineStyle) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    /// Switch into the alternate screen in raw mode
    fn enter(&mut self) -> Result<()>;

    /// Restore the normal screen and cooked mode
    fn leave(&mut self) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
