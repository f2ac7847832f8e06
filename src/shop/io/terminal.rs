//! # Terminal I/O Implementations
//!
//! Production implementations of the I/O abstractions using crossterm.
//! All crossterm output code is isolated to this module.

use super::{EventStream, RenderStream, TerminalSize};
use crate::shop::views::LineStyle;
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Reads key and resize events from the real terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Event> {
        event::read().map_err(anyhow::Error::from)
    }
}

/// Renders to the real terminal through a buffered writer
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn style_color(style: LineStyle) -> (Color, bool) {
    match style {
        LineStyle::Normal => (Color::Reset, false),
        LineStyle::Title => (Color::White, true),
        LineStyle::Muted => (Color::DarkGrey, false),
        LineStyle::Accent => (Color::Cyan, false),
        LineStyle::Selected => (Color::Yellow, true),
        LineStyle::Error => (Color::Red, false),
        LineStyle::Disabled => (Color::DarkGrey, false),
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::All)).map_err(anyhow::Error::from)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.writer, cursor::MoveTo(x, y)).map_err(anyhow::Error::from)
    }

    fn print_styled(&mut self, text: &str, style: LineStyle) -> Result<()> {
        let (color, bold) = style_color(style);
        if bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.writer,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )
        .map_err(anyhow::Error::from)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Hide).map_err(anyhow::Error::from)
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Show).map_err(anyhow::Error::from)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        terminal::size().map_err(anyhow::Error::from)
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.writer, EnterAlternateScreen).map_err(anyhow::Error::from)
    }

    fn leave(&mut self) -> Result<()> {
        execute!(self.writer, LeaveAlternateScreen)?;
        terminal::disable_raw_mode().map_err(anyhow::Error::from)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(anyhow::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_print_should_contain_text() {
        let mut stream = TerminalRenderStream::with_writer(Vec::new());
        stream.print_styled("Basket", LineStyle::Title).unwrap();
        stream.flush().unwrap();

        let output = String::from_utf8(stream.writer).unwrap();
        assert!(output.contains("Basket"));
    }

    #[test]
    fn every_style_should_have_a_color() {
        assert_eq!(style_color(LineStyle::Error).0, Color::Red);
        assert!(style_color(LineStyle::Selected).1);
        assert!(!style_color(LineStyle::Muted).1);
    }
}
