//! # Mock I/O Implementations for Testing
//!
//! Pre-programmed input and a recording output so the controller can run
//! without a terminal.

use super::{EventStream, RenderStream, TerminalSize};
use crate::shop::views::LineStyle;
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Pre-programmed event source
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    Print(String, LineStyle),
    HideCursor,
    ShowCursor,
    Enter,
    Leave,
    Flush,
}

/// Shared view of everything a [`MockRenderStream`] recorded.
///
/// Stays readable after the stream itself was moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct ScreenLog {
    commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl ScreenLog {
    fn push(&self, command: RenderCommand) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text printed since the most recent screen clear
    pub fn last_frame(&self) -> Vec<String> {
        let commands = self.commands();
        let start = commands
            .iter()
            .rposition(|c| *c == RenderCommand::ClearScreen)
            .map(|i| i + 1)
            .unwrap_or(0);
        commands[start..]
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Print(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the most recent frame contains `needle`
    pub fn frame_contains(&self, needle: &str) -> bool {
        self.last_frame().iter().any(|text| text.contains(needle))
    }

    pub fn clear(&self) {
        self.commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Recording render stream
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    log: ScreenLog,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((100, 30))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            log: ScreenLog::default(),
            terminal_size: size,
        }
    }

    pub fn screen(&self) -> ScreenLog {
        self.log.clone()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.log.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.log.push(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn print_styled(&mut self, text: &str, style: LineStyle) -> Result<()> {
        self.log.push(RenderCommand::Print(text.to_string(), style));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.log.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.log.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter(&mut self) -> Result<()> {
        self.log.push(RenderCommand::Enter);
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.log.push(RenderCommand::Leave);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.log.push(RenderCommand::Flush);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_should_provide_events_in_order() {
        let mut stream = MockEventStream::new(vec![
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())),
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())),
        ]);

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("Expected key event, got {other:?}"),
        }
        assert_eq!(stream.remaining(), 1);
        stream.read().unwrap();

        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
        assert!(stream.read().is_err());
    }

    #[test]
    fn screen_log_should_survive_moving_the_stream() {
        let stream = MockRenderStream::new();
        let screen = stream.screen();

        let mut moved = stream;
        moved.clear_screen().unwrap();
        moved.print_styled("old", LineStyle::Normal).unwrap();
        moved.clear_screen().unwrap();
        moved.print_styled("Basket", LineStyle::Title).unwrap();

        assert_eq!(screen.last_frame(), vec!["Basket".to_string()]);
        assert!(screen.frame_contains("Bask"));
        assert!(!screen.frame_contains("old"));
    }
}
