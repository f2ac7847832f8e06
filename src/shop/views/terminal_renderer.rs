//! # Terminal Renderer
//!
//! Draws a frame: the page fills the screen and an open modal is boxed on top
//! of it. Every frame is a full redraw; there is no diffing.

use super::{Line, LineStyle};
use crate::shop::io::{RenderStream, TerminalSize};
use anyhow::Result;

const MODAL_MARGIN: u16 = 2;

pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    terminal_size: TerminalSize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let terminal_size = stream.get_size()?;
        Ok(Self {
            stream,
            terminal_size,
        })
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        tracing::debug!("Terminal resized to {}x{}", width, height);
        self.terminal_size = (width, height);
    }

    /// Prepare the terminal for drawing
    pub fn initialize(&mut self) -> Result<()> {
        self.stream.enter()?;
        self.stream.hide_cursor()
    }

    /// Restore the terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave()
    }

    pub fn render_frame(&mut self, page: &[Line], modal: Option<&[Line]>) -> Result<()> {
        let (width, height) = self.terminal_size;
        self.stream.clear_screen()?;

        for (row, line) in page.iter().take(height as usize).enumerate() {
            self.stream.move_cursor(0, row as u16)?;
            self.stream
                .print_styled(&truncate(&line.text, width as usize), line.style)?;
        }

        if let Some(lines) = modal {
            self.render_modal(lines)?;
        }

        self.stream.flush()
    }

    fn render_modal(&mut self, lines: &[Line]) -> Result<()> {
        let (width, height) = self.terminal_size;
        let max_inner = width.saturating_sub(MODAL_MARGIN * 2 + 4) as usize;
        let inner = lines
            .iter()
            .map(|line| line.text.chars().count())
            .max()
            .unwrap_or(0)
            .min(max_inner);
        let box_width = inner as u16 + 4;
        let max_rows = height.saturating_sub(MODAL_MARGIN * 2 + 2) as usize;
        let visible = &lines[..lines.len().min(max_rows)];
        let box_height = visible.len() as u16 + 2;

        let left = width.saturating_sub(box_width) / 2;
        let top = height.saturating_sub(box_height) / 2;
        let border = format!("+{}+", "-".repeat(inner + 2));

        self.stream.move_cursor(left, top)?;
        self.stream.print_styled(&border, LineStyle::Muted)?;
        for (i, line) in visible.iter().enumerate() {
            let text = truncate(&line.text, inner);
            let padding = " ".repeat(inner - text.chars().count());
            self.stream.move_cursor(left, top + 1 + i as u16)?;
            self.stream.print_styled("| ", LineStyle::Muted)?;
            self.stream.print_styled(&text, line.style)?;
            self.stream.print_styled(&format!("{padding} |"), LineStyle::Muted)?;
        }
        self.stream.move_cursor(left, top + box_height - 1)?;
        self.stream.print_styled(&border, LineStyle::Muted)
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
