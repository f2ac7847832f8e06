//! # Views Module
//!
//! Terminal views of the storefront. A view owns the text it displays, is
//! updated through setters, and renders to styled lines. Views never touch the
//! application state: key presses are translated into [`AppEvent`] intents
//! that the controller puts on the bus.
//!
//! [`AppEvent`]: crate::shop::events::AppEvent

pub mod basket;
pub mod card;
pub mod form;
pub mod modal;
pub mod page;
pub mod success;
pub mod terminal_renderer;

pub use basket::BasketView;
pub use card::{CardVariant, CardView};
pub use form::FormView;
pub use modal::{ModalContent, ModalState, ModalView};
pub use page::PageView;
pub use success::SuccessView;
pub use terminal_renderer::TerminalRenderer;

/// Visual role of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Title,
    Muted,
    Accent,
    Selected,
    Error,
    Disabled,
}

/// One rendered line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Normal)
    }

    pub fn blank() -> Self {
        Self::normal("")
    }
}

/// Anything that renders itself to lines
pub trait Component {
    fn render(&self) -> Vec<Line>;
}

/// Render a button label, e.g. `[ Checkout ]`
pub(crate) fn button(label: &str, enabled: bool, focused: bool) -> Line {
    let style = match (enabled, focused) {
        (false, _) => LineStyle::Disabled,
        (true, true) => LineStyle::Selected,
        (true, false) => LineStyle::Accent,
    };
    Line::new(format!("[ {label} ]"), style)
}

#[cfg(test)]
pub(crate) fn texts(lines: &[Line]) -> Vec<String> {
    lines.iter().map(|line| line.text.clone()).collect()
}
