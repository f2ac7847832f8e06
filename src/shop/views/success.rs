//! Success view shown after the shop accepted an order

use super::{button, Component, Line, LineStyle};
use crate::shop::events::AppEvent;
use crate::shop::models::format_price;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default)]
pub struct SuccessView {
    total: u64,
}

impl SuccessView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn handle_key(&self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Enter => Some(AppEvent::SuccessClose),
            _ => None,
        }
    }
}

impl Component for SuccessView {
    fn render(&self) -> Vec<Line> {
        vec![
            Line::new("Order placed", LineStyle::Title),
            Line::blank(),
            Line::normal(format!("Charged {}", format_price(Some(self.total)))),
            Line::blank(),
            button("Back to shopping", true, true),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn success_should_show_charged_total() {
        let mut success = SuccessView::new();
        success.set_total(2200);
        assert_eq!(success.render()[2].text, "Charged 2200 synapses");
    }

    #[test]
    fn enter_should_close_success() {
        let success = SuccessView::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        assert_eq!(success.handle_key(enter), Some(AppEvent::SuccessClose));
        assert_eq!(success.handle_key(other), None);
    }
}
