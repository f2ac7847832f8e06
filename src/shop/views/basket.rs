//! Basket view
//!
//! Numbered basket entries, the running total and the checkout button, which
//! stays disabled while the basket is empty.

use super::card::CardView;
use super::{button, Component, Line, LineStyle};
use crate::shop::events::AppEvent;
use crate::shop::models::{format_price, Product};
use crossterm::event::{KeyCode, KeyEvent};

const EMPTY_BASKET: &str = "Basket is empty";

#[derive(Debug, Clone, Default)]
pub struct BasketView {
    items: Vec<CardView>,
    total: u64,
    selected: usize,
}

impl BasketView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with freshly numbered cards
    pub fn set_items(&mut self, products: Vec<Product>) {
        self.items = products
            .into_iter()
            .enumerate()
            .map(|(i, product)| CardView::basket(product, i + 1))
            .collect();
        self.clamp_selection();
    }

    /// Drop one card, e.g. while the basket is being cleared
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|card| card.id() != id);
        for (i, card) in self.items.iter_mut().enumerate() {
            card.set_index(i + 1);
        }
        self.clamp_selection();
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                self.items.get(self.selected).and_then(CardView::activate)
            }
            KeyCode::Enter if !self.is_empty() => Some(AppEvent::OrderOpen),
            _ => None,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

impl Component for BasketView {
    fn render(&self) -> Vec<Line> {
        let mut lines = vec![Line::new("Basket", LineStyle::Title), Line::blank()];

        if self.items.is_empty() {
            lines.push(Line::new(EMPTY_BASKET, LineStyle::Muted));
        } else {
            lines.extend(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(i, card)| card.row(i == self.selected)),
            );
        }

        lines.push(Line::blank());
        lines.push(Line::new(
            format!("Total: {}", format_price(Some(self.total))),
            LineStyle::Accent,
        ));
        lines.push(button("Checkout", !self.is_empty(), true));
        lines.push(Line::new("d remove  enter checkout  esc close", LineStyle::Muted));
        lines
    }
}
