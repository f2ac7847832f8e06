//! Page view
//!
//! The storefront page: header with the basket counter and the catalog list.
//! While a modal is open the page is locked and ignores input.

use super::card::CardView;
use super::{Component, Line, LineStyle};
use crate::shop::events::AppEvent;
use crate::shop::models::Product;
use crossterm::event::{KeyCode, KeyEvent};

const SHOP_TITLE: &str = "WEB-LAREK";

#[derive(Debug, Clone, Default)]
pub struct PageView {
    catalog: Vec<CardView>,
    counter: usize,
    locked: bool,
    loaded: bool,
    selected: usize,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products.into_iter().map(CardView::catalog).collect();
        self.loaded = true;
        self.selected = self.selected.min(self.catalog.len().saturating_sub(1));
    }

    pub fn set_counter(&mut self, counter: usize) {
        self.counter = counter;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Translate a key press into an intent
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        if self.locked {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.catalog.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self.catalog.get(self.selected).and_then(CardView::activate),
            KeyCode::Char('b') => Some(AppEvent::BasketOpen),
            _ => None,
        }
    }
}

impl Component for PageView {
    fn render(&self) -> Vec<Line> {
        let mut lines = vec![
            Line::new(
                format!("{SHOP_TITLE}    basket: {}", self.counter),
                LineStyle::Title,
            ),
            Line::blank(),
        ];

        if !self.loaded {
            lines.push(Line::new("Loading catalog...", LineStyle::Muted));
            return lines;
        }
        if self.catalog.is_empty() {
            lines.push(Line::new("The catalog is empty", LineStyle::Muted));
            return lines;
        }

        lines.extend(
            self.catalog
                .iter()
                .enumerate()
                .map(|(i, card)| card.row(i == self.selected && !self.locked)),
        );
        lines.push(Line::blank());
        lines.push(Line::new(
            "j/k move  enter open  b basket  q quit",
            LineStyle::Muted,
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::views::texts;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn products() -> Vec<Product> {
        ["a", "b"]
            .iter()
            .map(|id| Product {
                id: id.to_string(),
                title: format!("Title {id}"),
                category: "другое".to_string(),
                description: String::new(),
                image: String::new(),
                price: Some(10),
            })
            .collect()
    }

    #[test]
    fn page_should_show_loading_until_catalog_arrives() {
        let mut page = PageView::new();
        assert!(texts(&page.render()).contains(&"Loading catalog...".to_string()));

        page.set_catalog(products());
        let lines = texts(&page.render());
        assert!(lines.iter().any(|l| l.contains("Title a")));
        assert!(lines.iter().any(|l| l.contains("Title b")));
    }

    #[test]
    fn page_should_move_selection_and_select_card() {
        let mut page = PageView::new();
        page.set_catalog(products());

        assert_eq!(page.handle_key(key(KeyCode::Down)), None);
        assert_eq!(page.handle_key(key(KeyCode::Down)), None);
        assert_eq!(page.selected(), 1);

        match page.handle_key(key(KeyCode::Enter)) {
            Some(AppEvent::CardSelect { product }) => assert_eq!(product.id, "b"),
            other => panic!("Expected CardSelect, got {other:?}"),
        }
    }

    #[test]
    fn locked_page_should_ignore_input() {
        let mut page = PageView::new();
        page.set_catalog(products());
        page.set_locked(true);

        assert_eq!(page.handle_key(key(KeyCode::Char('b'))), None);
        assert_eq!(page.handle_key(key(KeyCode::Enter)), None);

        page.set_locked(false);
        assert_eq!(page.handle_key(key(KeyCode::Char('b'))), Some(AppEvent::BasketOpen));
    }

    #[test]
    fn counter_should_appear_in_header() {
        let mut page = PageView::new();
        page.set_counter(3);
        assert_eq!(page.render()[0].text, "WEB-LAREK    basket: 3");
    }
}
