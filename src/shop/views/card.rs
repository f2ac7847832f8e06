//! Product cards
//!
//! The same product is shown three ways: as a row of the catalog, as the
//! detail preview inside the modal, and as a numbered basket entry.

use super::{button, Component, Line, LineStyle};
use crate::shop::events::AppEvent;
use crate::shop::models::{format_price, Category, Product};

const ADD_LABEL: &str = "Add to basket";
const IN_BASKET_LABEL: &str = "In basket";
const NOT_FOR_SALE_LABEL: &str = "Not for sale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Catalog,
    Preview,
    /// Basket entry with its 1-based position
    Basket { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    variant: CardVariant,
    product: Product,
    in_basket: bool,
}

impl CardView {
    pub fn catalog(product: Product) -> Self {
        Self {
            variant: CardVariant::Catalog,
            product,
            in_basket: false,
        }
    }

    pub fn preview(product: Product, in_basket: bool) -> Self {
        Self {
            variant: CardVariant::Preview,
            product,
            in_basket,
        }
    }

    pub fn basket(product: Product, index: usize) -> Self {
        Self {
            variant: CardVariant::Basket { index },
            product,
            in_basket: true,
        }
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Renumber a basket entry
    pub fn set_index(&mut self, index: usize) {
        if let CardVariant::Basket { .. } = self.variant {
            self.variant = CardVariant::Basket { index };
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.product.is_priceless() {
            NOT_FOR_SALE_LABEL
        } else if self.in_basket {
            IN_BASKET_LABEL
        } else {
            ADD_LABEL
        }
    }

    pub fn button_enabled(&self) -> bool {
        !self.product.is_priceless() && !self.in_basket
    }

    /// Intent produced when the card's action is triggered
    pub fn activate(&self) -> Option<AppEvent> {
        match self.variant {
            CardVariant::Catalog => Some(AppEvent::CardSelect {
                product: self.product.clone(),
            }),
            CardVariant::Preview if self.button_enabled() => Some(AppEvent::BasketAdd {
                product: self.product.clone(),
            }),
            CardVariant::Preview => None,
            CardVariant::Basket { .. } => Some(AppEvent::BasketDeleteCard {
                id: self.product.id.clone(),
            }),
        }
    }

    /// Single-line rendering used by the catalog and basket lists
    pub fn row(&self, selected: bool) -> Line {
        let marker = if selected { ">" } else { " " };
        let price = format_price(self.product.price);
        let text = match self.variant {
            CardVariant::Basket { index } => {
                format!("{marker} {index:>2}. {:<40} {:>16}", self.product.title, price)
            }
            _ => format!(
                "{marker} {:<16} {:<40} {:>16}",
                category_label(&self.product),
                self.product.title,
                price
            ),
        };
        let style = if selected {
            LineStyle::Selected
        } else if self.product.is_priceless() {
            LineStyle::Muted
        } else {
            LineStyle::Normal
        };
        Line::new(text, style)
    }
}

fn category_label(product: &Product) -> String {
    match product.category_kind() {
        Category::Unknown => product.category.clone(),
        kind => format!("[{}] {}", kind.tag(), product.category),
    }
}

impl Component for CardView {
    fn render(&self) -> Vec<Line> {
        match self.variant {
            CardVariant::Catalog | CardVariant::Basket { .. } => vec![self.row(false)],
            CardVariant::Preview => {
                let mut lines = vec![
                    Line::new(self.product.title.clone(), LineStyle::Title),
                    Line::new(category_label(&self.product), LineStyle::Muted),
                    Line::blank(),
                ];
                lines.extend(
                    self.product
                        .description
                        .lines()
                        .map(|text| Line::normal(text.to_string())),
                );
                lines.push(Line::new(self.product.image.clone(), LineStyle::Muted));
                lines.push(Line::blank());
                lines.push(Line::new(
                    format_price(self.product.price),
                    LineStyle::Accent,
                ));
                lines.push(button(self.button_label(), self.button_enabled(), true));
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::views::texts;

    fn product(price: Option<u64>) -> Product {
        Product {
            id: "c101".to_string(),
            title: "HEX-leaf".to_string(),
            category: "хард-скил".to_string(),
            description: "Remote work is fine".to_string(),
            image: "https://cdn/Leaf.svg".to_string(),
            price,
        }
    }

    #[test]
    fn catalog_card_should_select_product() {
        let card = CardView::catalog(product(Some(1450)));
        assert!(matches!(
            card.activate(),
            Some(AppEvent::CardSelect { product }) if product.id == "c101"
        ));
        let row = card.row(false).text;
        assert!(row.contains("HEX-leaf"));
        assert!(row.contains("1450 synapses"));
        assert!(row.contains("[hard]"));
    }

    #[test]
    fn preview_card_should_offer_add_until_in_basket() {
        let card = CardView::preview(product(Some(1450)), false);
        assert_eq!(card.button_label(), ADD_LABEL);
        assert!(matches!(card.activate(), Some(AppEvent::BasketAdd { .. })));

        let card = CardView::preview(product(Some(1450)), true);
        assert_eq!(card.button_label(), IN_BASKET_LABEL);
        assert!(!card.button_enabled());
        assert_eq!(card.activate(), None);
    }

    #[test]
    fn priceless_preview_should_not_be_buyable() {
        let card = CardView::preview(product(None), false);
        assert_eq!(card.button_label(), NOT_FOR_SALE_LABEL);
        assert_eq!(card.activate(), None);

        let lines = texts(&card.render());
        assert!(lines.contains(&"Priceless".to_string()));
        assert!(lines.contains(&"Remote work is fine".to_string()));
        assert!(lines.contains(&format!("[ {NOT_FOR_SALE_LABEL} ]")));
    }

    #[test]
    fn basket_card_should_request_deletion() {
        let mut card = CardView::basket(product(Some(1450)), 1);
        card.set_index(3);
        assert_eq!(card.variant(), CardVariant::Basket { index: 3 });
        assert!(card.row(true).text.contains(" 3. HEX-leaf"));
        assert_eq!(
            card.activate(),
            Some(AppEvent::BasketDeleteCard {
                id: "c101".to_string()
            })
        );
    }
}
