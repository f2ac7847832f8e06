//! Product model
//!
//! Products arrive from the shop API and are never mutated afterwards;
//! a missing price marks an item that cannot be bought.

use serde::{Deserialize, Serialize};

/// A single catalog product as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    pub price: Option<u64>,
}

impl Product {
    /// Products without a price are shown but cannot join the basket
    pub fn is_priceless(&self) -> bool {
        self.price.is_none()
    }

    pub fn category_kind(&self) -> Category {
        Category::from_label(&self.category)
    }
}

/// List envelope returned by `GET /product`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub items: Vec<Product>,
    pub total: u64,
}

/// Known product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SoftSkill,
    Other,
    Additional,
    Button,
    HardSkill,
    Unknown,
}

impl Category {
    /// Map a category label to its kind.
    ///
    /// The live API serves Russian labels; English aliases are accepted for
    /// local fixtures.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "софт-скил" | "soft-skill" | "soft skill" => Category::SoftSkill,
            "другое" | "other" => Category::Other,
            "дополнительное" | "additional" => Category::Additional,
            "кнопка" | "button" => Category::Button,
            "хард-скил" | "hard-skill" | "hard skill" => Category::HardSkill,
            _ => Category::Unknown,
        }
    }

    /// Short tag shown next to the category label
    pub fn tag(self) -> &'static str {
        match self {
            Category::SoftSkill => "soft",
            Category::Other => "other",
            Category::Additional => "additional",
            Category::Button => "button",
            Category::HardSkill => "hard",
            Category::Unknown => "",
        }
    }
}

/// Format a price for display
pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{value} synapses"),
        None => "Priceless".to_string(),
    }
}
