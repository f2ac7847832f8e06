//! Basket model
//!
//! Insertion-ordered and keyed by product id, so adding the same product
//! twice is a no-op rather than a duplicate entry.

use super::product::Product;
use std::collections::HashSet;

/// Outcome of [`Basket::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketAdd {
    Added,
    AlreadyPresent,
    /// Priceless products never enter the basket
    Priceless,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<Product>,
    ids: HashSet<String>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product unless it is already present or has no price
    pub fn add(&mut self, product: Product) -> BasketAdd {
        if product.is_priceless() {
            return BasketAdd::Priceless;
        }
        if !self.ids.insert(product.id.clone()) {
            return BasketAdd::AlreadyPresent;
        }
        self.items.push(product);
        BasketAdd::Added
    }

    /// Remove a product by id, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        if !self.ids.remove(id) {
            return None;
        }
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Sum of prices of everything in the basket
    pub fn total(&self) -> u64 {
        self.items.iter().filter_map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Product ids in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Empty the basket, returning the removed entries in order
    pub fn clear(&mut self) -> Vec<Product> {
        self.ids.clear();
        std::mem::take(&mut self.items)
    }
}
