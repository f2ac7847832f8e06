//! # Application State
//!
//! The single mutable source of truth for catalog, basket, order draft and
//! validation errors. Every mutation updates the state and then announces the
//! change on the event bus so views can re-render.
//!
//! Handlers of the change events receive full snapshots in the payload and
//! must not reach back into the state while it is being mutated.

use super::basket::{Basket, BasketAdd};
use super::order::{FormErrors, OrderDraft, OrderRequest};
use super::product::Product;
use crate::shop::events::{AppEvent, EventEmitter, FieldId};
use anyhow::Result;

#[derive(Debug)]
pub struct AppState {
    catalog: Vec<Product>,
    basket: Basket,
    order: OrderDraft,
    preview: Option<String>,
    form_errors: FormErrors,
    events: EventEmitter,
}

impl AppState {
    /// Create an empty state announcing changes on `events`
    pub fn new(events: EventEmitter) -> Self {
        Self {
            catalog: Vec::new(),
            basket: Basket::new(),
            order: OrderDraft::default(),
            preview: None,
            form_errors: FormErrors::default(),
            events,
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    /// Id of the product shown in the detail view
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.iter().find(|product| product.id == id)
    }

    /// Replace the catalog wholesale
    pub fn set_catalog(&mut self, items: Vec<Product>) {
        tracing::debug!("Catalog replaced with {} item(s)", items.len());
        self.catalog = items;
        self.events.emit(AppEvent::ItemsChanged {
            catalog: self.catalog.clone(),
        });
    }

    /// Put a product in the basket and its id in the order.
    ///
    /// Adding a product that is already there, or one without a price, leaves
    /// the basket untouched and emits nothing.
    pub fn add_to_basket(&mut self, product: Product) -> BasketAdd {
        let id = product.id.clone();
        let outcome = self.basket.add(product);
        match outcome {
            BasketAdd::Added => {
                tracing::debug!("Product '{}' added to basket", id);
                self.sync_order();
                self.emit_basket_changed();
            }
            BasketAdd::AlreadyPresent => {
                tracing::debug!("Product '{}' is already in the basket", id);
            }
            BasketAdd::Priceless => {
                tracing::warn!("Product '{}' has no price and cannot be bought", id);
            }
        }
        outcome
    }

    /// Take a product out of the basket. Always announces the resulting basket.
    pub fn remove_from_basket(&mut self, id: &str) -> bool {
        let removed = self.basket.remove(id).is_some();
        tracing::debug!("Remove '{}' from basket: removed={}", id, removed);
        self.sync_order();
        self.emit_basket_changed();
        removed
    }

    /// Whether a product with this id is in the basket
    pub fn contains(&self, id: &str) -> bool {
        self.basket.contains(id)
    }

    /// Sum of basket prices
    pub fn total(&self) -> u64 {
        self.basket.total()
    }

    /// Number of basket entries
    pub fn basket_count(&self) -> usize {
        self.basket.len()
    }

    /// Write one order field and re-validate the whole draft
    pub fn set_order_field(&mut self, field: FieldId, value: &str) -> bool {
        self.order.set_field(field, value);
        self.validate_order()
    }

    /// Recompute validation errors and announce them
    pub fn validate_order(&mut self) -> bool {
        self.sync_order();
        self.form_errors = self.order.validate();
        tracing::debug!("Order validated, errors on {:?}", self.form_errors.fields());
        self.events.emit(AppEvent::FormErrorsChanged {
            errors: self.form_errors.clone(),
        });
        self.form_errors.is_empty()
    }

    /// Record the previewed product and announce it
    pub fn set_preview(&mut self, product: Product) {
        self.preview = Some(product.id.clone());
        self.events.emit(AppEvent::PreviewChanged {
            product: Some(product),
        });
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
        self.events
            .emit(AppEvent::PreviewChanged { product: None });
    }

    /// Empty the basket, announcing each removed entry and then the empty basket
    pub fn clear_basket(&mut self) {
        let removed = self.basket.clear();
        tracing::debug!("Basket cleared, {} item(s) removed", removed.len());
        for product in removed {
            self.events
                .emit(AppEvent::BasketItemRemoved { id: product.id });
        }
        self.sync_order();
        self.emit_basket_changed();
    }

    /// Reset the order draft and announce the errors of the empty draft
    pub fn clear_order(&mut self) {
        self.order = OrderDraft::default();
        self.validate_order();
    }

    /// Build the order request from the current draft
    pub fn order_request(&mut self) -> Result<OrderRequest> {
        self.sync_order();
        if self.basket.is_empty() {
            anyhow::bail!("Cannot place an order with an empty basket");
        }
        self.order.to_request().ok_or_else(|| {
            anyhow::anyhow!(
                "Order is incomplete: missing {:?}",
                self.order.validate().fields()
            )
        })
    }

    fn sync_order(&mut self) {
        self.order.total = self.basket.total();
        self.order.items = self.basket.ids();
    }

    fn emit_basket_changed(&self) {
        self.events.emit(AppEvent::BasketChanged {
            items: self.basket.items().to_vec(),
            total: self.basket.total(),
        });
    }
}
