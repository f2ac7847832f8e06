//! # Application Events
//!
//! The storefront event protocol. Views emit intents (`card:select`,
//! `basket:add`, ...), the application state emits change notifications
//! (`items:changed`, `basket:changed`, ...), and the presenter connects the two.

use super::types::FieldChange;
use crate::shop::models::{FormErrors, OrderResult, Product};

/// Every event that travels over the storefront bus
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Catalog was replaced
    ItemsChanged { catalog: Vec<Product> },

    /// A catalog card was chosen
    CardSelect { product: Product },

    /// Previewed product changed; `None` means the preview was dismissed
    PreviewChanged { product: Option<Product> },

    /// Full product details arrived and can be shown
    PreviewReady { product: Product, in_basket: bool },

    /// Basket view requested
    BasketOpen,

    /// Request to put a product in the basket
    BasketAdd { product: Product },

    /// Request to take a product out of the basket
    BasketDeleteCard { id: String },

    /// Basket contents changed
    BasketChanged { items: Vec<Product>, total: u64 },

    /// A single basket entry went away while the basket was cleared
    BasketItemRemoved { id: String },

    /// Validation result for the current order draft
    FormErrorsChanged { errors: FormErrors },

    /// A checkout form field was edited
    FieldChanged(FieldChange),

    /// First checkout step requested
    OrderOpen,

    /// Second checkout step requested
    ContactsOpen,

    /// Checkout completed by the user
    ContactsSubmit,

    /// The shop accepted the order
    OrderSuccess { result: OrderResult },

    /// Success screen dismissed
    SuccessClose,

    ModalOpen,
    ModalClose,
}

impl AppEvent {
    /// Canonical event name used for subscriptions
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::ItemsChanged { .. } => "items:changed",
            AppEvent::CardSelect { .. } => "card:select",
            AppEvent::PreviewChanged { .. } => "preview:changed",
            AppEvent::PreviewReady { .. } => "preview:ready",
            AppEvent::BasketOpen => "basket:open",
            AppEvent::BasketAdd { .. } => "basket:add",
            AppEvent::BasketDeleteCard { .. } => "basket:delete-card",
            AppEvent::BasketChanged { .. } => "basket:changed",
            AppEvent::BasketItemRemoved { .. } => "basket:item-removed",
            AppEvent::FormErrorsChanged { .. } => "formErrors:change",
            AppEvent::FieldChanged(_) => "form:field-changed",
            AppEvent::OrderOpen => "order:open",
            AppEvent::ContactsOpen => "contacts:open",
            AppEvent::ContactsSubmit => "contacts:submit",
            AppEvent::OrderSuccess { .. } => "order:success",
            AppEvent::SuccessClose => "success:close",
            AppEvent::ModalOpen => "modal:open",
            AppEvent::ModalClose => "modal:close",
        }
    }
}
