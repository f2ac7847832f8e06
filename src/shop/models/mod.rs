//! # Models Module
//!
//! Storefront data: products, the basket, the order draft and the
//! application state that ties them together.

pub mod app_state;
pub mod basket;
pub mod order;
pub mod product;

pub use app_state::AppState;
pub use basket::{Basket, BasketAdd};
pub use order::{FormErrors, OrderDraft, OrderRequest, OrderResult, PaymentMethod};
pub use product::{format_price, Category, Product, ProductList};
