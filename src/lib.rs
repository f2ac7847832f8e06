//! # Larek - Terminal Storefront for WEB-LAREK
//!
//! Browse the catalog, collect a basket and place an order from the
//! terminal. Components talk only through an event bus:
//!
//! ```text
//! ┌─────────────┐   intents    ┌──────────────┐   mutations   ┌──────────┐
//! │    Views    │─────────────▶│ EventEmitter │──────────────▶│ AppState │
//! │             │              │              │               │          │
//! │ - Page      │◀─────────────│ - name keys  │◀──────────────│ - basket │
//! │ - Modal     │   updates    │ - patterns   │   *:changed   │ - order  │
//! │ - Forms     │              └──────────────┘               └──────────┘
//! └─────────────┘                     ▲
//!                                     │ responses, keys
//!                              ┌──────────────┐
//!                              │  Controller  │
//!                              │ - Event Loop │
//!                              │ - ApiService │
//!                              └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod shop;

// Re-export main types for easy access
pub use shop::*;
