//! # Storefront
//!
//! ```text
//!  key press ──▶ View ──intent──▶ EventEmitter ──▶ AppState ──changed──▶ Views
//!                                      │                                  │
//!                                      ▼                                  ▼
//!                                 ApiService ──response──▶ AppController ──▶ TerminalRenderer
//! ```

pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

pub use controllers::{AppContext, AppController};
pub use events::{AppEvent, EventEmitter};
pub use models::AppState;
pub use services::{ApiError, LarekApi};
