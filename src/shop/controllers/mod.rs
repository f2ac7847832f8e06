//! # Controllers
//!
//! The presenter connects views and state through the bus; the application
//! controller drives input, API completions and redraws.

pub mod app_controller;
pub mod context;
pub mod presenter;

pub use app_controller::AppController;
pub use context::{AppContext, Frame};
pub use presenter::wire;
