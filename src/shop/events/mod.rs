//! # Events Module
//!
//! Re-exports the event bus and the storefront event protocol.

pub mod app_events;
pub mod event_bus;
pub mod types;

pub use app_events::AppEvent;
pub use event_bus::{EventEmitter, EventHandler, EventKey, SubscriptionId};
pub use types::{FieldChange, FieldId, FormId};
