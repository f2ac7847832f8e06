//! # Event Bus
//!
//! Central event distribution for the storefront using the observer pattern.
//! Subscriptions are keyed either by an exact event name or by a regular
//! expression matched against the name; both kinds live in one registry and
//! fire in registration order.
//!
//! Dispatch is synchronous. A handler may emit further events, subscribe or
//! unsubscribe; nested emits run to completion before the outer emit moves on
//! to its next handler.

use super::app_events::AppEvent;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Type alias for bus handlers to reduce complexity
pub type EventHandler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

/// What a subscription listens to
#[derive(Debug, Clone)]
pub enum EventKey {
    Name(String),
    Pattern(Regex),
}

impl EventKey {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            EventKey::Name(key) => key == name,
            EventKey::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        EventKey::Name(name.to_string())
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        EventKey::Name(name)
    }
}

impl From<Regex> for EventKey {
    fn from(pattern: Regex) -> Self {
        EventKey::Pattern(pattern)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Name(name) => f.write_str(name),
            EventKey::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

/// Handle returned by [`EventEmitter::on`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    key: EventKey,
    handler: EventHandler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

/// Shared publish/subscribe bus
///
/// Cloning yields another handle onto the same registry.
#[derive(Clone, Default)]
pub struct EventEmitter {
    registry: Arc<Mutex<Registry>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a handler for an event name or pattern
    pub fn on<F>(&self, key: impl Into<EventKey>, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let key = key.into();
        let mut registry = self.registry();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        tracing::trace!("Subscribing {:?} to '{}'", id, key);
        registry.subscriptions.push(Subscription {
            id,
            key,
            handler: Arc::new(handler),
        });
        id
    }

    /// Remove a previously registered handler
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry();
        let before = registry.subscriptions.len();
        registry.subscriptions.retain(|sub| sub.id != id);
        before != registry.subscriptions.len()
    }

    /// Deliver an event to every matching handler
    pub fn emit(&self, event: AppEvent) {
        let name = event.name();

        // Collect first so handlers can re-enter the bus
        let handlers: Vec<EventHandler> = self
            .registry()
            .subscriptions
            .iter()
            .filter(|sub| sub.key.matches(name))
            .map(|sub| Arc::clone(&sub.handler))
            .collect();

        tracing::debug!("Emitting '{}' to {} handler(s)", name, handlers.len());

        for handler in handlers {
            handler(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry().subscriptions.len()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::events::types::{FieldChange, FieldId};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn event_bus_should_deliver_to_exact_name() {
        let bus = EventEmitter::new();
        let (log, clone) = recorder();

        bus.on("basket:open", move |event| {
            clone.lock().unwrap().push(event.name().to_string());
        });

        bus.emit(AppEvent::BasketOpen);
        bus.emit(AppEvent::OrderOpen);

        assert_eq!(*log.lock().unwrap(), vec!["basket:open".to_string()]);
    }

    #[test]
    fn event_bus_should_deliver_to_pattern_subscriptions() {
        let bus = EventEmitter::new();
        let (log, clone) = recorder();

        bus.on(Regex::new(r"^modal:").unwrap(), move |event| {
            clone.lock().unwrap().push(event.name().to_string());
        });

        bus.emit(AppEvent::ModalOpen);
        bus.emit(AppEvent::BasketOpen);
        bus.emit(AppEvent::ModalClose);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["modal:open".to_string(), "modal:close".to_string()]
        );
    }

    #[test]
    fn event_bus_should_interleave_keys_in_subscription_order() {
        let bus = EventEmitter::new();
        let (log, _) = recorder();

        let first = log.clone();
        bus.on("order:open", move |_| first.lock().unwrap().push("exact-1".into()));
        let second = log.clone();
        bus.on(Regex::new(r"open$").unwrap(), move |_| {
            second.lock().unwrap().push("pattern".into())
        });
        let third = log.clone();
        bus.on("order:open", move |_| third.lock().unwrap().push("exact-2".into()));

        bus.emit(AppEvent::OrderOpen);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "exact-1".to_string(),
                "pattern".to_string(),
                "exact-2".to_string()
            ]
        );
    }

    #[test]
    fn emit_without_subscribers_should_be_noop() {
        let bus = EventEmitter::new();
        bus.emit(AppEvent::ContactsSubmit);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn off_should_remove_only_that_handler() {
        let bus = EventEmitter::new();
        let (log, _) = recorder();

        let a = log.clone();
        let id = bus.on("modal:open", move |_| a.lock().unwrap().push("a".into()));
        let b = log.clone();
        bus.on("modal:open", move |_| b.lock().unwrap().push("b".into()));

        assert!(bus.off(id));
        assert!(!bus.off(id));
        bus.emit(AppEvent::ModalOpen);

        assert_eq!(*log.lock().unwrap(), vec!["b".to_string()]);
    }

    #[test]
    fn nested_emits_should_run_depth_first() {
        let bus = EventEmitter::new();
        let (log, _) = recorder();

        let inner_bus = bus.clone();
        let a = log.clone();
        bus.on("order:open", move |_| {
            a.lock().unwrap().push("order:open start".into());
            inner_bus.emit(AppEvent::ModalOpen);
            a.lock().unwrap().push("order:open end".into());
        });
        let b = log.clone();
        bus.on("modal:open", move |_| b.lock().unwrap().push("modal:open".into()));
        let c = log.clone();
        bus.on("order:open", move |_| c.lock().unwrap().push("order:open second".into()));

        bus.emit(AppEvent::OrderOpen);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "order:open start".to_string(),
                "modal:open".to_string(),
                "order:open end".to_string(),
                "order:open second".to_string(),
            ]
        );
    }

    #[test]
    fn handler_subscribed_during_emit_should_miss_current_event() {
        let bus = EventEmitter::new();
        let (log, _) = recorder();

        let inner_bus = bus.clone();
        let outer_log = log.clone();
        bus.on("basket:open", move |_| {
            let late = outer_log.clone();
            inner_bus.on("basket:open", move |_| late.lock().unwrap().push("late".into()));
        });

        bus.emit(AppEvent::BasketOpen);
        assert!(log.lock().unwrap().is_empty());

        bus.emit(AppEvent::BasketOpen);
        assert_eq!(*log.lock().unwrap(), vec!["late".to_string()]);
    }

    #[test]
    fn handlers_should_receive_payload() {
        let bus = EventEmitter::new();
        let received = Arc::new(Mutex::new(None));
        let clone = received.clone();

        bus.on("form:field-changed", move |event| {
            if let AppEvent::FieldChanged(change) = event {
                *clone.lock().unwrap() = Some(change.clone());
            }
        });

        bus.emit(AppEvent::FieldChanged(FieldChange::new(FieldId::Phone, "+7")));

        let change = received.lock().unwrap().clone().unwrap();
        assert_eq!(change.field, FieldId::Phone);
        assert_eq!(change.value, "+7");
    }

    #[test]
    fn clones_should_share_registry() {
        let bus = EventEmitter::new();
        let other = bus.clone();
        other.on("modal:close", |_| {});
        assert_eq!(bus.subscriber_count(), 1);
    }
}
