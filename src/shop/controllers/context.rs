//! # Application Context
//!
//! Owns everything the storefront shares: the event bus, the application
//! state, each view and the API handle. Event handlers capture clones of the
//! pieces they need instead of reaching for globals.

use crate::shop::events::EventEmitter;
use crate::shop::models::AppState;
use crate::shop::services::ApiHandle;
use crate::shop::views::{
    BasketView, CardView, Component, FormView, Line, ModalContent, ModalView, PageView,
    SuccessView,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Lock a shared component, recovering from a poisoned lock
pub(crate) fn lock<T>(shared: &Mutex<T>) -> MutexGuard<'_, T> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A rendered frame: the page and, when open, the modal
pub type Frame = (Vec<Line>, Option<Vec<Line>>);

#[derive(Clone)]
pub struct AppContext {
    pub events: EventEmitter,
    pub state: Arc<Mutex<AppState>>,
    pub page: Arc<Mutex<PageView>>,
    pub basket: Arc<Mutex<BasketView>>,
    pub preview: Arc<Mutex<Option<CardView>>>,
    pub order_form: Arc<Mutex<FormView>>,
    pub contacts_form: Arc<Mutex<FormView>>,
    pub success: Arc<Mutex<SuccessView>>,
    pub modal: Arc<Mutex<ModalView>>,
    pub api: ApiHandle,
}

impl AppContext {
    pub fn new(api: ApiHandle) -> Self {
        let events = EventEmitter::new();
        Self {
            state: Arc::new(Mutex::new(AppState::new(events.clone()))),
            page: Arc::new(Mutex::new(PageView::new())),
            basket: Arc::new(Mutex::new(BasketView::new())),
            preview: Arc::new(Mutex::new(None)),
            order_form: Arc::new(Mutex::new(FormView::order())),
            contacts_form: Arc::new(Mutex::new(FormView::contacts())),
            success: Arc::new(Mutex::new(SuccessView::new())),
            modal: Arc::new(Mutex::new(ModalView::new(events.clone()))),
            events,
            api,
        }
    }

    /// Content currently shown in the modal, if it is open
    pub fn modal_content(&self) -> Option<ModalContent> {
        lock(&self.modal).content()
    }

    /// Render the current page and modal
    pub fn frame(&self) -> Frame {
        let page = lock(&self.page).render();
        let modal = self.modal_content().map(|content| {
            let body = match content {
                ModalContent::Preview => lock(&self.preview)
                    .as_ref()
                    .map(Component::render)
                    .unwrap_or_default(),
                ModalContent::Basket => lock(&self.basket).render(),
                ModalContent::Order => lock(&self.order_form).render(),
                ModalContent::Contacts => lock(&self.contacts_form).render(),
                ModalContent::Success => lock(&self.success).render(),
            };
            lock(&self.modal).frame(body)
        });
        (page, modal)
    }
}
