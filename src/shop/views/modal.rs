//! Modal view
//!
//! A single modal slot layered over the page. Rendering content into it opens
//! it and announces `modal:open`; closing announces `modal:close`.
//!
//! The modal emits on the bus directly, so handlers of `modal:*` events must
//! not lock the modal itself.

use super::{Line, LineStyle};
use crate::shop::events::{AppEvent, EventEmitter};

/// What the modal is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalContent {
    Preview,
    Basket,
    Order,
    Contacts,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(ModalContent),
}

#[derive(Debug)]
pub struct ModalView {
    state: ModalState,
    events: EventEmitter,
}

impl ModalView {
    pub fn new(events: EventEmitter) -> Self {
        Self {
            state: ModalState::Closed,
            events,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn content(&self) -> Option<ModalContent> {
        match self.state {
            ModalState::Open(content) => Some(content),
            ModalState::Closed => None,
        }
    }

    /// Show `content`, replacing whatever was shown before
    pub fn render(&mut self, content: ModalContent) {
        tracing::debug!("Modal showing {:?}", content);
        self.state = ModalState::Open(content);
        self.events.emit(AppEvent::ModalOpen);
    }

    pub fn close(&mut self) {
        tracing::debug!("Modal closed");
        self.state = ModalState::Closed;
        self.events.emit(AppEvent::ModalClose);
    }

    /// Wrap content lines in the modal frame
    pub fn frame(&self, body: Vec<Line>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(Line::new("[x] esc", LineStyle::Muted));
        lines.extend(body);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn modal_with_log() -> (ModalView, Arc<Mutex<Vec<&'static str>>>) {
        let bus = EventEmitter::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let clone = log.clone();
        bus.on(regex::Regex::new("^modal:").unwrap(), move |event| {
            clone.lock().unwrap().push(event.name());
        });
        (ModalView::new(bus), log)
    }

    #[test]
    fn modal_should_start_closed() {
        let (modal, log) = modal_with_log();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn render_and_close_should_transition_and_emit() {
        let (mut modal, log) = modal_with_log();

        modal.render(ModalContent::Basket);
        assert_eq!(modal.content(), Some(ModalContent::Basket));

        modal.render(ModalContent::Order);
        assert_eq!(modal.state(), ModalState::Open(ModalContent::Order));

        modal.close();
        assert_eq!(modal.content(), None);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["modal:open", "modal:open", "modal:close"]
        );
    }

    #[test]
    fn frame_should_prepend_close_hint() {
        let (modal, _) = modal_with_log();
        let lines = modal.frame(vec![Line::normal("body")]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "body");
    }
}
