//! # Storefront Application Controller
//!
//! Owns the main loop: drains finished API requests, turns key presses into
//! intents for the bus and redraws whenever something on the bus changed.

use super::context::{lock, AppContext};
use super::presenter;
use crate::config::Endpoints;
use crate::shop::events::AppEvent;
use crate::shop::io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
use crate::shop::services::{ApiRequest, ApiResponse, ApiService, LarekApi};
use crate::shop::views::{ModalContent, TerminalRenderer};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use regex::Regex;
use std::io::Stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    context: AppContext,
    service: ApiService,
    renderer: TerminalRenderer<RS>,
    event_stream: ES,
    dirty: Arc<AtomicBool>,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<Stdout>> {
    /// Controller bound to the real terminal
    pub fn new(endpoints: &Endpoints) -> Result<Self> {
        Self::with_io_streams(
            endpoints,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams
    pub fn with_io_streams(endpoints: &Endpoints, event_stream: ES, render_stream: RS) -> Result<Self> {
        tracing::debug!(
            "Creating controller for api '{}' and cdn '{}'",
            endpoints.api_url,
            endpoints.cdn_url
        );
        let api = LarekApi::new(&endpoints.cdn_url, &endpoints.api_url)?;
        let service = ApiService::new(api);
        let context = AppContext::new(service.handle());
        presenter::wire(&context);

        // Any event on the bus may change what is on screen
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        context.events.on(Regex::new(".*")?, move |_| {
            flag.store(true, Ordering::Relaxed);
        });

        let renderer = TerminalRenderer::with_render_stream(render_stream)?;

        Ok(Self {
            context,
            service,
            renderer,
            event_stream,
            dirty,
            should_quit: false,
        })
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request the catalog. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        self.context.api.dispatch(ApiRequest::Catalog);
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;
        self.start();
        self.render()?;

        let outcome = async {
            while !self.should_quit {
                self.tick().await?;
            }
            Ok::<(), anyhow::Error>(())
        }
        .await;

        // Restore the terminal even when the loop failed
        self.renderer.cleanup()?;
        outcome
    }

    /// One loop iteration: finished requests, at most one input event, redraw
    pub async fn tick(&mut self) -> Result<()> {
        tokio::task::yield_now().await;

        while let Some(response) = self.service.poll_response() {
            self.apply_response(response);
        }

        if self.event_stream.poll(POLL_INTERVAL)? {
            let event = self.event_stream.read()?;
            self.handle_event(event);
        }

        if self.dirty.swap(false, Ordering::Relaxed) {
            self.render()?;
        }
        Ok(())
    }

    /// Wait for the next finished request and apply it
    pub async fn wait_for_response(&mut self, timeout: Duration) -> Result<ApiResponse> {
        let response = tokio::time::timeout(timeout, self.service.next_response())
            .await
            .map_err(|_| anyhow::anyhow!("No API response within {:?}", timeout))?
            .ok_or_else(|| anyhow::anyhow!("API channel closed"))?;
        self.apply_response(response.clone());
        if self.dirty.swap(false, Ordering::Relaxed) {
            self.render()?;
        }
        Ok(response)
    }

    /// Feed a finished request into the state and the bus
    pub fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Catalog(items) => {
                tracing::info!("Catalog loaded with {} product(s)", items.len());
                lock(&self.context.state).set_catalog(items);
            }
            ApiResponse::Product(product) => {
                let in_basket = lock(&self.context.state).contains(&product.id);
                self.context
                    .events
                    .emit(AppEvent::PreviewReady { product, in_basket });
            }
            ApiResponse::OrderPlaced(result) => {
                tracing::info!("Order '{}' placed for {}", result.id, result.total);
                {
                    let mut state = lock(&self.context.state);
                    state.clear_basket();
                    state.clear_order();
                }
                self.context.events.emit(AppEvent::OrderSuccess { result });
            }
            ApiResponse::Failed { request, message } => {
                tracing::warn!("{} did not complete: {}", request, message);
                self.dirty.store(true, Ordering::Relaxed);
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(width, height) => {
                self.renderer.update_size(width, height);
                self.dirty.store(true, Ordering::Relaxed);
            }
            _ => {}
        }
    }

    /// Route a key press to the active view and emit the resulting intent
    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!("Key {:?}", key);
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let intent = match self.context.modal_content() {
            None if key.code == KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            None => lock(&self.context.page).handle_key(key),
            Some(_) if key.code == KeyCode::Esc => {
                lock(&self.context.modal).close();
                None
            }
            Some(ModalContent::Preview) => match key.code {
                KeyCode::Enter | KeyCode::Char('a') => lock(&self.context.preview)
                    .as_ref()
                    .and_then(|card| card.activate()),
                _ => None,
            },
            Some(ModalContent::Basket) => lock(&self.context.basket).handle_key(key),
            Some(ModalContent::Order) => lock(&self.context.order_form).handle_key(key),
            Some(ModalContent::Contacts) => lock(&self.context.contacts_form).handle_key(key),
            Some(ModalContent::Success) => lock(&self.context.success).handle_key(key),
        };

        if let Some(event) = intent {
            self.context.events.emit(event);
        }
        // Keys can move a selection without touching the bus
        self.dirty.store(true, Ordering::Relaxed);
    }

    pub fn render(&mut self) -> Result<()> {
        let (page, modal) = self.context.frame();
        self.renderer.render_frame(&page, modal.as_deref())
    }
}
