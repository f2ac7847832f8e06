//! # API Service
//!
//! Runs shop requests in the background. Each dispatched request becomes a
//! one-shot tokio task whose result is sent back through a channel that the
//! controller drains on every loop iteration.
//!
//! Requests are never cancelled or retried. When two requests of the same
//! kind overlap, both complete and the later completion is applied last.

use super::larek_api::LarekApi;
use crate::shop::models::{OrderRequest, OrderResult, Product};
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 16;

/// A request the storefront can make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Catalog,
    Product { id: String },
    Order(OrderRequest),
}

impl ApiRequest {
    pub fn describe(&self) -> String {
        match self {
            ApiRequest::Catalog => "GET /product".to_string(),
            ApiRequest::Product { id } => format!("GET /product/{id}"),
            ApiRequest::Order(_) => "POST /order".to_string(),
        }
    }
}

/// Message type for async API completions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Catalog(Vec<Product>),
    Product(Product),
    OrderPlaced(OrderResult),
    Failed { request: String, message: String },
}

/// Cloneable handle used by event handlers to start requests
#[derive(Debug, Clone)]
pub struct ApiHandle {
    api: LarekApi,
    sender: mpsc::Sender<ApiResponse>,
}

impl ApiHandle {
    /// Start a request in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, request: ApiRequest) {
        let api = self.api.clone();
        let sender = self.sender.clone();
        tracing::debug!("Dispatching {}", request.describe());

        tokio::spawn(async move {
            let description = request.describe();
            let outcome = match request {
                ApiRequest::Catalog => api.product_list().await.map(ApiResponse::Catalog),
                ApiRequest::Product { id } => {
                    api.product_item(&id).await.map(ApiResponse::Product)
                }
                ApiRequest::Order(order) => {
                    api.order_lots(&order).await.map(ApiResponse::OrderPlaced)
                }
            };

            let message = outcome.unwrap_or_else(|e| {
                tracing::error!("{} failed: {}", description, e);
                ApiResponse::Failed {
                    request: description,
                    message: e.to_string(),
                }
            });

            // Receiver might have been dropped on shutdown
            let _ = sender.send(message).await;
        });
    }
}

/// Owner of the completion channel
pub struct ApiService {
    handle: ApiHandle,
    response_receiver: mpsc::Receiver<ApiResponse>,
}

impl ApiService {
    pub fn new(api: LarekApi) -> Self {
        let (sender, response_receiver) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            handle: ApiHandle { api, sender },
            response_receiver,
        }
    }

    pub fn handle(&self) -> ApiHandle {
        self.handle.clone()
    }

    /// Next finished request, if any (non-blocking)
    pub fn poll_response(&mut self) -> Option<ApiResponse> {
        self.response_receiver.try_recv().ok()
    }

    /// Wait for the next finished request
    pub async fn next_response(&mut self) -> Option<ApiResponse> {
        self.response_receiver.recv().await
    }
}
