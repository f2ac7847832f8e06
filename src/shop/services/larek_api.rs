//! # Larek API
//!
//! Shop endpoints on top of [`ApiClient`]: catalog listing, product details
//! and order placement. Image paths are rewritten to absolute CDN URLs.

use super::api::{ApiClient, ApiError, PostMethod};
use crate::shop::models::{OrderRequest, OrderResult, Product, ProductList};

#[derive(Debug, Clone)]
pub struct LarekApi {
    api: ApiClient,
    cdn: String,
}

impl LarekApi {
    pub fn new(cdn: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
            cdn: cdn.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn cdn(&self) -> &str {
        &self.cdn
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// `GET /product`
    pub async fn product_list(&self) -> Result<Vec<Product>, ApiError> {
        let list: ProductList = self.api.get("/product").await?;
        tracing::info!("Catalog fetched: {} of {} item(s)", list.items.len(), list.total);
        Ok(list
            .items
            .into_iter()
            .map(|item| self.with_cdn_image(item))
            .collect())
    }

    /// `GET /product/{id}`
    pub async fn product_item(&self, id: &str) -> Result<Product, ApiError> {
        let item: Product = self.api.get(&format!("/product/{id}")).await?;
        Ok(self.with_cdn_image(item))
    }

    /// `POST /order`
    pub async fn order_lots(&self, order: &OrderRequest) -> Result<OrderResult, ApiError> {
        let result: OrderResult = self.api.post("/order", order, PostMethod::Post).await?;
        tracing::info!("Order '{}' accepted, total {}", result.id, result.total);
        Ok(result)
    }

    fn with_cdn_image(&self, mut product: Product) -> Product {
        product.image = self.image_url(&product.image);
        product
    }

    /// Absolute image URL for a path served by the CDN
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.cdn, path)
        } else {
            format!("{}/{}", self.cdn, path)
        }
    }
}
