//! # Services Module
//!
//! HTTP access to the shop API.

pub mod api;
pub mod api_service;
pub mod larek_api;

pub use api::{ApiClient, ApiError, PostMethod};
pub use api_service::{ApiHandle, ApiRequest, ApiResponse, ApiService};
pub use larek_api::LarekApi;
