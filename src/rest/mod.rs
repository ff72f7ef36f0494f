//! Async REST client for authenticated OKX endpoints.
//!
//! This module provides:
//! - [`OkxRestClient`] - HTTP client carrying the OK-ACCESS-* header set
//! - [`endpoints`] - endpoint path constants
//! - [`types`] - request/response types

pub mod endpoints;
pub mod types;

mod client;

pub use client::{OkxRestClient, OkxRestClientBuilder};
