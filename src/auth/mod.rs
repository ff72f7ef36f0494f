//! Authentication for the OKX REST API.
//!
//! This module provides:
//! - HMAC-SHA256 request signing over the OKX prehash string
//! - ISO-8601 timestamp generation with millisecond precision

mod signature;
mod timestamp;

pub use signature::sign_request;
pub use timestamp::{FixedClock, SystemClock, TimestampProvider};
