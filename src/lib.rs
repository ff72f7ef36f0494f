//! # OKX Vault Client
//!
//! Credential encryption and request signing for the OKX exchange REST API.
//!
//! ## Features
//!
//! - Passphrase-based credential vault: PBKDF2-SHA256 key derivation with a
//!   single pinned iteration count, AES-256-GCM authenticated encryption
//! - Bit-exact OKX request signing (HMAC-SHA256 over
//!   `timestamp + method + path + body`, standard base64)
//! - Pluggable bundle storage keyed by user id
//! - Async REST client for authenticated OKX endpoints with retries,
//!   tracing and a bounded request timeout
//!
//! ## Quick Start
//!
//! ```rust
//! use okx_vault_client::vault::{self, CredentialRecord};
//!
//! fn main() -> Result<(), okx_vault_client::OkxVaultError> {
//!     let record = CredentialRecord::new("api-key", "api-secret", "api-passphrase");
//!     let bundle = vault::encrypt("master password", &record)?;
//!     let restored = vault::decrypt("master password", &bundle)?;
//!     assert_eq!(record, restored);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod storage;
pub mod vault;

// Re-export commonly used types at crate root
pub use error::OkxVaultError;
pub use vault::{CredentialBundle, CredentialRecord};

/// Result type alias using OkxVaultError
pub type Result<T> = std::result::Result<T, OkxVaultError>;
