//! Credential vault for OKX API credentials.
//!
//! This module provides:
//! - Passphrase-based key derivation (PBKDF2-SHA256, pinned work factor)
//! - Authenticated encryption of a credential record (AES-256-GCM)
//! - The persisted `{salt, iv, ct}` bundle wire format
//! - An opt-in, time-bounded master password cache
//!
//! Encryption and decryption share one iteration-count constant,
//! [`PBKDF2_ITERATIONS`]. Client and server code importing this module
//! cannot disagree on the work factor, which would otherwise make bundles
//! undecryptable with the correct passphrase.

mod bundle;
mod cipher;
mod kdf;
mod master_cache;
mod record;

pub use bundle::CredentialBundle;
pub use cipher::{decrypt, encrypt};
pub use kdf::{KEY_SIZE, NONCE_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
pub use master_cache::MasterPasswordCache;
pub use record::CredentialRecord;
