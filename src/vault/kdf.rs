//! PBKDF2-SHA256 key derivation for the credential vault.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// PBKDF2 iteration count (work factor).
///
/// Exactly one constant, shared by every encrypt and decrypt path. A bundle
/// encrypted under one iteration count cannot be decrypted under another,
/// so this must never be varied per call site.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Per-bundle salt size in bytes.
pub const SALT_SIZE: usize = 16;

/// AES-256-GCM nonce (IV) size in bytes.
pub const NONCE_SIZE: usize = 12;

/// Derive a 256-bit AES key from a master password and per-bundle salt.
pub(crate) fn derive_key(master_password: &str, salt: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(
        master_password.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key,
    );
    key
}
