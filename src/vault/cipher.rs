//! AES-256-GCM encryption and decryption of credential records.
//!
//! The vault is stateless: each call derives its key from the master
//! password and the bundle's salt. A decryption failure is definitive
//! (wrong passphrase or tampering), never transient — no retry logic
//! belongs here.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;

use crate::error::OkxVaultError;
use crate::vault::bundle::CredentialBundle;
use crate::vault::kdf::{self, NONCE_SIZE, SALT_SIZE};
use crate::vault::record::CredentialRecord;

/// Encrypt a credential record under a master password.
///
/// Generates a fresh random salt and nonce from the OS CSPRNG on every call;
/// the `(salt, iv)` pair is never reused. The returned bundle is safe to
/// store at rest.
///
/// # Example
///
/// ```rust
/// use okx_vault_client::vault::{self, CredentialRecord};
///
/// # fn main() -> Result<(), okx_vault_client::OkxVaultError> {
/// let record = CredentialRecord::new("key", "secret", "passphrase");
/// let bundle = vault::encrypt("hunter2", &record)?;
/// assert_eq!(bundle.salt.len(), vault::SALT_SIZE);
/// assert_eq!(bundle.iv.len(), vault::NONCE_SIZE);
/// # Ok(())
/// # }
/// ```
pub fn encrypt(
    master_password: &str,
    record: &CredentialRecord,
) -> Result<CredentialBundle, OkxVaultError> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut iv);

    let key = kdf::derive_key(master_password, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| OkxVaultError::Encryption(e.to_string()))?;

    let plaintext = serde_json::to_vec(record)?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_slice())
        .map_err(|e| OkxVaultError::Encryption(e.to_string()))?;

    Ok(CredentialBundle {
        salt: salt.to_vec(),
        iv: iv.to_vec(),
        ciphertext,
    })
}

/// Decrypt a credential bundle with the master password it was encrypted under.
///
/// # Errors
///
/// - [`OkxVaultError::Decryption`] — authentication tag mismatch: wrong
///   passphrase, corrupted bundle, or tampering. Expected and user-facing.
/// - [`OkxVaultError::MalformedRecord`] — the plaintext authenticated but is
///   not a valid credential record (version mismatch or corruption upstream
///   of encryption).
pub fn decrypt(
    master_password: &str,
    bundle: &CredentialBundle,
) -> Result<CredentialRecord, OkxVaultError> {
    // A nonce of the wrong size can never have come from encrypt().
    if bundle.iv.len() != NONCE_SIZE {
        return Err(OkxVaultError::Decryption);
    }

    let key = kdf::derive_key(master_password, &bundle.salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| OkxVaultError::Encryption(e.to_string()))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&bundle.iv), bundle.ciphertext.as_slice())
        .map_err(|_| OkxVaultError::Decryption)?;

    serde_json::from_slice(&plaintext).map_err(|e| OkxVaultError::MalformedRecord(e.to_string()))
}
