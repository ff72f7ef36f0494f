//! The plaintext credential record held by the vault.

use serde::{Deserialize, Serialize};

/// Decrypted OKX API credentials.
///
/// Exists only transiently in memory between decryption and request signing.
/// Never persist or log an instance of this type: the at-rest representation
/// is [`CredentialBundle`](crate::vault::CredentialBundle).
///
/// Field names serialize as `apiKey` / `secretKey` / `passphrase` to match
/// the bundle plaintext format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// The API key (public identifier issued by OKX)
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// The API secret used for request signing
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    /// The API passphrase (OKX's third factor, distinct from the master password)
    pub passphrase: String,
}

impl CredentialRecord {
    /// Create a new credential record.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
