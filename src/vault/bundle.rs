//! The persisted encrypted credential bundle.

use serde::{Deserialize, Serialize};

/// An encrypted credential bundle, safe to store at rest.
///
/// Confidentiality depends only on the master password; every field here may
/// live in a publicly readable column. Serializes as
/// `{"salt": [..], "iv": [..], "ct": [..]}` with byte arrays as JSON integer
/// arrays, matching the dashboard's storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialBundle {
    /// 16-byte PBKDF2 salt, fresh per encryption
    pub salt: Vec<u8>,
    /// 12-byte AES-GCM nonce, fresh per encryption
    pub iv: Vec<u8>,
    /// AES-256-GCM ciphertext including the 16-byte authentication tag
    #[serde(rename = "ct")]
    pub ciphertext: Vec<u8>,
}
