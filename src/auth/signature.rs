//! HMAC-SHA256 signature generation for OKX API authentication.
//!
//! OKX private endpoints require a signature computed as:
//! ```text
//! base64(HMAC-SHA256(timestamp + method + path + body, secret_key))
//! ```
//!
//! The prehash is the exact concatenation with no separators; `body` is the
//! exact JSON string that will be transmitted, or empty for bodyless
//! requests. The signature is sent in the `OK-ACCESS-SIGN` header, and the
//! same timestamp string must be sent in `OK-ACCESS-TIMESTAMP`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::OkxVaultError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for OKX's private API.
///
/// Pure function: identical inputs always produce an identical signature.
/// Any byte-level mismatch between the signed body and the transmitted body
/// invalidates the signature.
///
/// # Arguments
///
/// * `secret_key` - The decrypted API secret
/// * `timestamp` - ISO-8601 timestamp with milliseconds (e.g., `2024-01-01T00:00:00.000Z`)
/// * `method` - Uppercase HTTP method (`GET`, `POST`)
/// * `path` - Request path including any query string (e.g., `/api/v5/account/balance`)
/// * `body` - Exact request body, or `""` for bodyless requests
///
/// # Errors
///
/// [`OkxVaultError::InvalidSigningInput`] if the secret, timestamp, method
/// or path is empty. An empty body is valid.
///
/// # Example
///
/// ```rust
/// use okx_vault_client::auth::sign_request;
///
/// # fn main() -> Result<(), okx_vault_client::OkxVaultError> {
/// let signature = sign_request(
///     "testsecret",
///     "2024-01-01T00:00:00.000Z",
///     "GET",
///     "/api/v5/account/balance",
///     "",
/// )?;
/// assert_eq!(signature, "P/3IJHHqzHqimtEh/8E6L/cgG0W3k0VkOeuwkh9qjzA=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    secret_key: &str,
    timestamp: &str,
    method: &str,
    path: &str,
    body: &str,
) -> Result<String, OkxVaultError> {
    if secret_key.is_empty() {
        return Err(OkxVaultError::InvalidSigningInput(
            "secret key is empty".to_string(),
        ));
    }
    if timestamp.is_empty() {
        return Err(OkxVaultError::InvalidSigningInput(
            "timestamp is empty".to_string(),
        ));
    }
    if method.is_empty() {
        return Err(OkxVaultError::InvalidSigningInput(
            "method is empty".to_string(),
        ));
    }
    if path.is_empty() {
        return Err(OkxVaultError::InvalidSigningInput(
            "path is empty".to_string(),
        ));
    }

    // Compute HMAC-SHA256(timestamp + method + path + body, secret_key).
    let mut hmac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| OkxVaultError::InvalidSigningInput(format!("Invalid HMAC key: {e}")))?;
    hmac.update(timestamp.as_bytes());
    hmac.update(method.as_bytes());
    hmac.update(path.as_bytes());
    hmac.update(body.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}
