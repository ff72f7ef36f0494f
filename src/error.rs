//! Error types for the OKX vault client library.

use thiserror::Error;

/// The main error type for all vault and client operations.
#[derive(Error, Debug)]
pub enum OkxVaultError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// AEAD encryption primitive failed
    ///
    /// Should not happen under correct usage; never retried.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// AEAD authentication tag mismatch: wrong passphrase or tampered bundle
    ///
    /// This failure is expected and common (mistyped master password) and is
    /// kept distinct from internal errors so callers can re-prompt instead of
    /// crashing.
    #[error("Decryption failed: incorrect passphrase or corrupted data")]
    Decryption,

    /// Decryption succeeded but the plaintext is not a valid credential record
    #[error("Malformed credential record: {0}")]
    MalformedRecord(String),

    /// Empty or missing signing input
    #[error("Invalid signing input: {0}")]
    InvalidSigningInput(String),

    /// OKX API returned an error code
    #[error("OKX API error: {0}")]
    Api(ApiError),

    /// Upstream returned a non-success HTTP status
    ///
    /// The status and body are propagated unchanged so callers can
    /// distinguish exchange-side rejections from local crypto failures.
    #[error("Upstream HTTP {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code from the exchange
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Missing required credentials
    #[error("Missing credentials: API key, secret and passphrase required for private endpoints")]
    MissingCredentials,

    /// Bundle storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// OKX API error code and message.
///
/// OKX returns errors in the response envelope as `{"code": "...", "msg": "..."}`
/// with HTTP 200, so they are parsed out of the body rather than the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric error code from OKX as a string (e.g., "50111")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_key(&self) -> bool {
        self.code == "50111"
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == "50113"
    }

    /// Check if this is a timestamp skew error (request expired).
    pub fn is_timestamp_expired(&self) -> bool {
        self.code == "50112" || self.code == "50102"
    }

    /// Check if this is an invalid passphrase error.
    pub fn is_invalid_passphrase(&self) -> bool {
        self.code == "50105"
    }
}

/// Known OKX error codes for pattern matching.
pub mod error_codes {
    /// Timestamp request expired.
    pub const TIMESTAMP_EXPIRED: &str = "50102";
    /// Invalid OK-ACCESS-PASSPHRASE.
    pub const INVALID_PASSPHRASE: &str = "50105";
    /// Invalid OK-ACCESS-KEY.
    pub const INVALID_KEY: &str = "50111";
    /// Invalid OK-ACCESS-TIMESTAMP.
    pub const INVALID_TIMESTAMP: &str = "50112";
    /// Invalid OK-ACCESS-SIGN.
    pub const INVALID_SIGNATURE: &str = "50113";
    /// Insufficient balance.
    pub const INSUFFICIENT_BALANCE: &str = "51008";
}
