//! OKX REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{SystemClock, TimestampProvider, sign_request};
use crate::error::{ApiError, OkxVaultError};
use crate::rest::endpoints::{OKX_BASE_URL, private, public};
use crate::rest::types::{AccountBalance, OkxResponse, OrderAck, PlaceOrderRequest, ServerTime};
use crate::vault::CredentialRecord;

/// The OKX REST API client.
///
/// Signs private requests with the OK-ACCESS header set and applies a
/// bounded wall-clock timeout to every exchange call, so a hung upstream
/// surfaces as [`OkxVaultError::Timeout`] instead of stalling the caller.
///
/// # Example
///
/// ```rust,no_run
/// use okx_vault_client::rest::OkxRestClient;
/// use okx_vault_client::vault::CredentialRecord;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = CredentialRecord::new("api-key", "api-secret", "api-passphrase");
///     let client = OkxRestClient::builder().credentials(credentials).build()?;
///
///     let balance = client.get_account_balance(None).await?;
///     println!("Total equity: {} USD", balance.total_eq);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct OkxRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<CredentialRecord>,
    clock: Arc<dyn TimestampProvider>,
}

impl OkxRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`OkxRestClient::builder()`] to configure credentials.
    pub fn new() -> Result<Self, OkxVaultError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> OkxRestClientBuilder {
        OkxRestClientBuilder::new()
    }

    /// Get the OKX server time.
    pub async fn get_server_time(&self) -> Result<ServerTime, OkxVaultError> {
        self.public_get(public::TIME).await
    }

    /// Get the account balance, optionally filtered to a single currency.
    pub async fn get_account_balance(
        &self,
        ccy: Option<&str>,
    ) -> Result<AccountBalance, OkxVaultError> {
        let path = match ccy {
            Some(ccy) => {
                let query = serde_urlencoded::to_string([("ccy", ccy)].as_slice())
                    .map_err(|e| OkxVaultError::InvalidResponse(e.to_string()))?;
                format!("{}?{}", private::ACCOUNT_BALANCE, query)
            }
            None => private::ACCOUNT_BALANCE.to_string(),
        };
        self.private_request(Method::GET, &path, String::new())
            .await
    }

    /// Place a spot order.
    ///
    /// Transient transport failures are retried by the middleware layer;
    /// set a client order ID on the request so a retried submission is
    /// deduplicated by the exchange rather than filled twice.
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderAck, OkxVaultError> {
        let body = serde_json::to_string(request)?;
        let ack: OrderAck = self
            .private_request(Method::POST, private::TRADE_ORDER, body)
            .await?;

        if !ack.is_accepted() {
            return Err(OkxVaultError::Api(ApiError::new(
                ack.s_code.clone(),
                ack.s_msg.clone(),
            )));
        }
        Ok(ack)
    }

    /// Make a public GET request.
    async fn public_get<T>(&self, endpoint: &str) -> Result<T, OkxVaultError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;
        self.parse_response(response).await
    }

    /// Make an authenticated request.
    ///
    /// The body string passed here is byte-for-byte the body that gets
    /// transmitted; signing any other representation would invalidate the
    /// signature.
    async fn private_request<T>(
        &self,
        method: Method,
        path: &str,
        body: String,
    ) -> Result<T, OkxVaultError>
    where
        T: serde::de::DeserializeOwned,
    {
        let creds = self
            .credentials
            .as_ref()
            .ok_or(OkxVaultError::MissingCredentials)?;

        let timestamp = self.clock.timestamp();
        let signature = sign_request(
            &creds.secret_key,
            &timestamp,
            method.as_str(),
            path,
            &body,
        )?;

        tracing::debug!(%method, path, "sending authenticated OKX request");

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http_client
            .request(method, &url)
            .header("OK-ACCESS-KEY", &creds.api_key)
            .header("OK-ACCESS-SIGN", signature)
            .header("OK-ACCESS-TIMESTAMP", timestamp)
            .header("OK-ACCESS-PASSPHRASE", &creds.passphrase);

        if !body.is_empty() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(map_send_error)?;
        self.parse_response(response).await
    }

    /// Parse a response from the OKX API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, OkxVaultError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        // Non-success statuses are propagated unchanged so callers can tell
        // an exchange-side rejection apart from a local failure.
        if !status.is_success() {
            return Err(OkxVaultError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        // OKX reports API errors with HTTP 200 and code != "0".
        let parsed: OkxResponse<T> = serde_json::from_str(&body).map_err(|e| {
            OkxVaultError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })?;

        if parsed.code != "0" {
            return Err(OkxVaultError::Api(ApiError::new(parsed.code, parsed.msg)));
        }

        parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| OkxVaultError::InvalidResponse("Response data is empty".to_string()))
    }
}

/// Map middleware send errors, surfacing timeouts distinctly.
fn map_send_error(error: reqwest_middleware::Error) -> OkxVaultError {
    match error {
        reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => OkxVaultError::Timeout,
        other => other.into(),
    }
}

impl std::fmt::Debug for OkxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkxRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`OkxRestClient`].
pub struct OkxRestClientBuilder {
    base_url: String,
    credentials: Option<CredentialRecord>,
    clock: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
    timeout: Duration,
}

impl OkxRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: OKX_BASE_URL.to_string(),
            credentials: None,
            clock: None,
            user_agent: None,
            max_retries: 3,
            // The dashboard's serverless callers budget 8 seconds per
            // exchange call.
            timeout: Duration::from_secs(8),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the decrypted credentials for authenticated requests.
    pub fn credentials(mut self, credentials: CredentialRecord) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn clock(mut self, clock: Arc<dyn TimestampProvider>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// [`OkxVaultError::Url`] if the base URL is not a valid URL.
    pub fn build(self) -> Result<OkxRestClient, OkxVaultError> {
        url::Url::parse(&self.base_url)?;

        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("okx-vault-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("okx-vault-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(OkxRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            clock,
        })
    }
}

impl Default for OkxRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
