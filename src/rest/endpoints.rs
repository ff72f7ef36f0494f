//! OKX REST API endpoint constants.

/// Base URL for the OKX REST API.
pub const OKX_BASE_URL: &str = "https://www.okx.com";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get server time.
    pub const TIME: &str = "/api/v5/public/time";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Get account balance.
    pub const ACCOUNT_BALANCE: &str = "/api/v5/account/balance";
    /// Place an order.
    pub const TRADE_ORDER: &str = "/api/v5/trade/order";
}
