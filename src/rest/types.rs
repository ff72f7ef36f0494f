//! Request and response types for the OKX REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OKX response envelope.
///
/// OKX wraps every response as `{"code": "...", "msg": "...", "data": [...]}`
/// and signals API errors through `code != "0"`, usually with HTTP 200.
#[derive(Debug, Deserialize)]
pub(crate) struct OkxResponse<T> {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Server time from `/api/v5/public/time`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp in milliseconds, as a string
    pub ts: String,
}

/// Account balance from `/api/v5/account/balance`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// Total account equity in USD
    #[serde(with = "rust_decimal::serde::str")]
    pub total_eq: Decimal,
    /// Per-currency balance details
    #[serde(default)]
    pub details: Vec<BalanceDetail>,
}

/// Per-currency balance entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDetail {
    /// Currency code (e.g., "USDT")
    pub ccy: String,
    /// Equity of the currency
    #[serde(with = "rust_decimal::serde::str")]
    pub eq: Decimal,
    /// Available balance of the currency
    #[serde(with = "rust_decimal::serde::str")]
    pub avail_bal: Decimal,
}

/// Request body for `/api/v5/trade/order`.
///
/// Serialized to the exact JSON string that is both signed and transmitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Instrument ID (e.g., "BTC-USDT")
    pub inst_id: String,
    /// Trade mode; "cash" for spot
    pub td_mode: String,
    /// "buy" or "sell"
    pub side: String,
    /// Order type; "market" or "limit"
    pub ord_type: String,
    /// Order size
    pub sz: String,
    /// Limit price (required for limit orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub px: Option<String>,
    /// Client-assigned order ID, the idempotency key for retries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cl_ord_id: Option<String>,
}

impl PlaceOrderRequest {
    /// Create a spot market order.
    pub fn market(inst_id: impl Into<String>, side: impl Into<String>, sz: impl Into<String>) -> Self {
        Self {
            inst_id: inst_id.into(),
            td_mode: "cash".to_string(),
            side: side.into(),
            ord_type: "market".to_string(),
            sz: sz.into(),
            px: None,
            cl_ord_id: None,
        }
    }

    /// Create a spot limit order.
    pub fn limit(
        inst_id: impl Into<String>,
        side: impl Into<String>,
        sz: impl Into<String>,
        px: impl Into<String>,
    ) -> Self {
        Self {
            px: Some(px.into()),
            ord_type: "limit".to_string(),
            ..Self::market(inst_id, side, sz)
        }
    }

    /// Set a client order ID so a retried submission is deduplicated by OKX.
    pub fn with_client_order_id(mut self, cl_ord_id: impl Into<String>) -> Self {
        self.cl_ord_id = Some(cl_ord_id.into());
        self
    }
}

/// Acknowledgement for a placed order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    /// Exchange-assigned order ID
    pub ord_id: String,
    /// Client-assigned order ID, if any
    #[serde(default)]
    pub cl_ord_id: String,
    /// Order-level result code; "0" means accepted
    pub s_code: String,
    /// Order-level result message
    #[serde(default)]
    pub s_msg: String,
}

impl OrderAck {
    /// Check whether the order was accepted.
    pub fn is_accepted(&self) -> bool {
        self.s_code == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_serialization() {
        let request = PlaceOrderRequest::market("BTC-USDT", "buy", "1");
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(
            json,
            r#"{"instId":"BTC-USDT","tdMode":"cash","side":"buy","ordType":"market","sz":"1"}"#
        );
    }

    #[test]
    fn test_limit_order_includes_price() {
        let request = PlaceOrderRequest::limit("ETH-USDT", "sell", "2", "3500")
            .with_client_order_id("order42");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["ordType"], "limit");
        assert_eq!(json["px"], "3500");
        assert_eq!(json["clOrdId"], "order42");
    }

    #[test]
    fn test_balance_deserialization() {
        let json = r#"{
            "totalEq": "1234.56",
            "details": [{"ccy": "USDT", "eq": "1000", "availBal": "900.5"}]
        }"#;
        let balance: AccountBalance = serde_json::from_str(json).unwrap();

        assert_eq!(balance.total_eq.to_string(), "1234.56");
        assert_eq!(balance.details[0].ccy, "USDT");
        assert_eq!(balance.details[0].avail_bal.to_string(), "900.5");
    }
}
