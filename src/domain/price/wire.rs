//! Wire types for the price query endpoint.

use crate::shared::serde_util::{lenient_string, lenient_timestamp};
use serde::Deserialize;
use serde_json::Value;

/// `GET /api/prices` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricesResponse {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub status: Option<String>,
    /// Raw records. Shape is checked during conversion.
    #[serde(default)]
    pub data: Value,
    /// Timestamp of the newest stored record, `None` when the table is empty.
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub last_update: Option<i64>,
}

impl PricesResponse {
    /// Read a payload of any shape. Anything that is not an object is an
    /// empty response.
    pub fn from_value(payload: &Value) -> Self {
        if !payload.is_object() {
            return Self::default();
        }
        Self::deserialize(payload).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prices_response_deserialize() {
        let resp = PricesResponse::from_value(&json!({
            "status": "ok",
            "data": [{"timestamp": 100, "buy": 1000, "sell": 1010}],
            "last_update": 100
        }));
        assert_eq!(resp.status.as_deref(), Some("ok"));
        assert_eq!(resp.last_update, Some(100));
        assert_eq!(resp.data.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_empty_table_has_no_last_update() {
        let resp = PricesResponse::from_value(&json!({
            "status": "ok",
            "data": [],
            "last_update": null
        }));
        assert_eq!(resp.last_update, None);
    }

    #[test]
    fn test_odd_metadata_does_not_reject_payload() {
        let resp = PricesResponse::from_value(&json!({
            "status": 1,
            "data": [{"timestamp": 5}],
            "last_update": "1792215000"
        }));
        assert_eq!(resp.status, None);
        assert_eq!(resp.last_update, Some(1_792_215_000));
        assert!(resp.data.is_array());
    }

    #[test]
    fn test_non_object_payload_is_default() {
        for payload in [json!(null), json!([1, 2]), json!("ok"), json!(3)] {
            assert_eq!(PricesResponse::from_value(&payload), PricesResponse::default());
        }
    }
}
