//! Price payload normalization.

use super::wire::PricesResponse;
use super::PricePoint;
use crate::shared::serde_util::{coerce_number, coerce_timestamp};
use serde_json::Value;

/// Convert a raw `{ data: [...] }` payload into points sorted by timestamp.
///
/// Never fails: a missing or non-array `data` yields an empty vector, and bad
/// fields inside a record are coerced. Equal timestamps keep payload order.
pub fn normalize(payload: &Value) -> Vec<PricePoint> {
    PricesResponse::from_value(payload).into_points()
}

impl PricesResponse {
    /// The records as points, ascending by timestamp.
    pub fn into_points(self) -> Vec<PricePoint> {
        let Value::Array(records) = self.data else {
            return Vec::new();
        };

        let mut points: Vec<PricePoint> = records.iter().map(point_from_record).collect();
        points.sort_by_key(|p| p.timestamp);
        points
    }
}

fn point_from_record(record: &Value) -> PricePoint {
    PricePoint {
        timestamp: coerce_timestamp(record.get("timestamp")),
        buy: coerce_number(record.get("buy")),
        sell: coerce_number(record.get("sell")),
    }
}
