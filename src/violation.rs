// 🚦 Violation Model - Core record types
// One decoded record = one traffic violation with an exact fine amount

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ViolationType - Closed set of categories records are bucketed by
///
/// Wire names are SCREAMING_SNAKE_CASE. A value outside this set fails the
/// decode of its whole file; it never falls back to a default category.
// Derived Ord follows declaration order; equal fine totals rank in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    Speeding,
    Parking,
    RedLight,
    Seatbelt,
    DrunkDriving,
}

impl ViolationType {
    /// Wire/report name for display and serialization
    pub fn name(&self) -> &'static str {
        match self {
            ViolationType::Speeding => "SPEEDING",
            ViolationType::Parking => "PARKING",
            ViolationType::RedLight => "RED_LIGHT",
            ViolationType::Seatbelt => "SEATBELT",
            ViolationType::DrunkDriving => "DRUNK_DRIVING",
        }
    }
}

/// TrafficViolation - One parsed input record
///
/// Only the two fields the aggregation needs are decoded; extra fields in the
/// source payload are ignored. The fine amount goes through serde_json's
/// arbitrary-precision path so the decimal text is preserved exactly, with no
/// binary-float intermediate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficViolation {
    #[serde(rename = "type")]
    pub violation_type: ViolationType,

    #[serde(alias = "amount")]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fine_amount: Decimal,
}

impl TrafficViolation {
    pub fn new(violation_type: ViolationType, fine_amount: Decimal) -> Self {
        TrafficViolation {
            violation_type,
            fine_amount,
        }
    }
}
