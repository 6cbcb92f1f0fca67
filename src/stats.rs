// 📊 Aggregator - Per-type fine totals, ranked descending
// Exact decimal arithmetic end to end; no binary floating point

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::violation::{TrafficViolation, ViolationType};

/// RankedTotals - ordered (type, total) pairs, highest total first
///
/// Equal totals rank in `ViolationType` declaration order, so the ranking is
/// identical for any arrival order of the underlying records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTotals {
    entries: Vec<(ViolationType, Decimal)>,
}

impl RankedTotals {
    /// Entries in ranking order
    pub fn entries(&self) -> &[(ViolationType, Decimal)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total for one type, if any record of that type was seen
    pub fn total_for(&self, violation_type: ViolationType) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(entry_type, _)| *entry_type == violation_type)
            .map(|(_, total)| *total)
    }
}

/// Reduce the full record collection into ranked per-type fine totals.
///
/// Each group sums from exact zero; addition is commutative, so record order
/// cannot change any total. Zero records yield an empty ranking, not an error.
pub fn rank_totals(violations: &[TrafficViolation]) -> RankedTotals {
    let mut totals: HashMap<ViolationType, Decimal> = HashMap::new();
    for violation in violations {
        *totals
            .entry(violation.violation_type)
            .or_insert(Decimal::ZERO) += violation.fine_amount;
    }

    let mut entries: Vec<(ViolationType, Decimal)> = totals.into_iter().collect();
    // Descending by total; declaration order breaks ties deterministically
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    RankedTotals { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(violation_type: ViolationType, units: i64, scale: u32) -> TrafficViolation {
        TrafficViolation::new(violation_type, Decimal::new(units, scale))
    }

    #[test]
    fn test_totals_sum_exactly() {
        // 0.10 + 0.20 must be 0.30, not a float approximation
        let violations = vec![
            violation(ViolationType::Speeding, 10, 2),
            violation(ViolationType::Speeding, 20, 2),
            violation(ViolationType::Parking, 5000, 2),
        ];

        let totals = rank_totals(&violations);
        assert_eq!(totals.total_for(ViolationType::Speeding).unwrap().to_string(), "0.30");
        assert_eq!(totals.total_for(ViolationType::Parking).unwrap().to_string(), "50.00");
        assert_eq!(totals.total_for(ViolationType::RedLight), None);
    }

    #[test]
    fn test_ranking_is_descending() {
        let violations = vec![
            violation(ViolationType::Parking, 1000, 2),
            violation(ViolationType::Speeding, 9000, 2),
            violation(ViolationType::RedLight, 4000, 2),
            violation(ViolationType::Speeding, 500, 2),
        ];

        let totals = rank_totals(&violations);
        let entries = totals.entries();
        assert_eq!(entries.len(), 3);
        for pair in entries.windows(2) {
            assert!(
                pair[0].1 >= pair[1].1,
                "earlier total {} must be >= later total {}",
                pair[0].1,
                pair[1].1
            );
        }
        assert_eq!(entries[0].0, ViolationType::Speeding);
    }

    #[test]
    fn test_equal_totals_rank_in_declaration_order() {
        let violations = vec![
            violation(ViolationType::RedLight, 5000, 2),
            violation(ViolationType::Speeding, 5000, 2),
            violation(ViolationType::Parking, 5000, 2),
        ];

        let totals = rank_totals(&violations);
        assert_eq!(
            totals.entries(),
            &[
                (ViolationType::Speeding, Decimal::new(5000, 2)),
                (ViolationType::Parking, Decimal::new(5000, 2)),
                (ViolationType::RedLight, Decimal::new(5000, 2)),
            ],
            "ties must collapse to declaration order, not arrival order"
        );
    }

    #[test]
    fn test_arrival_order_does_not_change_the_ranking() {
        let mut violations = vec![
            violation(ViolationType::Seatbelt, 1500, 2),
            violation(ViolationType::Speeding, 8000, 2),
            violation(ViolationType::Seatbelt, 2500, 2),
            violation(ViolationType::DrunkDriving, 50000, 2),
        ];

        let forward = rank_totals(&violations);
        violations.reverse();
        let backward = rank_totals(&violations);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_zero_records_yield_empty_ranking() {
        let totals = rank_totals(&[]);
        assert!(totals.is_empty());
        assert_eq!(totals.len(), 0);
        assert_eq!(totals.entries(), &[]);
    }

    #[test]
    fn test_mixed_scales_accumulate_correctly() {
        // 100 + 0.50 + 24.5 = 125.00 regardless of input scales
        let violations = vec![
            violation(ViolationType::Speeding, 100, 0),
            violation(ViolationType::Speeding, 50, 2),
            violation(ViolationType::Speeding, 245, 1),
        ];

        let totals = rank_totals(&violations);
        assert_eq!(
            totals.total_for(ViolationType::Speeding).unwrap(),
            Decimal::new(12500, 2)
        );
    }
}
