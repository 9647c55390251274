use super::Operation;
use serde::{Deserialize, Serialize};

/// Totals over a filtered history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationSummary {
    pub total_sacks: i64,
    pub total_tonnage: f64,
    pub trips: usize,
}

impl OperationSummary {
    /// Rows with a NULL sack count or tonnage still count as a trip.
    pub fn from_operations(operations: &[Operation]) -> Self {
        operations.iter().fold(Self::default(), |mut acc, op| {
            acc.total_sacks += i64::from(op.sack_count.unwrap_or(0));
            acc.total_tonnage += f64::from(op.tonnage.unwrap_or(0.0));
            acc.trips += 1;
            acc
        })
    }
}
