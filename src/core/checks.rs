//! Structural checks over a raw point table.
use serde::{Deserialize, Serialize};

use crate::core::data::PointTable;
use crate::types::PointType;

/// Outcome of a check that carries detail on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: bool,
    /// Offending identifiers; empty when `status` is true.
    pub info: Vec<i64>,
}

impl CheckResult {
    pub fn new(status: bool, info: Vec<i64>) -> Self {
        Self { status, info }
    }
}

/// True if at least one sample is typed as soma.
pub fn has_soma_points<T: PointTable + ?Sized>(table: &T) -> bool {
    table
        .point_types()
        .into_iter()
        .any(|t| PointType::from_code(t) == PointType::Soma)
}

/// Check that identifiers increase by exactly one from row to row.
///
/// On failure `info` holds each identifier that does not follow its
/// predecessor, e.g. `[1, 2, 4, 5]` reports `[4]`. The first identifier
/// may take any value.
pub fn has_sequential_ids<T: PointTable + ?Sized>(table: &T) -> CheckResult {
    let ids = table.ids();
    let steps: Vec<i64> = ids
        .windows(2)
        .filter(|pair| pair[0].checked_add(1) != Some(pair[1]))
        .map(|pair| pair[1])
        .collect();
    CheckResult::new(steps.is_empty(), steps)
}
