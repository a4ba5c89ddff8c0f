//! Batch aggregation.
//!
//! Combines per-product allocations into plant-wide figures. Lines run
//! in parallel with each other, but a single line works its queue
//! sequentially: the batch duration is therefore the maximum over
//! lines of the summed hours queued on that line.

use std::collections::HashMap;

use crate::models::{BatchResult, ProductAllocation};

/// Plant-wide daily capacity: sum of the allocations' per-line daily
/// capacities (each line produces its own product concurrently).
/// Saturates at `u32::MAX` rather than wrapping.
pub fn plant_daily_capacity(allocations: &[ProductAllocation]) -> u32 {
    allocations
        .iter()
        .fold(0u32, |acc, a| acc.saturating_add(a.daily_capacity))
}

/// Wall-clock hours until the whole batch completes.
///
/// Allocations are grouped by assigned line; hours within a group are
/// summed, and the batch finishes when the busiest line does. Empty
/// input yields 0.
pub fn batch_duration_hours(allocations: &[ProductAllocation]) -> f64 {
    let mut line_hours: HashMap<&str, f64> = HashMap::new();
    for a in allocations {
        *line_hours.entry(a.line_id.as_str()).or_insert(0.0) += a.total_hours;
    }
    line_hours.values().copied().fold(0.0, f64::max)
}

/// Builds the full batch result from the ordered allocation list.
pub fn aggregate(allocations: Vec<ProductAllocation>, working_hours_per_day: f64) -> BatchResult {
    let plant_daily_capacity = plant_daily_capacity(&allocations);
    let batch_duration_hours = batch_duration_hours(&allocations);
    let batch_duration_days = batch_duration_hours / working_hours_per_day;

    BatchResult {
        allocations,
        plant_daily_capacity,
        batch_duration_hours,
        batch_duration_days,
        working_hours_per_day,
    }
}
