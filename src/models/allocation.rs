//! Allocation and batch result models.
//!
//! A `ProductAllocation` is the derived, immutable record produced by
//! the assignment engine from one order and one line. A `BatchResult`
//! aggregates all allocations of one simulation call.

use serde::{Deserialize, Serialize};

/// One product order resolved onto one production line, with all
/// derived timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAllocation {
    /// Product name.
    pub product: String,
    /// Units to produce.
    pub quantity: u32,
    /// Nominal hours per unit.
    pub theoretical_time: f64,
    /// Assigned line id.
    pub line_id: String,
    /// Assigned line display name.
    pub line_name: String,
    /// Efficiency of the assigned line.
    pub efficiency: f64,
    /// Line-adjusted hours per unit (`theoretical_time / efficiency`).
    pub effective_time: f64,
    /// Whole units the line produces in one working day.
    pub daily_capacity: u32,
    /// Hours to complete the full quantity on the assigned line.
    pub total_hours: f64,
    /// Fractional working days to complete the order.
    pub days_required: f64,
}

/// The aggregate outcome of one simulation call.
///
/// `allocations` preserves the request order of the input products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-product allocations, in request order.
    pub allocations: Vec<ProductAllocation>,
    /// Sum of per-line daily capacities across allocations (units/day).
    pub plant_daily_capacity: u32,
    /// Wall-clock hours until the slowest line queue finishes.
    pub batch_duration_hours: f64,
    /// `batch_duration_hours` expressed in working days.
    pub batch_duration_days: f64,
    /// Working hours per day the batch was computed with.
    pub working_hours_per_day: f64,
}

impl BatchResult {
    /// Allocations assigned to a given line.
    pub fn allocations_for_line(&self, line_id: &str) -> Vec<&ProductAllocation> {
        self.allocations
            .iter()
            .filter(|a| a.line_id == line_id)
            .collect()
    }

    /// Finds the allocation for a given product.
    pub fn allocation_for_product(&self, product: &str) -> Option<&ProductAllocation> {
        self.allocations.iter().find(|a| a.product == product)
    }

    /// Number of allocations.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Whether the batch has no allocations.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
