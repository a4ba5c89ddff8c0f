//! Line assignment engine and policies.
//!
//! Assignment resolves each product order onto exactly one production
//! line. Policies are pluggable and deterministic; the default
//! [`FastestLine`](policies::FastestLine) policy picks the eligible
//! line that minimizes the order's total production hours, ties broken
//! by lowest line id.
//!
//! # Usage
//!
//! ```
//! use batch_sim::assignment::AssignmentEngine;
//! use batch_sim::models::{ProductOrder, ProductionLine};
//! use batch_sim::registry::LineRegistry;
//!
//! let registry = LineRegistry::from_lines(vec![
//!     ProductionLine::new("A", 0.9),
//!     ProductionLine::new("B", 1.2),
//! ]).unwrap();
//!
//! let engine = AssignmentEngine::new(&registry);
//! let allocation = engine.assign(&ProductOrder::new("Felpe", 100, 2.0), 24.0).unwrap();
//! assert_eq!(allocation.line_id, "B");
//! ```

mod engine;
pub mod policies;

pub use engine::AssignmentEngine;

use std::fmt::Debug;

use crate::models::{ProductOrder, ProductionLine};

/// A deterministic line-selection policy.
///
/// Implementations must be side-effect free: selection for one order
/// may not depend on selections made for other orders, unless the
/// policy explicitly overrides [`select_batch`](AssignmentPolicy::select_batch).
pub trait AssignmentPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FastestLine").
    fn name(&self) -> &'static str;

    /// Selects a line for one order from the eligible candidates.
    ///
    /// Returns `None` when no line is eligible for the order's product.
    fn select<'a>(
        &self,
        order: &ProductOrder,
        lines: &'a [ProductionLine],
    ) -> Option<&'a ProductionLine>;

    /// Selects lines for a whole batch at once.
    ///
    /// The default evaluates each order independently via
    /// [`select`](AssignmentPolicy::select). Batch-coupled policies
    /// (one product per line, workload pairing) override this.
    fn select_batch<'a>(
        &self,
        orders: &[ProductOrder],
        lines: &'a [ProductionLine],
    ) -> Vec<Option<&'a ProductionLine>> {
        orders.iter().map(|o| self.select(o, lines)).collect()
    }
}

/// Lines eligible for an order's product, in catalog order.
pub(crate) fn eligible_lines<'a>(
    order: &ProductOrder,
    lines: &'a [ProductionLine],
) -> impl Iterator<Item = &'a ProductionLine> + 'a {
    let product = order.product.clone();
    lines.iter().filter(move |l| l.can_produce(&product))
}
