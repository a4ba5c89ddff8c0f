//! Assignment engine.
//!
//! Resolves product orders onto production lines using a pluggable
//! [`AssignmentPolicy`], then derives the full allocation record via
//! the timing model. Per-order allocation has no shared mutable state,
//! so batch allocation is computed in parallel while preserving the
//! request order of the output.

use std::sync::Arc;

use rayon::prelude::*;

use super::{policies::FastestLine, AssignmentPolicy};
use crate::error::{Result, SimulationError};
use crate::models::{ProductAllocation, ProductOrder, ProductionLine};
use crate::registry::LineRegistry;
use crate::timing;

/// Assigns orders to lines and produces allocation records.
#[derive(Debug)]
pub struct AssignmentEngine<'r> {
    registry: &'r LineRegistry,
    policy: Arc<dyn AssignmentPolicy>,
}

impl<'r> AssignmentEngine<'r> {
    /// Creates an engine with the default [`FastestLine`] policy.
    pub fn new(registry: &'r LineRegistry) -> Self {
        Self {
            registry,
            policy: Arc::new(FastestLine),
        }
    }

    /// Replaces the assignment policy.
    pub fn with_policy<P: AssignmentPolicy + 'static>(self, policy: P) -> Self {
        self.with_policy_arc(Arc::new(policy))
    }

    /// Replaces the assignment policy with a shared instance.
    pub fn with_policy_arc(mut self, policy: Arc<dyn AssignmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// The active policy name.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Assigns a single order to a line and derives its allocation.
    ///
    /// # Errors
    /// `NoLineAvailable` if no eligible line exists for the product;
    /// `InvalidInput` if the order's timings are out of domain.
    pub fn assign(&self, order: &ProductOrder, working_hours_per_day: f64) -> Result<ProductAllocation> {
        let line = self
            .policy
            .select(order, self.registry.all_lines())
            .ok_or_else(|| SimulationError::NoLineAvailable(order.product.clone()))?;
        allocate(order, line, working_hours_per_day)
    }

    /// Assigns every order in the batch, preserving request order.
    ///
    /// Orders are evaluated independently; allocation records are
    /// derived in parallel. All failures are accumulated — an order
    /// without an eligible line never hides failures of later orders.
    pub fn assign_all(
        &self,
        orders: &[ProductOrder],
        working_hours_per_day: f64,
    ) -> std::result::Result<Vec<ProductAllocation>, Vec<SimulationError>> {
        let selections = self.policy.select_batch(orders, self.registry.all_lines());

        let results: Vec<Result<ProductAllocation>> = orders
            .par_iter()
            .zip(selections)
            .map(|(order, line)| match line {
                Some(line) => allocate(order, line, working_hours_per_day),
                None => Err(SimulationError::NoLineAvailable(order.product.clone())),
            })
            .collect();

        let mut allocations = Vec::with_capacity(orders.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(a) => allocations.push(a),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(allocations)
        } else {
            Err(errors)
        }
    }
}

/// Derives the allocation record for one order on one line.
fn allocate(
    order: &ProductOrder,
    line: &ProductionLine,
    working_hours_per_day: f64,
) -> Result<ProductAllocation> {
    let effective_time = timing::effective_time(order.theoretical_time, line.efficiency)?;
    let daily_capacity = timing::daily_capacity(effective_time, working_hours_per_day)?;
    let total_hours = timing::total_hours(order.quantity, effective_time);
    let days_required = timing::days_required(total_hours, working_hours_per_day);

    tracing::debug!(
        product = %order.product,
        line = %line.id,
        effective_time,
        total_hours,
        "order assigned"
    );

    Ok(ProductAllocation {
        product: order.product.clone(),
        quantity: order.quantity,
        theoretical_time: order.theoretical_time,
        line_id: line.id.clone(),
        line_name: line.name.clone(),
        efficiency: line.efficiency,
        effective_time,
        daily_capacity,
        total_hours,
        days_required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::policies::WorkloadBalanced;

    fn sample_registry() -> LineRegistry {
        LineRegistry::from_lines(vec![
            ProductionLine::new("A", 0.8),
            ProductionLine::new("B", 1.0),
            ProductionLine::new("C", 1.25),
        ])
        .unwrap()
    }

    #[test]
    fn test_assign_derives_timings() {
        let registry = sample_registry();
        let engine = AssignmentEngine::new(&registry);

        let a = engine
            .assign(&ProductOrder::new("Felpe", 100, 2.5), 24.0)
            .unwrap();

        // Fastest line is C (1.25): effective 2.5/1.25 = 2.0
        assert_eq!(a.line_id, "C");
        assert!((a.effective_time - 2.0).abs() < 1e-10);
        assert_eq!(a.daily_capacity, 12); // floor(24 / 2.0)
        assert!((a.total_hours - 200.0).abs() < 1e-10);
        assert!((a.days_required - 200.0 / 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_assign_no_line_available() {
        let registry = LineRegistry::from_lines(vec![
            ProductionLine::new("A", 1.0).with_product("T-Shirts"),
        ])
        .unwrap();
        let engine = AssignmentEngine::new(&registry);

        let err = engine
            .assign(&ProductOrder::new("Felpe", 10, 1.0), 24.0)
            .unwrap_err();
        assert_eq!(err, SimulationError::NoLineAvailable("Felpe".into()));
    }

    #[test]
    fn test_assign_all_preserves_request_order() {
        let registry = sample_registry();
        let engine = AssignmentEngine::new(&registry);
        let orders = vec![
            ProductOrder::new("p1", 10, 1.0),
            ProductOrder::new("p2", 20, 2.0),
            ProductOrder::new("p3", 30, 3.0),
            ProductOrder::new("p4", 40, 4.0),
        ];

        let allocations = engine.assign_all(&orders, 24.0).unwrap();
        let products: Vec<&str> = allocations.iter().map(|a| a.product.as_str()).collect();
        assert_eq!(products, vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_assign_all_accumulates_all_failures() {
        let registry = LineRegistry::from_lines(vec![
            ProductionLine::new("A", 1.0).with_product("ok"),
        ])
        .unwrap();
        let engine = AssignmentEngine::new(&registry);
        let orders = vec![
            ProductOrder::new("bad1", 10, 1.0),
            ProductOrder::new("ok", 10, 1.0),
            ProductOrder::new("bad2", 10, 1.0),
        ];

        let errors = engine.assign_all(&orders, 24.0).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], SimulationError::NoLineAvailable("bad1".into()));
        assert_eq!(errors[1], SimulationError::NoLineAvailable("bad2".into()));
    }

    #[test]
    fn test_assign_all_is_deterministic() {
        let registry = sample_registry();
        let engine = AssignmentEngine::new(&registry);
        let orders = vec![
            ProductOrder::new("p1", 100, 2.0),
            ProductOrder::new("p2", 50, 1.5),
        ];

        let first = engine.assign_all(&orders, 24.0).unwrap();
        let second = engine.assign_all(&orders, 24.0).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.line_id, b.line_id);
            assert!((a.total_hours - b.total_hours).abs() < 1e-10);
        }
    }

    #[test]
    fn test_engine_with_batch_policy() {
        let registry = sample_registry();
        let engine = AssignmentEngine::new(&registry).with_policy(WorkloadBalanced);
        assert_eq!(engine.policy_name(), "WorkloadBalanced");

        let orders = vec![
            ProductOrder::new("heavy", 100, 5.0), // 500h → line C
            ProductOrder::new("light", 10, 1.0),  // 10h → line A
            ProductOrder::new("medium", 40, 2.0), // 80h → line B
        ];

        let allocations = engine.assign_all(&orders, 24.0).unwrap();
        assert_eq!(allocations[0].line_id, "C");
        assert_eq!(allocations[1].line_id, "A");
        assert_eq!(allocations[2].line_id, "B");
    }
}
