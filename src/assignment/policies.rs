//! Built-in assignment policies.
//!
//! - [`FastestLine`]: per-order, minimizes the order's total hours.
//! - [`WorkloadBalanced`]: whole-batch, pairs the heaviest workloads
//!   with the most efficient lines, one product per line.

use super::{eligible_lines, AssignmentPolicy};
use crate::models::{ProductOrder, ProductionLine};

const EPSILON: f64 = 1e-9;

/// Chooses the eligible line that minimizes `total_hours` for the
/// order's quantity — equivalently, the highest-efficiency eligible
/// line. Ties are broken by lowest line id, so selection is fully
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestLine;

impl AssignmentPolicy for FastestLine {
    fn name(&self) -> &'static str {
        "FastestLine"
    }

    fn select<'a>(
        &self,
        order: &ProductOrder,
        lines: &'a [ProductionLine],
    ) -> Option<&'a ProductionLine> {
        let mut best: Option<(&ProductionLine, f64)> = None;

        for line in eligible_lines(order, lines) {
            let hours = order.workload_hours() / line.efficiency;
            best = match best {
                None => Some((line, hours)),
                Some((cur, cur_hours)) => {
                    if hours < cur_hours - EPSILON
                        || ((hours - cur_hours).abs() <= EPSILON && line.id < cur.id)
                    {
                        Some((line, hours))
                    } else {
                        Some((cur, cur_hours))
                    }
                }
            };
        }

        best.map(|(line, _)| line)
    }
}

/// Pairs orders with lines by rank: heaviest theoretical workload onto
/// the most efficient eligible line, one product per line. Orders
/// beyond the line count fall back to the fastest eligible line.
///
/// Ranking is stable: workload ties keep request order, efficiency
/// ties keep catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadBalanced;

impl AssignmentPolicy for WorkloadBalanced {
    fn name(&self) -> &'static str {
        "WorkloadBalanced"
    }

    /// Per-order fallback: identical to [`FastestLine`].
    fn select<'a>(
        &self,
        order: &ProductOrder,
        lines: &'a [ProductionLine],
    ) -> Option<&'a ProductionLine> {
        FastestLine.select(order, lines)
    }

    fn select_batch<'a>(
        &self,
        orders: &[ProductOrder],
        lines: &'a [ProductionLine],
    ) -> Vec<Option<&'a ProductionLine>> {
        // Orders by theoretical workload, heaviest first (stable sort).
        let mut order_rank: Vec<usize> = (0..orders.len()).collect();
        order_rank.sort_by(|&a, &b| {
            orders[b]
                .workload_hours()
                .partial_cmp(&orders[a].workload_hours())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Lines by efficiency, best first (stable sort).
        let mut line_rank: Vec<&ProductionLine> = lines.iter().collect();
        line_rank.sort_by(|a, b| {
            b.efficiency
                .partial_cmp(&a.efficiency)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut selections: Vec<Option<&ProductionLine>> = vec![None; orders.len()];
        let mut taken = vec![false; line_rank.len()];

        for &order_idx in &order_rank {
            let order = &orders[order_idx];
            // Best free eligible line by rank
            let pick = line_rank
                .iter()
                .enumerate()
                .find(|(i, l)| !taken[*i] && l.can_produce(&order.product));

            selections[order_idx] = match pick {
                Some((i, line)) => {
                    taken[i] = true;
                    Some(*line)
                }
                // More products than free lines: share the fastest one
                None => FastestLine.select(order, lines),
            };
        }

        selections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines() -> Vec<ProductionLine> {
        vec![
            ProductionLine::new("A", 0.8),
            ProductionLine::new("B", 1.0),
            ProductionLine::new("C", 1.2),
        ]
    }

    #[test]
    fn test_fastest_line_picks_highest_efficiency() {
        let lines = sample_lines();
        let order = ProductOrder::new("Felpe", 100, 2.0);
        let picked = FastestLine.select(&order, &lines).unwrap();
        assert_eq!(picked.id, "C");
    }

    #[test]
    fn test_fastest_line_tie_breaks_by_id() {
        let lines = vec![
            ProductionLine::new("B", 1.1),
            ProductionLine::new("A", 1.1),
        ];
        let order = ProductOrder::new("Felpe", 50, 1.5);
        let picked = FastestLine.select(&order, &lines).unwrap();
        assert_eq!(picked.id, "A");
    }

    #[test]
    fn test_fastest_line_respects_eligibility() {
        let lines = vec![
            ProductionLine::new("A", 0.8).with_product("Felpe"),
            ProductionLine::new("B", 1.5).with_product("T-Shirts"),
        ];
        let order = ProductOrder::new("Felpe", 10, 1.0);
        // B is faster but cannot produce Felpe
        let picked = FastestLine.select(&order, &lines).unwrap();
        assert_eq!(picked.id, "A");
    }

    #[test]
    fn test_fastest_line_no_eligible_line() {
        let lines = vec![ProductionLine::new("A", 1.0).with_product("T-Shirts")];
        let order = ProductOrder::new("Giacche Invernali", 10, 4.0);
        assert!(FastestLine.select(&order, &lines).is_none());
    }

    #[test]
    fn test_workload_balanced_pairs_by_rank() {
        let lines = sample_lines();
        let orders = vec![
            ProductOrder::new("light", 10, 1.0),  // 10h
            ProductOrder::new("heavy", 100, 4.0), // 400h
            ProductOrder::new("medium", 50, 2.0), // 100h
        ];

        let selections = WorkloadBalanced.select_batch(&orders, &lines);
        // heavy → C (1.2), medium → B (1.0), light → A (0.8)
        assert_eq!(selections[0].unwrap().id, "A");
        assert_eq!(selections[1].unwrap().id, "C");
        assert_eq!(selections[2].unwrap().id, "B");
    }

    #[test]
    fn test_workload_balanced_overflow_shares_fastest() {
        let lines = vec![ProductionLine::new("A", 1.0)];
        let orders = vec![
            ProductOrder::new("p1", 10, 2.0),
            ProductOrder::new("p2", 10, 1.0),
        ];

        let selections = WorkloadBalanced.select_batch(&orders, &lines);
        // Only one line: both orders land on it
        assert_eq!(selections[0].unwrap().id, "A");
        assert_eq!(selections[1].unwrap().id, "A");
    }

    #[test]
    fn test_workload_balanced_respects_eligibility() {
        let lines = vec![
            ProductionLine::new("A", 1.3).with_product("small"),
            ProductionLine::new("B", 0.9),
        ];
        let orders = vec![
            ProductOrder::new("big", 100, 5.0),
            ProductOrder::new("small", 10, 1.0),
        ];

        let selections = WorkloadBalanced.select_batch(&orders, &lines);
        // "big" ranks first but only B can take it; "small" gets A
        assert_eq!(selections[0].unwrap().id, "B");
        assert_eq!(selections[1].unwrap().id, "A");
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(FastestLine.name(), "FastestLine");
        assert_eq!(WorkloadBalanced.name(), "WorkloadBalanced");
    }
}
