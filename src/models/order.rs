//! Product order model.
//!
//! One order per request line item: a product name, the quantity to
//! produce, and the nominal (theoretical) per-unit production time.
//! Orders live only for the duration of one simulation call.

use serde::{Deserialize, Serialize};

/// A requested product/quantity pair with its theoretical timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOrder {
    /// Product name (e.g., "T-Shirts").
    pub product: String,
    /// Units to produce. Must be positive; checked by request validation.
    pub quantity: u32,
    /// Nominal hours per unit absent line adjustment. Must be positive.
    pub theoretical_time: f64,
}

impl ProductOrder {
    /// Creates a new order.
    pub fn new(product: impl Into<String>, quantity: u32, theoretical_time: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            theoretical_time,
        }
    }

    /// Total theoretical workload (hours) before any line adjustment.
    #[inline]
    pub fn workload_hours(&self) -> f64 {
        self.quantity as f64 * self.theoretical_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_fields() {
        let order = ProductOrder::new("Felpe", 120, 2.5);
        assert_eq!(order.product, "Felpe");
        assert_eq!(order.quantity, 120);
        assert!((order.theoretical_time - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_workload() {
        let order = ProductOrder::new("T-Shirts", 200, 0.8);
        assert!((order.workload_hours() - 160.0).abs() < 1e-10);
    }
}
