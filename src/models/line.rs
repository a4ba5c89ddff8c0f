//! Production line model.
//!
//! A line is an immutable catalog entry: a stable identifier, a display
//! name, an efficiency factor, and the set of products it may produce.
//! Lines are created once at process start from configuration and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// A production line in the plant catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLine {
    /// Unique line identifier (e.g., "A").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Efficiency divisor applied to theoretical time
    /// (1.0 = nominal, >1.0 = faster, <1.0 = slower).
    pub efficiency: f64,
    /// Product names this line may produce. Empty = any product.
    pub products: Vec<String>,
}

impl ProductionLine {
    /// Creates a line with the given id and efficiency, eligible for any product.
    pub fn new(id: impl Into<String>, efficiency: f64) -> Self {
        let id = id.into();
        Self {
            name: format!("Linea {id}"),
            id,
            efficiency,
            products: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts the line to a product. May be called repeatedly.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.products.push(product.into());
        self
    }

    /// Whether this line may produce the given product.
    ///
    /// An empty product list means the line is unrestricted.
    pub fn can_produce(&self, product: &str) -> bool {
        self.products.is_empty() || self.products.iter().any(|p| p == product)
    }
}
