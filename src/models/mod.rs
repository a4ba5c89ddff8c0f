//! Simulation domain models.
//!
//! Core data types for the batch simulation: the line catalog entry,
//! the per-request product order, and the derived allocation/result
//! records. Catalog entries are immutable for the process lifetime;
//! orders and results live only for one simulation call.

mod allocation;
mod line;
mod order;

pub use allocation::{BatchResult, ProductAllocation};
pub use line::ProductionLine;
pub use order::ProductOrder;
