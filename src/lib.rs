//! Manufacturing batch simulation engine.
//!
//! Given a set of product orders and a catalog of production lines with
//! distinct efficiency factors, computes per product which line produces
//! it, the line-adjusted per-unit time, the line's daily throughput, and
//! the calendar time to complete the order — then aggregates everything
//! into plant-wide daily capacity and total batch duration.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProductionLine`, `ProductOrder`,
//!   `ProductAllocation`, `BatchResult`
//! - **`timing`**: Pure conversions between theoretical, effective, and
//!   calendar times
//! - **`registry`**: Read-only line catalog, loaded once at startup
//! - **`assignment`**: Policy-driven order-to-line assignment
//! - **`aggregate`**: Plant capacity and batch duration aggregation
//! - **`validation`**: Accumulating request validation
//! - **`simulator`**: Orchestration of one simulation call
//! - **`response`**: The frozen external JSON payload schema
//! - **`generator`**: Randomized demo scenarios
//!
//! # Example
//!
//! ```
//! use batch_sim::models::{ProductOrder, ProductionLine};
//! use batch_sim::registry::LineRegistry;
//! use batch_sim::simulator::{SimulationRequest, Simulator};
//!
//! let registry = LineRegistry::from_lines(vec![
//!     ProductionLine::new("A", 0.9),
//!     ProductionLine::new("B", 1.2),
//! ]).unwrap();
//!
//! let simulator = Simulator::new(registry);
//! let request = SimulationRequest::new(vec![
//!     ProductOrder::new("Felpe", 120, 2.4),
//!     ProductOrder::new("T-Shirts", 200, 0.9),
//! ]);
//!
//! let batch = simulator.run(&request).unwrap();
//! assert_eq!(batch.len(), 2);
//! assert!(batch.batch_duration_hours > 0.0);
//! ```

pub mod aggregate;
pub mod assignment;
pub mod error;
pub mod generator;
pub mod models;
pub mod registry;
pub mod response;
pub mod simulator;
pub mod timing;
pub mod validation;

pub use error::{Result, SimulationError};
