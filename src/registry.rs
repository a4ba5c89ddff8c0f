//! Line registry.
//!
//! Read-only catalog of production lines, built once at process start
//! from configuration. Duplicate line ids are rejected at load time —
//! a configuration defect, never a per-request failure. Enumeration
//! order is stable and equals configuration order.

use std::collections::HashSet;

use crate::error::{Result, SimulationError};
use crate::models::ProductionLine;

/// Immutable catalog of production lines.
///
/// Shareable by reference (or `Arc`) across request-handling threads;
/// nothing mutates after construction.
#[derive(Debug, Clone)]
pub struct LineRegistry {
    lines: Vec<ProductionLine>,
}

impl LineRegistry {
    /// Builds a registry from configured lines.
    ///
    /// # Errors
    /// `DuplicateLineId` if two lines share an id, or `InvalidInput`
    /// if any line has a non-positive or non-finite efficiency. Both
    /// are fatal configuration errors.
    pub fn from_lines(lines: Vec<ProductionLine>) -> Result<Self> {
        let mut seen = HashSet::new();
        for line in &lines {
            if !seen.insert(line.id.as_str()) {
                return Err(SimulationError::DuplicateLineId(line.id.clone()));
            }
            if !(line.efficiency > 0.0) || !line.efficiency.is_finite() {
                return Err(SimulationError::InvalidInput(format!(
                    "line '{}' efficiency must be a positive finite number, got {}",
                    line.id, line.efficiency
                )));
            }
        }
        tracing::debug!(lines = lines.len(), "line registry loaded");
        Ok(Self { lines })
    }

    /// Looks up a line by id.
    pub fn get_line(&self, id: &str) -> Option<&ProductionLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// All lines, in configuration order.
    pub fn all_lines(&self) -> &[ProductionLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the registry holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
