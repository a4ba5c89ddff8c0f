//! Simulation orchestrator.
//!
//! Drives one simulation call through a fixed state progression:
//! `Received → Validated → Computed → Responded`, short-circuiting to
//! `Rejected` when validation or assignment fails. Failures always
//! carry the complete ordered list of error messages, never just the
//! first one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assignment::{policies::FastestLine, AssignmentEngine, AssignmentPolicy};
use crate::models::{BatchResult, ProductOrder};
use crate::registry::LineRegistry;
use crate::validation::validate_request;
use crate::{aggregate, timing};

/// Default working day length (hours), matching a three-shift plant.
pub const DEFAULT_WORKING_HOURS: f64 = 24.0;

fn default_working_hours() -> f64 {
    DEFAULT_WORKING_HOURS
}

/// Input for one simulation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Product orders, one per line item.
    pub orders: Vec<ProductOrder>,
    /// Working hours per day. Defaults to 24.
    #[serde(default = "default_working_hours")]
    pub working_hours_per_day: f64,
}

impl SimulationRequest {
    /// Creates a request with the default working day.
    pub fn new(orders: Vec<ProductOrder>) -> Self {
        Self {
            orders,
            working_hours_per_day: DEFAULT_WORKING_HOURS,
        }
    }

    /// Sets the working hours per day.
    pub fn with_working_hours(mut self, hours: f64) -> Self {
        self.working_hours_per_day = hours;
        self
    }
}

/// States a simulation call moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Request accepted for processing.
    Received,
    /// All request fields passed validation.
    Validated,
    /// Assignment and aggregation completed.
    Computed,
    /// Result handed back to the caller.
    Responded,
    /// Request refused; error list produced.
    Rejected,
}

/// A rejected simulation: the ordered, complete list of error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationFailure {
    /// Human-readable error messages, in detection order.
    pub errors: Vec<String>,
}

impl SimulationFailure {
    fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

impl std::fmt::Display for SimulationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "simulation rejected: {}", self.errors.join("; "))
    }
}

impl std::error::Error for SimulationFailure {}

/// Orchestrates validation, assignment, and aggregation for one
/// request at a time.
///
/// Holds only the read-only line registry and the assignment policy;
/// requests are stateless and independent, so one simulator can serve
/// any number of calls (or threads) concurrently.
#[derive(Debug, Clone)]
pub struct Simulator {
    registry: LineRegistry,
    policy: Arc<dyn AssignmentPolicy>,
}

impl Simulator {
    /// Creates a simulator with the default [`FastestLine`] policy.
    pub fn new(registry: LineRegistry) -> Self {
        Self {
            registry,
            policy: Arc::new(FastestLine),
        }
    }

    /// Replaces the assignment policy.
    pub fn with_policy<P: AssignmentPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// The line registry this simulator serves.
    pub fn registry(&self) -> &LineRegistry {
        &self.registry
    }

    /// Runs one simulation call.
    pub fn run(&self, request: &SimulationRequest) -> Result<BatchResult, SimulationFailure> {
        self.run_with_trace(request).0
    }

    /// Runs one simulation call and reports the states traversed.
    pub fn run_with_trace(
        &self,
        request: &SimulationRequest,
    ) -> (Result<BatchResult, SimulationFailure>, Vec<SimulationState>) {
        let mut trace = vec![SimulationState::Received];
        tracing::debug!(orders = request.orders.len(), "simulation received");

        if let Err(violations) = validate_request(request) {
            trace.push(SimulationState::Rejected);
            let errors: Vec<String> = violations.into_iter().map(|v| v.message).collect();
            tracing::info!(errors = errors.len(), "simulation rejected by validation");
            return (Err(SimulationFailure::new(errors)), trace);
        }
        trace.push(SimulationState::Validated);

        let engine =
            AssignmentEngine::new(&self.registry).with_policy_arc(Arc::clone(&self.policy));
        let allocations = match engine.assign_all(&request.orders, request.working_hours_per_day) {
            Ok(allocations) => allocations,
            Err(failures) => {
                trace.push(SimulationState::Rejected);
                let errors: Vec<String> = failures.iter().map(|e| e.to_string()).collect();
                tracing::info!(errors = errors.len(), "simulation rejected by assignment");
                return (Err(SimulationFailure::new(errors)), trace);
            }
        };

        let result = aggregate::aggregate(allocations, request.working_hours_per_day);
        trace.push(SimulationState::Computed);

        tracing::info!(
            products = result.len(),
            plant_daily_capacity = result.plant_daily_capacity,
            batch_duration_hours = result.batch_duration_hours,
            "simulation computed"
        );

        trace.push(SimulationState::Responded);
        (Ok(result), trace)
    }

    /// Estimated hours for a single order on its fastest line, without
    /// running a full simulation. Convenience for what-if probes.
    pub fn estimate_hours(&self, order: &ProductOrder) -> Option<f64> {
        let line = self.policy.select(order, self.registry.all_lines())?;
        timing::effective_time(order.theoretical_time, line.efficiency)
            .ok()
            .map(|et| timing::total_hours(order.quantity, et))
    }
}
