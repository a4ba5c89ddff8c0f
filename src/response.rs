//! External response payloads.
//!
//! The renderer consumes a fixed JSON schema whose field names and
//! units are a frozen contract (`risultati_prodotti`, `durata_lotto_ore`,
//! ...). Core values stay unrounded; rounding to presentation precision
//! happens only here: effective time to the nearest minute, hours to
//! two decimals, days to three. Failures are always a list of strings
//! under `errore`, never a bare string; the renderer distinguishes
//! success from failure by status alone.

use serde::{Deserialize, Serialize};

use crate::models::{BatchResult, ProductAllocation};
use crate::simulator::SimulationFailure;

/// One product row of the success payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    #[serde(rename = "prodotto")]
    pub product: String,
    #[serde(rename = "quantita")]
    pub quantity: u32,
    #[serde(rename = "tempo_teorico")]
    pub theoretical_time: f64,
    #[serde(rename = "linea")]
    pub line: String,
    #[serde(rename = "efficienza")]
    pub efficiency: f64,
    #[serde(rename = "tempo_effettivo")]
    pub effective_time: f64,
    #[serde(rename = "capacita_giornaliera")]
    pub daily_capacity: u32,
    #[serde(rename = "ore_totali")]
    pub total_hours: f64,
    #[serde(rename = "giorni_necessari")]
    pub days_required: f64,
}

/// Success payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(rename = "risultati_prodotti")]
    pub products: Vec<ProductReport>,
    #[serde(rename = "capacita_complessiva")]
    pub plant_daily_capacity: u32,
    #[serde(rename = "durata_lotto_ore")]
    pub batch_duration_hours: f64,
    #[serde(rename = "durata_lotto_giorni")]
    pub batch_duration_days: f64,
}

/// Failure payload: an ordered list of human-readable messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    #[serde(rename = "errore")]
    pub errors: Vec<String>,
}

/// A shaped response with its HTTP-style status.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationOutcome {
    /// Status 200 with the batch report.
    Success(BatchReport),
    /// Status 400 with the accumulated error list.
    Rejected(ErrorReport),
    /// Status 500 with a single generic message for unexpected faults.
    ServerError(ErrorReport),
}

impl SimulationOutcome {
    /// HTTP-style status code for the host service.
    pub fn status(&self) -> u16 {
        match self {
            SimulationOutcome::Success(_) => 200,
            SimulationOutcome::Rejected(_) => 400,
            SimulationOutcome::ServerError(_) => 500,
        }
    }

    /// Shapes a simulation result into a response.
    pub fn from_result(result: Result<BatchResult, SimulationFailure>) -> Self {
        match result {
            Ok(batch) => SimulationOutcome::Success(BatchReport::from_batch(&batch)),
            Err(failure) => SimulationOutcome::Rejected(ErrorReport {
                errors: failure.errors,
            }),
        }
    }

    /// The generic fallback for unexpected internal faults.
    pub fn server_error(detail: impl std::fmt::Display) -> Self {
        SimulationOutcome::ServerError(ErrorReport {
            errors: vec![format!("Errore durante la simulazione: {detail}")],
        })
    }
}

impl BatchReport {
    /// Shapes a batch result, applying presentation rounding.
    pub fn from_batch(batch: &BatchResult) -> Self {
        Self {
            products: batch.allocations.iter().map(ProductReport::from_allocation).collect(),
            plant_daily_capacity: batch.plant_daily_capacity,
            batch_duration_hours: round2(batch.batch_duration_hours),
            batch_duration_days: round3(batch.batch_duration_days),
        }
    }
}

impl ProductReport {
    /// Shapes one allocation row, applying presentation rounding.
    pub fn from_allocation(allocation: &ProductAllocation) -> Self {
        Self {
            product: allocation.product.clone(),
            quantity: allocation.quantity,
            theoretical_time: allocation.theoretical_time,
            line: allocation.line_name.clone(),
            efficiency: allocation.efficiency,
            effective_time: round_to_minute(allocation.effective_time),
            daily_capacity: allocation.daily_capacity,
            total_hours: round2(allocation.total_hours),
            days_required: round3(allocation.days_required),
        }
    }
}

/// Rounds decimal hours to the nearest whole minute.
fn round_to_minute(hours: f64) -> f64 {
    let whole_hours = hours.trunc();
    let minutes = ((hours - whole_hours) * 60.0).round();
    whole_hours + minutes / 60.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
