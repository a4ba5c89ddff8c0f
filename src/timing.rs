//! Timing model.
//!
//! Pure conversions between theoretical per-unit times, line-adjusted
//! effective times, daily throughput, and calendar durations. All
//! arithmetic is real-valued; the only rounding is the explicit floor
//! in [`daily_capacity`], which counts whole units per working day.

use crate::error::{Result, SimulationError};

/// Per-unit time on a line after applying its efficiency divisor.
///
/// `effective = theoretical / efficiency`, so efficiency above 1.0
/// means the line runs faster than the nominal rate.
///
/// # Errors
/// `InvalidInput` if `theoretical_time <= 0` or `efficiency <= 0`.
pub fn effective_time(theoretical_time: f64, efficiency: f64) -> Result<f64> {
    if !(theoretical_time > 0.0) {
        return Err(SimulationError::InvalidInput(format!(
            "theoretical time must be positive, got {theoretical_time}"
        )));
    }
    if !(efficiency > 0.0) {
        return Err(SimulationError::InvalidInput(format!(
            "efficiency must be positive, got {efficiency}"
        )));
    }
    Ok(theoretical_time / efficiency)
}

/// Whole units a line can produce in one working day.
///
/// Floors `working_hours_per_day / effective_time` to a unit count.
/// Values beyond the `u32` range (degenerately small effective times)
/// clamp to `u32::MAX` instead of wrapping.
///
/// # Errors
/// `InvalidInput` if either argument is non-positive.
pub fn daily_capacity(effective_time: f64, working_hours_per_day: f64) -> Result<u32> {
    if !(effective_time > 0.0) {
        return Err(SimulationError::InvalidInput(format!(
            "effective time must be positive, got {effective_time}"
        )));
    }
    if !(working_hours_per_day > 0.0) {
        return Err(SimulationError::InvalidInput(format!(
            "working hours per day must be positive, got {working_hours_per_day}"
        )));
    }
    let units = (working_hours_per_day / effective_time).floor();
    if units >= u32::MAX as f64 {
        return Ok(u32::MAX);
    }
    Ok(units as u32)
}

/// Total hours to produce `quantity` units at `effective_time` hours each.
#[inline]
pub fn total_hours(quantity: u32, effective_time: f64) -> f64 {
    quantity as f64 * effective_time
}

/// Fractional working days needed for `total_hours` of work. Not floored.
#[inline]
pub fn days_required(total_hours: f64, working_hours_per_day: f64) -> f64 {
    total_hours / working_hours_per_day
}
