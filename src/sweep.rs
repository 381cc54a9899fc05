//! Forward curve sweeps
//!
//! Prices a grid of one rate while the other inputs stay fixed. Grid points
//! that fail validation are dropped; the remaining rows are in ascending
//! rate order whichever way the bounds were given.

use crate::constants::MAX_SWEEP_STEPS;
use crate::engine::evaluate;
use crate::types::{Field, Percentage, Rate, RateInputs};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One priced point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// Swept rate, in percent
    pub rate_pct: Percentage,
    pub forward_rate: Rate,
    pub no_arbitrage: bool,
}

/// Evenly spaced ascending grid between `from` and `to` inclusive.
///
/// Empty for zero steps, non-finite bounds or more than `MAX_SWEEP_STEPS` points.
pub fn rate_grid(from: Percentage, to: Percentage, steps: usize) -> Vec<Percentage> {
    if steps == 0 || !from.is_finite() || !to.is_finite() {
        return Vec::new();
    }
    if steps > MAX_SWEEP_STEPS {
        log::warn!(
            "Sweep of {} steps exceeds the limit of {}",
            steps,
            MAX_SWEEP_STEPS
        );
        return Vec::new();
    }
    if steps == 1 {
        return vec![from];
    }
    let (from, to) = if from <= to { (from, to) } else { (to, from) };
    let step = (to - from) / (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            if i == steps - 1 {
                to
            } else {
                from + step * i as f64
            }
        })
        .collect()
}

/// Sweep an arbitrary rate field over the grid
pub fn sweep_rate(
    base: &RateInputs,
    field: Field,
    from: Percentage,
    to: Percentage,
    steps: usize,
) -> Vec<SweepPoint> {
    let grid = rate_grid(from, to, steps);
    let points: Vec<SweepPoint> = grid
        .par_iter()
        .filter_map(|&rate_pct| {
            let inputs = base.with(field, rate_pct);
            evaluate(&inputs).displayable().map(|result| SweepPoint {
                rate_pct,
                forward_rate: result.forward_rate,
                no_arbitrage: result.no_arbitrage,
            })
        })
        .collect();
    if points.len() < grid.len() {
        log::debug!(
            "Sweep over {} skipped {} of {} grid points",
            field,
            grid.len() - points.len(),
            grid.len()
        );
    }
    points
}

/// Forward curve as the foreign rate moves
pub fn sweep_foreign_rate(
    base: &RateInputs,
    from: Percentage,
    to: Percentage,
    steps: usize,
) -> Vec<SweepPoint> {
    sweep_rate(base, Field::ForeignRate, from, to, steps)
}

/// Forward curve as the domestic rate moves
pub fn sweep_domestic_rate(
    base: &RateInputs,
    from: Percentage,
    to: Percentage,
    steps: usize,
) -> Vec<SweepPoint> {
    sweep_rate(base, Field::DomesticRate, from, to, steps)
}
