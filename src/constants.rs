//! Pricing constants and defaults
//!
//! Validation bounds, the strategy notional and the default scenario

/// Notional invested by both strategies (domestic currency units)
pub const INITIAL_INVESTMENT: f64 = 1000.0;

/// Maximum discrepancy between strategy outcomes still treated as arbitrage-free
pub const ARBITRAGE_TOLERANCE: f64 = 0.01;

/// Spot rates above this are rejected as unrealistic
pub const MAX_SPOT_RATE: f64 = 10.0;

/// Rates must be strictly greater than this (percent)
pub const MIN_RATE_PCT: f64 = -100.0;

/// Rates may not exceed this (percent)
pub const MAX_RATE_PCT: f64 = 50.0;

/// Default scenario
pub const DEFAULT_SPOT_RATE: f64 = 1.2602;
pub const DEFAULT_DOMESTIC_RATE_PCT: f64 = 2.360;
pub const DEFAULT_FOREIGN_RATE_PCT: f64 = 2.430;

/// One pip in forward-point quoting
pub const PIPS_PER_UNIT: f64 = 10_000.0;

/// Largest grid a rate sweep will build
pub const MAX_SWEEP_STEPS: usize = 100_000;
