//! Forward FX pricing under covered interest rate parity
//!
//! The forward is `S * exp(r_f - r_d)` with both rates continuously
//! compounded over a single one-year period. Two strategies are then run on a
//! fixed notional:
//!
//! - **domestic**: deposit the notional at the domestic rate, `N * (1 + r_d)`
//! - **foreign**: convert at spot, deposit abroad, convert back at the forward
//!
//! The foreign deposit earns the domestic growth plus the continuously
//! compounded rate differential, `(1 + r_d) * exp(r_f - r_d)`, which is the
//! growth the forward prices in. Both strategies therefore end on the same
//! domestic amount and `arbitrage_diff` only measures floating-point noise.

use crate::constants::{ARBITRAGE_TOLERANCE, INITIAL_INVESTMENT, PIPS_PER_UNIT};
use crate::types::{Cash, Percentage, Rate, RateInputs};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the period a chart point describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPointKind {
    #[serde(rename = "Spot Rate")]
    Spot,
    #[serde(rename = "Forward Rate")]
    Forward,
}

impl ChartPointKind {
    /// Display name, also used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPointKind::Spot => "Spot Rate",
            ChartPointKind::Forward => "Forward Rate",
        }
    }
}

impl fmt::Display for ChartPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One time point of the visualization series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// `t=0` or `t=1`
    pub label: String,
    pub exchange_rate: Rate,
    pub domestic_rate_pct: Percentage,
    pub foreign_rate_pct: Percentage,
    pub kind: ChartPointKind,
}

impl ChartPoint {
    fn new(kind: ChartPointKind, exchange_rate: Rate, inputs: &RateInputs) -> Self {
        let label = match kind {
            ChartPointKind::Spot => "t=0",
            ChartPointKind::Forward => "t=1",
        };
        Self {
            label: label.to_string(),
            exchange_rate,
            domestic_rate_pct: inputs.domestic_rate,
            foreign_rate_pct: inputs.foreign_rate,
            kind,
        }
    }
}

/// Outcome of pricing one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub spot_rate: Rate,
    /// CIP-implied forward rate; `0.0` when `is_valid` is false
    pub forward_rate: Rate,
    /// Notional converted at spot (foreign currency)
    pub foreign_currency_amount: Cash,
    /// Domestic deposit at the end of the period
    pub domestic_ending_value: Cash,
    /// Foreign deposit at the end of the period (foreign currency). Grows by
    /// `(1 + r_d) * exp(r_f - r_d)` rather than `1 + r_f`, matching the forward.
    pub foreign_ending_value: Cash,
    /// Foreign deposit converted back at the forward
    pub domestic_equivalent: Cash,
    pub arbitrage_diff: Cash,
    /// Diagnostic only; not a gate on displaying the result
    pub no_arbitrage: bool,
    pub chart_data: Vec<ChartPoint>,
    /// Inputs lie in the domain where the formulas are meaningful
    pub is_valid: bool,
}

impl PricingResult {
    /// Forward minus spot
    pub fn forward_points(&self) -> f64 {
        if self.is_valid {
            self.forward_rate - self.spot_rate
        } else {
            0.0
        }
    }

    /// Forward points quoted in pips
    pub fn forward_points_pips(&self) -> f64 {
        self.forward_points() * PIPS_PER_UNIT
    }

    /// Forward premium (positive) or discount (negative) over spot, in percent
    pub fn forward_premium_pct(&self) -> Percentage {
        if self.is_valid {
            (self.forward_rate / self.spot_rate - 1.0) * 100.0
        } else {
            0.0
        }
    }

    /// `ln(F / S)`, which recovers `r_f - r_d`
    pub fn implied_differential(&self) -> f64 {
        if self.is_valid && self.forward_rate > 0.0 {
            (self.forward_rate / self.spot_rate).ln()
        } else {
            0.0
        }
    }

    /// Chart point of the given kind
    pub fn chart_point(&self, kind: ChartPointKind) -> Option<&ChartPoint> {
        self.chart_data.iter().find(|p| p.kind == kind)
    }
}

/// Inputs for which the exponential and the division are well defined
pub fn in_pricing_domain(inputs: &RateInputs) -> bool {
    inputs.spot_rate.is_finite()
        && inputs.domestic_rate.is_finite()
        && inputs.foreign_rate.is_finite()
        && inputs.spot_rate > 0.0
        && inputs.domestic_decimal() > -1.0
        && inputs.foreign_decimal() > -1.0
}

/// Price the forward and run both strategies.
///
/// Never fails: inputs outside the pricing domain still produce a complete
/// result, flagged with `is_valid == false`.
pub fn price(inputs: &RateInputs) -> PricingResult {
    let r_d = inputs.domestic_decimal();
    let r_f = inputs.foreign_decimal();
    let differential = (r_f - r_d).exp();
    let raw_forward = inputs.spot_rate * differential;

    // exp can overflow or underflow for finite but extreme rates
    let is_valid = in_pricing_domain(inputs) && raw_forward.is_finite() && raw_forward > 0.0;
    if !is_valid {
        log::debug!("Pricing outside the valid domain: {:?}", inputs);
    }
    let forward_rate = if is_valid { raw_forward } else { 0.0 };

    let domestic_ending_value = INITIAL_INVESTMENT * (1.0 + r_d);

    let foreign_currency_amount = INITIAL_INVESTMENT * inputs.spot_rate;
    let foreign_ending_value = foreign_currency_amount * (1.0 + r_d) * differential;
    let domestic_equivalent = if is_valid {
        foreign_ending_value / forward_rate
    } else {
        0.0
    };

    let diff = (domestic_ending_value - domestic_equivalent).abs();
    let arbitrage_diff = if diff.is_nan() { f64::INFINITY } else { diff };
    let no_arbitrage = arbitrage_diff < ARBITRAGE_TOLERANCE;
    if is_valid && !no_arbitrage {
        log::warn!(
            "Strategies disagree by {} for {:?}; parity should hold exactly",
            arbitrage_diff,
            inputs
        );
    }

    let chart_data = vec![
        ChartPoint::new(ChartPointKind::Spot, inputs.spot_rate, inputs),
        ChartPoint::new(ChartPointKind::Forward, forward_rate, inputs),
    ];

    PricingResult {
        spot_rate: inputs.spot_rate,
        forward_rate,
        foreign_currency_amount,
        domestic_ending_value,
        foreign_ending_value,
        domestic_equivalent,
        arbitrage_diff,
        no_arbitrage,
        chart_data,
        is_valid,
    }
}
