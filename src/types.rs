//! Core types shared by the validator and the pricer

use crate::constants::{DEFAULT_DOMESTIC_RATE_PCT, DEFAULT_FOREIGN_RATE_PCT, DEFAULT_SPOT_RATE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange rate (foreign units per one domestic unit)
pub type Rate = f64;

/// Annualized rate quoted in percent (2.36 means 2.36%)
pub type Percentage = f64;

/// Money amount in a single currency
pub type Cash = f64;

/// Input field keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SpotRate,
    DomesticRate,
    ForeignRate,
}

impl Field {
    /// Wire key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Field::SpotRate => "spotRate",
            Field::DomesticRate => "domesticRate",
            Field::ForeignRate => "foreignRate",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::SpotRate => "Spot rate",
            Field::DomesticRate => "Domestic rate",
            Field::ForeignRate => "Foreign rate",
        }
    }

    /// All fields in display order
    pub fn all() -> [Field; 3] {
        [Field::SpotRate, Field::DomesticRate, Field::ForeignRate]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw pricing inputs for one computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInputs {
    /// Foreign-currency units per one domestic unit
    pub spot_rate: Rate,
    /// Domestic annualized rate, in percent
    pub domestic_rate: Percentage,
    /// Foreign annualized rate, in percent
    pub foreign_rate: Percentage,
}

impl RateInputs {
    /// Create new inputs
    pub fn new(spot_rate: Rate, domestic_rate: Percentage, foreign_rate: Percentage) -> Self {
        Self {
            spot_rate,
            domestic_rate,
            foreign_rate,
        }
    }

    /// Value of a single field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::SpotRate => self.spot_rate,
            Field::DomesticRate => self.domestic_rate,
            Field::ForeignRate => self.foreign_rate,
        }
    }

    /// Copy with one field replaced
    pub fn with(mut self, field: Field, value: f64) -> Self {
        match field {
            Field::SpotRate => self.spot_rate = value,
            Field::DomesticRate => self.domestic_rate = value,
            Field::ForeignRate => self.foreign_rate = value,
        }
        self
    }

    /// Domestic rate as a decimal fraction
    pub fn domestic_decimal(&self) -> f64 {
        self.domestic_rate / 100.0
    }

    /// Foreign rate as a decimal fraction
    pub fn foreign_decimal(&self) -> f64 {
        self.foreign_rate / 100.0
    }
}

impl Default for RateInputs {
    fn default() -> Self {
        Self::new(
            DEFAULT_SPOT_RATE,
            DEFAULT_DOMESTIC_RATE_PCT,
            DEFAULT_FOREIGN_RATE_PCT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs() {
        let inputs = RateInputs::default();
        assert_eq!(inputs.spot_rate, 1.2602);
        assert_eq!(inputs.domestic_rate, 2.360);
        assert_eq!(inputs.foreign_rate, 2.430);
    }

    #[test]
    fn test_decimal_conversion() {
        let inputs = RateInputs::new(1.0, 5.0, -2.5);
        assert_eq!(inputs.domestic_decimal(), 0.05);
        assert_eq!(inputs.foreign_decimal(), -0.025);
    }

    #[test]
    fn test_with_replaces_single_field() {
        let inputs = RateInputs::default().with(Field::ForeignRate, 7.0);
        assert_eq!(inputs.get(Field::ForeignRate), 7.0);
        assert_eq!(inputs.get(Field::SpotRate), 1.2602);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{"spotRate":1.5,"domesticRate":3.0,"foreignRate":1.0}"#;
        let inputs: RateInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs, RateInputs::new(1.5, 3.0, 1.0));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::SpotRate.to_string(), "spotRate");
        assert_eq!(Field::ForeignRate.label(), "Foreign rate");
    }
}
