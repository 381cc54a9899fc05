//! Input validation
//!
//! Each field is checked on its own against a lower (exclusive) and an upper
//! (inclusive) bound. The lower bound is tested first, so a NaN fails it
//! rather than slipping through both comparisons.

use crate::constants::{MAX_RATE_PCT, MAX_SPOT_RATE, MIN_RATE_PCT};
use crate::error::{CipError, Result};
use crate::types::{Field, RateInputs};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Plausibility bounds for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    /// Values must be strictly greater than this
    pub lower: f64,
    /// Values must not exceed this
    pub upper: f64,
}

impl FieldRule {
    /// Rule for a field, using the crate bounds
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::SpotRate => Self {
                field,
                lower: 0.0,
                upper: MAX_SPOT_RATE,
            },
            Field::DomesticRate | Field::ForeignRate => Self {
                field,
                lower: MIN_RATE_PCT,
                upper: MAX_RATE_PCT,
            },
        }
    }

    /// First violated bound, if any
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn check(&self, value: f64) -> Option<String> {
        if !(value > self.lower) {
            Some(self.lower_message())
        } else if value > self.upper {
            Some(self.upper_message())
        } else {
            None
        }
    }

    fn lower_message(&self) -> String {
        match self.field {
            Field::SpotRate => format!("{} must be positive", self.field.label()),
            _ => format!(
                "{} must be greater than {}%",
                self.field.label(),
                self.lower
            ),
        }
    }

    fn upper_message(&self) -> String {
        match self.field {
            Field::SpotRate => format!("{} is unrealistically high", self.field.label()),
            _ => format!("{} cannot exceed {}%", self.field.label(), self.upper),
        }
    }
}

/// Field-keyed error messages; empty means the inputs were accepted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether a field failed
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(())` when empty, otherwise all errors as one `CipError`
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CipError::Validation(self))
        }
    }

    /// One `InputOutOfRange` error per failing field
    pub fn to_errors(&self) -> Vec<CipError> {
        self.iter()
            .map(|(field, message)| CipError::InputOutOfRange {
                field,
                message: message.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check raw inputs against the plausibility rules
pub fn validate(inputs: &RateInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in Field::all() {
        if let Some(message) = FieldRule::for_field(field).check(inputs.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}
