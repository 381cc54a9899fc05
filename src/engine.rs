//! Validate-then-price control flow

use crate::error::Result;
use crate::pricing::{price, PricingResult};
use crate::types::RateInputs;
use crate::validation::{validate, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Response to one set of inputs: either field errors or a priced result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Evaluation {
    /// At least one field failed validation; nothing was priced
    Rejected { errors: ValidationErrors },
    /// All fields accepted and priced
    Priced { result: PricingResult },
}

impl Evaluation {
    /// True when the inputs were priced
    pub fn is_priced(&self) -> bool {
        matches!(self, Evaluation::Priced { .. })
    }

    /// Field errors of a rejected evaluation
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Evaluation::Rejected { errors } => Some(errors),
            Evaluation::Priced { .. } => None,
        }
    }

    /// Pricing result, whether or not it is displayable
    pub fn result(&self) -> Option<&PricingResult> {
        match self {
            Evaluation::Priced { result } => Some(result),
            Evaluation::Rejected { .. } => None,
        }
    }

    /// The result a caller may show: priced and inside the pricing domain.
    /// `no_arbitrage` does not gate display.
    pub fn displayable(&self) -> Option<&PricingResult> {
        self.result().filter(|r| r.is_valid)
    }
}

/// Validate the inputs and price them only if every field was accepted
pub fn evaluate(inputs: &RateInputs) -> Evaluation {
    let errors = validate(inputs);
    if !errors.is_empty() {
        log::debug!("Rejected {:?}: {}", inputs, errors);
        return Evaluation::Rejected { errors };
    }
    Evaluation::Priced {
        result: price(inputs),
    }
}

/// Like [`evaluate`], with rejected inputs returned as `CipError::Validation`
pub fn price_checked(inputs: &RateInputs) -> Result<PricingResult> {
    validate(inputs).into_result()?;
    Ok(price(inputs))
}
