//! # rusty-cip
//!
//! Forward foreign-exchange pricing under covered interest rate parity.
//!
//! Inputs are validated field by field for economic plausibility, then the
//! forward is priced from the spot rate and the two interest rates under
//! continuous compounding. Two competing investment strategies are simulated
//! to confirm that no arbitrage remains, and a two-point series is produced
//! for charting.
//!
//! ## Example
//!
//! ```rust
//! use rusty_cip::prelude::*;
//!
//! let inputs = RateInputs::new(1.2602, 2.360, 2.430);
//! match evaluate(&inputs) {
//!     Evaluation::Priced { result } => {
//!         assert!(result.forward_rate > inputs.spot_rate);
//!         assert!(result.no_arbitrage);
//!     }
//!     Evaluation::Rejected { errors } => panic!("{}", errors),
//! }
//! ```

pub mod constants;
pub mod currency;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod sweep;
pub mod types;
pub mod validation;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::engine::{evaluate, price_checked, Evaluation};
    pub use crate::error::{CipError, Result};
    pub use crate::pricing::{price, ChartPoint, ChartPointKind, PricingResult};
    pub use crate::sweep::{sweep_domestic_rate, sweep_foreign_rate, SweepPoint};
    pub use crate::types::*;
    pub use crate::validation::{validate, ValidationErrors};
}
