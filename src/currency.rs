//! Currency codes and quote labelling

use crate::error::CipError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency enumeration (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
        }
    }

    /// Currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::NZD => "NZ$",
            Currency::SEK => "kr",
            Currency::NOK => "kr",
        }
    }

    /// All supported currencies
    pub fn all() -> [Currency; 10] {
        [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::CHF,
            Currency::AUD,
            Currency::CAD,
            Currency::NZD,
            Currency::SEK,
            Currency::NOK,
        ]
    }
}

impl FromStr for Currency {
    type Err = CipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::all()
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| CipError::ParseError(format!("Unknown currency: {}", s)))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Domestic/foreign pair; spot and forward are quoted as foreign units per
/// one domestic unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub domestic: Currency,
    pub foreign: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(domestic: Currency, foreign: Currency) -> Self {
        Self { domestic, foreign }
    }

    /// Quote unit, e.g. `EUR per USD`
    pub fn quote_unit(&self) -> String {
        format!("{} per {}", self.foreign, self.domestic)
    }

    /// Pair with the roles swapped
    pub fn inverse(&self) -> Self {
        Self {
            domestic: self.foreign,
            foreign: self.domestic,
        }
    }

    /// Rate quoted in the inverse direction
    pub fn invert_rate(&self, rate: f64) -> f64 {
        if rate > 0.0 {
            1.0 / rate
        } else {
            0.0
        }
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(Currency::USD, Currency::EUR)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domestic, self.foreign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" GBP ".parse::<Currency>().unwrap(), Currency::GBP);
        assert!("XXX".parse::<Currency>().is_err());
    }

    #[test]
    fn test_quote_unit() {
        let pair = CurrencyPair::new(Currency::GBP, Currency::USD);
        assert_eq!(pair.quote_unit(), "USD per GBP");
        assert_eq!(pair.to_string(), "GBP/USD");
        assert_eq!(pair.inverse().quote_unit(), "GBP per USD");
    }

    #[test]
    fn test_invert_rate() {
        let pair = CurrencyPair::default();
        assert!((pair.invert_rate(1.25) - 0.8).abs() < 1e-12);
        assert_eq!(pair.invert_rate(0.0), 0.0);
        assert_eq!(pair.invert_rate(-2.0), 0.0);
    }
}
