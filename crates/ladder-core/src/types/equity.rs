//! Equity instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use ladder_sort::Ranked;

use crate::traits::Asset;

/// A tradable ownership share.
///
/// Equities order by `price`, ascending. Two equities at the same price are
/// tied; the sort keeps their original relative order.
///
/// # Example
///
/// ```rust
/// use ladder_core::types::Equity;
/// use rust_decimal_macros::dec;
///
/// let share = Equity::new("MSFT", dec!(342.0), "Microsoft Corp");
/// assert_eq!(share.to_string(), "MSFT: Microsoft Corp -- $342.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equity {
    /// Exchange ticker symbol
    ticker: String,
    /// Issuing company name
    company: String,
    /// Price per share
    price: Decimal,
}

impl Equity {
    /// Creates a new equity.
    ///
    /// # Arguments
    ///
    /// * `ticker` - Exchange ticker symbol
    /// * `price` - Price per share
    /// * `company` - Issuing company name
    #[must_use]
    pub fn new(ticker: impl Into<String>, price: Decimal, company: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            company: company.into(),
            price,
        }
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the issuing company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the price per share.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -- ${}", self.ticker, self.company, self.price)
    }
}

impl Ranked for Equity {
    /// Equities rank by price, cheapest first.
    fn ranks_before(&self, other: &Self) -> bool {
        self.price < other.price
    }
}

impl Asset for Equity {
    fn price(&self) -> Decimal {
        self.price
    }
}
