//! Fixed income instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use ladder_sort::Ranked;

use crate::traits::Asset;

/// A debt instrument.
///
/// Fixed income instruments order by `yield_rate`, ascending, so a ladder of
/// them runs from the lowest-yielding rung to the highest. Price and duration
/// play no part in the ordering. Two instruments at the same yield are tied;
/// the sort keeps their original relative order.
///
/// # Example
///
/// ```rust
/// use ladder_core::types::FixedIncome;
/// use rust_decimal_macros::dec;
///
/// let note = FixedIncome::new(dec!(96.70), "10 Year US Treasury", 10, dec!(4.28));
/// assert_eq!(note.to_string(), "10 Year US Treasury: 10 : $96.70 : 4.28");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIncome {
    /// Instrument description
    description: String,
    /// Duration in whole years
    duration: u32,
    /// Market price
    price: Decimal,
    /// Yield in percent
    yield_rate: Decimal,
}

impl FixedIncome {
    /// Creates a new fixed income instrument.
    ///
    /// # Arguments
    ///
    /// * `price` - Market price
    /// * `description` - Instrument description
    /// * `duration` - Duration in whole years
    /// * `yield_rate` - Yield in percent
    #[must_use]
    pub fn new(
        price: Decimal,
        description: impl Into<String>,
        duration: u32,
        yield_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            duration,
            price,
            yield_rate,
        }
    }

    /// Returns the instrument description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the duration in whole years.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns the market price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the yield in percent.
    #[must_use]
    pub fn yield_rate(&self) -> Decimal {
        self.yield_rate
    }
}

impl fmt::Display for FixedIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} : ${} : {}",
            self.description, self.duration, self.price, self.yield_rate
        )
    }
}

impl Ranked for FixedIncome {
    /// Fixed income instruments rank by yield, lowest first.
    fn ranks_before(&self, other: &Self) -> bool {
        self.yield_rate < other.yield_rate
    }
}

impl Asset for FixedIncome {
    fn price(&self) -> Decimal {
        self.price
    }
}
