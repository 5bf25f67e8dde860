//! Sample instrument books.
//!
//! Four large-cap equities and a four-rung US Treasury ladder, held in
//! deliberately unsorted insertion order so the sort has work to do.

use ladder_core::{Equity, FixedIncome, Ladder};
use rust_decimal_macros::dec;

/// Returns the sample equity book.
pub fn equities() -> Ladder<Equity> {
    Ladder::with_rungs(vec![
        Equity::new("MSFT", dec!(342.0), "Microsoft Corp"),
        Equity::new("GOOG", dec!(135.0), "Google Inc"),
        Equity::new("META", dec!(275.0), "Meta Platforms Inc"),
        Equity::new("AMZN", dec!(120.0), "Amazon Inc"),
    ])
}

/// Returns the sample US Treasury book.
pub fn treasuries() -> Ladder<FixedIncome> {
    Ladder::with_rungs(vec![
        FixedIncome::new(dec!(95.31), "30 Year US Treasury", 30, dec!(4.38)),
        FixedIncome::new(dec!(96.70), "10 Year US Treasury", 10, dec!(4.28)),
        FixedIncome::new(dec!(98.65), "5 Year US Treasury", 5, dec!(4.43)),
        FixedIncome::new(dec!(99.57), "2 Year US Treasury", 2, dec!(4.98)),
    ])
}
