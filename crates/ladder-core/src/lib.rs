//! # Ladder Core
//!
//! Instrument model for the Ladder instrument ordering library.
//!
//! This crate provides the domain types sorted by the `ladder-sort` kernel:
//!
//! - **Types**: Concrete instruments [`Equity`] and [`FixedIncome`]
//! - **Traits**: The [`Asset`] abstraction over priced instruments
//! - **Collection**: [`Ladder`], a homogeneous instrument holder with a
//!   stable, non-mutating sort
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: The abstract instrument is a trait, so it cannot be
//!   constructed; only concrete variants exist
//! - **Homogeneity**: Comparison takes `&Self`, so ordering across variants
//!   does not compile; a ladder holds exactly one instrument kind
//! - **Exact Display**: Prices and yields are [`rust_decimal::Decimal`], so
//!   a quote entered as `150.0` renders as `150.0`, not `150`
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Equity::new("MSFT", dec!(250.0), "Microsoft Corp"),
//!     Equity::new("GOOG", dec!(100.0), "Google Inc"),
//! ];
//!
//! let sorted = merge_sort(&holdings);
//! assert_eq!(sorted[0].to_string(), "GOOG: Google Inc -- $100.0");
//! assert_eq!(sorted[1].to_string(), "MSFT: Microsoft Corp -- $250.0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::uninlined_format_args)]

pub mod ladder;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ladder::Ladder;
    pub use crate::traits::Asset;
    pub use crate::types::{Equity, FixedIncome};
    pub use ladder_sort::{merge_sort, Ranked};
}

// Re-export commonly used items at crate root
pub use ladder::Ladder;
pub use ladder_sort::{merge_sort, Ranked};
pub use traits::Asset;
pub use types::{Equity, FixedIncome};
