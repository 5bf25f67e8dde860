//! Concrete instrument types.
//!
//! This module provides the two instrument variants:
//!
//! - [`Equity`]: a tradable ownership share, ordered by price
//! - [`FixedIncome`]: a debt instrument, ordered by yield
//!
//! Both are plain immutable data holders. Each supplies its own display
//! format and its own ordering key; neither compares against the other.

mod equity;
mod fixed_income;

pub use equity::Equity;
pub use fixed_income::FixedIncome;
