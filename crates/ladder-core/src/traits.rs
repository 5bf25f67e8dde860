//! Core Asset trait definition.
//!
//! The `Asset` trait is the abstract priced instrument: it names the
//! capabilities every concrete variant must supply and cannot itself be
//! constructed.

use rust_decimal::Decimal;
use std::fmt;

use ladder_sort::Ranked;

/// Abstract priced instrument.
///
/// Every concrete instrument carries a price, renders itself as text
/// ([`fmt::Display`]), and orders itself against peers of the same variant
/// ([`Ranked`]). The supertrait bounds make the last two non-optional: a
/// type missing either does not implement `Asset`.
///
/// Being a trait, the abstract instrument has no constructor; only the
/// concrete variants ([`Equity`](crate::types::Equity),
/// [`FixedIncome`](crate::types::FixedIncome)) can be instantiated. And
/// because [`Ranked`] compares against `&Self`, the trait is not object
/// safe: a `Box<dyn Asset>` collection mixing variants is a compile error,
/// not a runtime hazard.
///
/// # Example
///
/// ```rust
/// use ladder_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// fn cheapest_first<T: Asset + Clone>(book: &[T]) -> Vec<T> {
///     merge_sort(book)
/// }
///
/// let book = vec![
///     Equity::new("AMZN", dec!(120.0), "Amazon Inc"),
///     Equity::new("META", dec!(275.0), "Meta Platforms Inc"),
/// ];
/// let ordered = cheapest_first(&book);
/// assert_eq!(ordered[0].price(), dec!(120.0));
/// ```
pub trait Asset: fmt::Display + Ranked {
    /// Returns the instrument's price.
    fn price(&self) -> Decimal;
}
