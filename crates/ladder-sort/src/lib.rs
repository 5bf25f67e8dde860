//! # Ladder Sort
//!
//! Sorting kernel for the Ladder instrument ordering library.
//!
//! This crate provides:
//!
//! - [`Ranked`]: the pairwise ordering capability element types implement
//! - [`merge_sort`]: a stable, non-mutating merge sort over slices of
//!   `Ranked` elements
//!
//! ## Design Philosophy
//!
//! - **Stability**: elements tied on their ordering key keep their input order
//! - **Purity**: the input is never mutated; the result is freshly allocated
//! - **Generic**: independent of what is being sorted; any `Ranked` type works
//!
//! ## Example
//!
//! ```rust
//! use ladder_sort::{merge_sort, Ranked};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tenor(u32);
//!
//! impl Ranked for Tenor {
//!     fn ranks_before(&self, other: &Self) -> bool {
//!         self.0 < other.0
//!     }
//! }
//!
//! let tenors = vec![Tenor(30), Tenor(2), Tenor(10)];
//! let sorted = merge_sort(&tenors);
//! assert_eq!(sorted, vec![Tenor(2), Tenor(10), Tenor(30)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

mod merge;
mod ranked;

pub use merge::merge_sort;
pub use ranked::Ranked;
