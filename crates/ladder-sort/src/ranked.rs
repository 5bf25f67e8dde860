//! Pairwise ordering capability.

/// Strict "sorts earlier than" comparison between two values of one type.
///
/// `Ranked` is the capability [`merge_sort`](crate::merge_sort) requires of
/// its elements: each implementing type designates its own ordering key and
/// reports whether `self` sorts strictly before `other` on that key.
///
/// Implementations must behave like a strict ordering on the key:
/// irreflexive (`a.ranks_before(a)` is `false`), asymmetric, and transitive.
/// Two values where neither ranks before the other are *tied*; breaking ties
/// is the sorter's business, not the element's.
///
/// The `&Self` receiver means comparison is only defined between values of
/// the same type; comparing across types is a compile error, not a runtime
/// surprise.
///
/// # Example
///
/// ```rust
/// use ladder_sort::Ranked;
///
/// struct Maturity {
///     years: u32,
/// }
///
/// impl Ranked for Maturity {
///     fn ranks_before(&self, other: &Self) -> bool {
///         self.years < other.years
///     }
/// }
///
/// let short = Maturity { years: 2 };
/// let long = Maturity { years: 30 };
/// assert!(short.ranks_before(&long));
/// assert!(!long.ranks_before(&short));
/// ```
pub trait Ranked {
    /// Returns `true` when `self` sorts strictly earlier than `other`.
    fn ranks_before(&self, other: &Self) -> bool;
}
