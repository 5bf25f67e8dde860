//! Instrument ladder collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ladder_sort::merge_sort;

use crate::traits::Asset;

/// A homogeneous collection of instruments.
///
/// A ladder accumulates instruments of one concrete variant in insertion
/// order and hands back an ascending arrangement on demand. Sorting never
/// reorders the ladder itself; [`sorted`](Ladder::sorted) returns a fresh
/// sequence.
///
/// The type parameter fixes the variant: a `Ladder<Equity>` and a
/// `Ladder<FixedIncome>` are unrelated types, so mixing instruments in one
/// ladder does not compile.
///
/// # Example
///
/// ```rust
/// use ladder_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let mut book = Ladder::new();
/// book.push(FixedIncome::new(dec!(95.31), "30 Year US Treasury", 30, dec!(4.38)));
/// book.push(FixedIncome::new(dec!(96.70), "10 Year US Treasury", 10, dec!(4.28)));
///
/// let rungs = book.sorted();
/// assert_eq!(rungs[0].description(), "10 Year US Treasury");
/// assert_eq!(book.rungs()[0].description(), "30 Year US Treasury");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ladder<T> {
    /// Instruments in insertion order
    rungs: Vec<T>,
}

impl<T: Asset + Clone> Ladder<T> {
    /// Creates a new empty ladder.
    #[must_use]
    pub fn new() -> Self {
        Self { rungs: Vec::new() }
    }

    /// Creates a ladder from an existing set of instruments.
    #[must_use]
    pub fn with_rungs(rungs: Vec<T>) -> Self {
        Self { rungs }
    }

    /// Adds an instrument to the ladder.
    pub fn push(&mut self, rung: T) {
        self.rungs.push(rung);
    }

    /// Adds every instrument from an iterator to the ladder.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, rungs: I) {
        self.rungs.extend(rungs);
    }

    /// Returns the instruments in insertion order.
    #[must_use]
    pub fn rungs(&self) -> &[T] {
        &self.rungs
    }

    /// Returns the number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Returns true if the ladder holds no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Returns an iterator over the instruments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rungs.iter()
    }

    /// Returns the instruments arranged ascending by their ordering key.
    ///
    /// The ladder itself is left in insertion order. Tied instruments keep
    /// their insertion order in the result.
    #[must_use]
    pub fn sorted(&self) -> Vec<T> {
        merge_sort(&self.rungs)
    }

    /// Returns the instrument with the lowest ordering key, without sorting.
    ///
    /// Among tied instruments the earliest inserted wins, matching the first
    /// element of [`sorted`](Ladder::sorted). Returns `None` for an empty
    /// ladder.
    #[must_use]
    pub fn bottom_rung(&self) -> Option<&T> {
        self.rungs
            .iter()
            .reduce(|best, next| if next.ranks_before(best) { next } else { best })
    }

    /// Returns the instrument with the highest ordering key, without sorting.
    ///
    /// Among tied instruments the latest inserted wins, matching the last
    /// element of [`sorted`](Ladder::sorted). Returns `None` for an empty
    /// ladder.
    #[must_use]
    pub fn top_rung(&self) -> Option<&T> {
        self.rungs
            .iter()
            .reduce(|best, next| if next.ranks_before(best) { best } else { next })
    }

    /// Returns the sum of all instrument prices.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.rungs.iter().map(|rung| rung.price()).sum()
    }
}

impl<T: Asset + Clone> Default for Ladder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Asset + Clone> FromIterator<T> for Ladder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rungs: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Ladder<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rungs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ladder<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rungs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Equity, FixedIncome};
    use ladder_sort::Ranked;
    use rust_decimal_macros::dec;

    fn treasuries() -> Ladder<FixedIncome> {
        let mut book = Ladder::new();
        book.push(FixedIncome::new(
            dec!(95.31),
            "30 Year US Treasury",
            30,
            dec!(4.38),
        ));
        book.push(FixedIncome::new(
            dec!(96.70),
            "10 Year US Treasury",
            10,
            dec!(4.28),
        ));
        book.push(FixedIncome::new(
            dec!(98.65),
            "5 Year US Treasury",
            5,
            dec!(4.43),
        ));
        book.push(FixedIncome::new(
            dec!(99.57),
            "2 Year US Treasury",
            2,
            dec!(4.98),
        ));
        book
    }

    #[test]
    fn test_ladder_accumulates_in_insertion_order() {
        let book = treasuries();

        assert_eq!(book.len(), 4);
        assert!(!book.is_empty());
        assert_eq!(book.rungs()[0].description(), "30 Year US Treasury");
        assert_eq!(book.rungs()[3].description(), "2 Year US Treasury");
    }

    #[test]
    fn test_sorted_ascending_by_yield() {
        let book = treasuries();
        let rungs = book.sorted();

        let descriptions: Vec<&str> = rungs.iter().map(FixedIncome::description).collect();
        assert_eq!(
            descriptions,
            vec![
                "10 Year US Treasury",
                "30 Year US Treasury",
                "5 Year US Treasury",
                "2 Year US Treasury",
            ]
        );
    }

    #[test]
    fn test_sorted_leaves_ladder_untouched() {
        let book = treasuries();
        let _ = book.sorted();

        assert_eq!(book.rungs()[0].description(), "30 Year US Treasury");
        assert_eq!(book.rungs()[1].description(), "10 Year US Treasury");
    }

    #[test]
    fn test_bottom_and_top_rung() {
        let book = treasuries();

        assert_eq!(
            book.bottom_rung().map(FixedIncome::description),
            Some("10 Year US Treasury")
        );
        assert_eq!(
            book.top_rung().map(FixedIncome::description),
            Some("2 Year US Treasury")
        );
    }

    #[test]
    fn test_empty_ladder_has_no_extremes() {
        let book: Ladder<Equity> = Ladder::new();

        assert!(book.is_empty());
        assert!(book.bottom_rung().is_none());
        assert!(book.top_rung().is_none());
        assert!(book.sorted().is_empty());
    }

    #[test]
    fn test_tied_extremes_match_sorted_ends() {
        let mut book = Ladder::new();
        book.push(Equity::new("AAA", dec!(150.0), "Alpha Corp"));
        book.push(Equity::new("BBB", dec!(150.0), "Beta Corp"));
        book.push(Equity::new("CCC", dec!(150.0), "Gamma Corp"));

        let rungs = book.sorted();
        assert_eq!(book.bottom_rung().map(Equity::ticker), Some("AAA"));
        assert_eq!(book.top_rung().map(Equity::ticker), Some("CCC"));
        assert_eq!(rungs.first().map(Equity::ticker), Some("AAA"));
        assert_eq!(rungs.last().map(Equity::ticker), Some("CCC"));
    }

    #[test]
    fn test_total_price() {
        let mut book = Ladder::new();
        book.push(Equity::new("MSFT", dec!(342.0), "Microsoft Corp"));
        book.push(Equity::new("GOOG", dec!(135.0), "Google Inc"));

        assert_eq!(book.total_price(), dec!(477.0));
    }

    #[test]
    fn test_extend_and_from_iterator() {
        let shares = vec![
            Equity::new("MSFT", dec!(342.0), "Microsoft Corp"),
            Equity::new("GOOG", dec!(135.0), "Google Inc"),
        ];

        let collected: Ladder<Equity> = shares.iter().cloned().collect();
        assert_eq!(collected.len(), 2);

        let mut extended = Ladder::new();
        extended.extend(shares);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.rungs(), collected.rungs());
    }

    #[test]
    fn test_into_iterator() {
        let book = treasuries();

        let borrowed: Vec<&FixedIncome> = (&book).into_iter().collect();
        assert_eq!(borrowed.len(), 4);

        let owned: Vec<FixedIncome> = book.into_iter().collect();
        assert_eq!(owned.len(), 4);
        assert_eq!(owned[0].description(), "30 Year US Treasury");
    }

    #[test]
    fn test_bottom_rung_agrees_with_ranking() {
        let book = treasuries();
        let bottom = book.bottom_rung().unwrap();

        for rung in book.iter() {
            assert!(!rung.ranks_before(bottom));
        }
    }

    #[test]
    fn test_serde() {
        let book = treasuries();
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Ladder<FixedIncome> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), book.len());
        assert_eq!(parsed.rungs(), book.rungs());
    }
}
