//! Selector resolution.
//!
//! [`resolve`] is a pure function of the selector, the collection size and the
//! current anchor. It returns the selected indices together with the anchor
//! relative selectors should use next. The builder only stores the result.

use crate::error::SelectionError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Predicate over collection positions.
pub type IndexPredicate = Rc<dyn Fn(usize) -> bool>;

/// The active index-selection rule.
#[derive(Clone)]
pub enum Selector {
    /// Every position
    All,
    /// The first `n` positions
    First(i64),
    /// From just past the anchor through `n` further positions
    Next(i64),
    /// The last `n` positions
    Last(i64),
    /// From `n` positions before the one preceding the anchor up to it
    Previous(i64),
    /// A single position
    Nth(i64),
    /// Inclusive range of positions
    Slice { start: i64, end: i64 },
    /// Every `n`th position, counting from one
    EveryNth(i64),
    /// Every position the predicate accepts
    Predicate(IndexPredicate),
    /// `count` distinct positions drawn from a source seeded with `seed`
    Random { count: i64, seed: u64 },
}

impl Selector {
    /// Builder method the selector was activated through, for messages.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::First(_) => "the_first",
            Self::Next(_) => "the_next",
            Self::Last(_) => "the_last",
            Self::Previous(_) => "the_previous",
            Self::Nth(_) => "the_nth",
            Self::Slice { .. } => "the_slice",
            Self::EveryNth(_) => "every_nth",
            Self::Predicate(_) => "predicated",
            Self::Random { .. } => "random",
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::First(n) => f.debug_tuple("First").field(n).finish(),
            Self::Next(n) => f.debug_tuple("Next").field(n).finish(),
            Self::Last(n) => f.debug_tuple("Last").field(n).finish(),
            Self::Previous(n) => f.debug_tuple("Previous").field(n).finish(),
            Self::Nth(i) => f.debug_tuple("Nth").field(i).finish(),
            Self::Slice { start, end } => f
                .debug_struct("Slice")
                .field("start", start)
                .field("end", end)
                .finish(),
            Self::EveryNth(n) => f.debug_tuple("EveryNth").field(n).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Random { count, seed } => f
                .debug_struct("Random")
                .field("count", count)
                .field("seed", seed)
                .finish(),
        }
    }
}

/// Inclusive range of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Range from `start` to `end`, both inclusive.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range covering a whole collection of `size` elements.
    pub fn full(size: usize) -> Self {
        Self::new(0, size.saturating_sub(1))
    }

    /// Positions covered by the range.
    pub fn positions(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Outcome of resolving a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Selected positions, ascending
    pub indices: Vec<usize>,
    /// New anchor, or `None` to keep the current one
    pub anchor: Option<IndexRange>,
}

impl Resolution {
    fn range(range: IndexRange) -> Self {
        Self {
            indices: range.positions().collect(),
            anchor: Some(range),
        }
    }

    /// Scattered positions; the anchor spans the first to the last match.
    fn matches(indices: Vec<usize>) -> Self {
        let anchor = match (indices.first(), indices.last()) {
            (Some(&first), Some(&last)) => Some(IndexRange::new(first, last)),
            _ => None,
        };
        Self { indices, anchor }
    }
}

/// Resolve `selector` against a collection of `size` elements.
///
/// `anchor` is the most recently resolved range; `Next` and `Previous` are
/// relative to it. Fails without side effects when the selector does not fit
/// the collection.
pub fn resolve(
    selector: &Selector,
    size: usize,
    anchor: IndexRange,
) -> Result<Resolution, SelectionError> {
    let operation = selector.operation();

    match *selector {
        Selector::All => Ok(Resolution::range(IndexRange::full(size))),

        Selector::First(count) => {
            let n = count_within(operation, count, size)?;
            Ok(Resolution::range(IndexRange::new(0, n - 1)))
        }

        Selector::Last(count) => {
            let n = count_within(operation, count, size)?;
            Ok(Resolution::range(IndexRange::new(size - n, size - 1)))
        }

        Selector::Next(count) => {
            let remaining = size.saturating_sub(anchor.end + 1);
            let n = relative_span(operation, count, remaining)?;
            let start = anchor.end + 1;
            Ok(Resolution::range(IndexRange::new(start, start + n)))
        }

        Selector::Previous(count) => {
            let remaining = anchor.start;
            let n = relative_span(operation, count, remaining)?;
            let end = anchor.start - 1;
            let start = end.checked_sub(n).ok_or(SelectionError::NotEnoughElements {
                operation,
                requested: count,
                remaining,
            })?;
            Ok(Resolution::range(IndexRange::new(start, end)))
        }

        Selector::Nth(index) => {
            let i = index_within(operation, index, size)?;
            Ok(Resolution::range(IndexRange::new(i, i)))
        }

        Selector::Slice { start, end } => {
            let s = index_within(operation, start, size)?;
            let e = index_within(operation, end, size)?;
            if s == e {
                return Err(SelectionError::EqualSliceBounds { index: start });
            }
            if s > e {
                return Err(SelectionError::InvertedSlice { start, end });
            }
            Ok(Resolution::range(IndexRange::new(s, e)))
        }

        Selector::EveryNth(step) => {
            let n = count_within(operation, step, size)?;
            Ok(Resolution::matches((n - 1..size).step_by(n).collect()))
        }

        Selector::Predicate(ref predicate) => {
            Ok(Resolution::matches((0..size).filter(|&i| predicate(i)).collect()))
        }

        Selector::Random { count, seed } => {
            let n = count_within(operation, count, size)?;
            let mut rng = StdRng::seed_from_u64(seed);
            let mut indices = rand::seq::index::sample(&mut rng, size, n).into_vec();
            indices.sort_unstable();
            Ok(Resolution {
                indices,
                anchor: None,
            })
        }
    }
}

/// `1 <= count <= size`.
fn count_within(operation: &'static str, count: i64, size: usize) -> Result<usize, SelectionError> {
    if count < 1 {
        return Err(SelectionError::NonPositiveCount { operation, count });
    }
    usize::try_from(count)
        .ok()
        .filter(|&n| n <= size)
        .ok_or(SelectionError::CountExceedsSize {
            operation,
            count,
            size,
        })
}

/// `count >= 1`, and the `count + 1` positions a relative selector spans fit
/// in `remaining`.
fn relative_span(
    operation: &'static str,
    count: i64,
    remaining: usize,
) -> Result<usize, SelectionError> {
    if count < 1 {
        return Err(SelectionError::NonPositiveCount { operation, count });
    }
    usize::try_from(count)
        .ok()
        .filter(|&n| n < remaining)
        .ok_or(SelectionError::NotEnoughElements {
            operation,
            requested: count,
            remaining,
        })
}

/// `0 <= index < size`.
fn index_within(operation: &'static str, index: i64, size: usize) -> Result<usize, SelectionError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < size)
        .ok_or(SelectionError::IndexOutOfRange {
            operation,
            index,
            size,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 5;

    fn full() -> IndexRange {
        IndexRange::full(SIZE)
    }

    fn indices(selector: Selector, anchor: IndexRange) -> Vec<usize> {
        resolve(&selector, SIZE, anchor).unwrap().indices
    }

    #[test]
    fn test_all() {
        let resolution = resolve(&Selector::All, SIZE, IndexRange::new(3, 4)).unwrap();
        assert_eq!(resolution.indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(resolution.anchor, Some(full()));
    }

    #[test]
    fn test_first_marks_prefix_for_every_valid_count() {
        for n in 1..=SIZE {
            let resolution = resolve(&Selector::First(n as i64), SIZE, full()).unwrap();
            assert_eq!(resolution.indices, (0..n).collect::<Vec<_>>());
            assert_eq!(resolution.anchor, Some(IndexRange::new(0, n - 1)));
        }
    }

    #[test]
    fn test_last_marks_suffix_for_every_valid_count() {
        for n in 1..=SIZE {
            let resolution = resolve(&Selector::Last(n as i64), SIZE, full()).unwrap();
            assert_eq!(resolution.indices, (SIZE - n..SIZE).collect::<Vec<_>>());
            assert_eq!(resolution.anchor, Some(IndexRange::new(SIZE - n, SIZE - 1)));
        }
    }

    #[test]
    fn test_first_and_last_bounds() {
        assert_eq!(
            resolve(&Selector::First(0), SIZE, full()),
            Err(SelectionError::NonPositiveCount {
                operation: "the_first",
                count: 0
            })
        );
        assert_eq!(
            resolve(&Selector::First(100), SIZE, full()),
            Err(SelectionError::CountExceedsSize {
                operation: "the_first",
                count: 100,
                size: SIZE
            })
        );
        assert!(resolve(&Selector::Last(0), SIZE, full()).is_err());
        assert!(resolve(&Selector::Last(6), SIZE, full()).is_err());
    }

    #[test]
    fn test_next_follows_anchor() {
        let resolution = resolve(&Selector::Next(2), SIZE, IndexRange::new(0, 0)).unwrap();
        assert_eq!(resolution.indices, vec![1, 2, 3]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(1, 3)));

        assert_eq!(indices(Selector::Next(1), IndexRange::new(0, 2)), vec![3, 4]);
    }

    #[test]
    fn test_next_reports_remaining() {
        assert_eq!(
            resolve(&Selector::Next(2), SIZE, IndexRange::new(0, 2)),
            Err(SelectionError::NotEnoughElements {
                operation: "the_next",
                requested: 2,
                remaining: 2
            })
        );
        // initial anchor covers the whole collection
        assert_eq!(
            resolve(&Selector::Next(1), SIZE, full()),
            Err(SelectionError::NotEnoughElements {
                operation: "the_next",
                requested: 1,
                remaining: 0
            })
        );
        assert!(matches!(
            resolve(&Selector::Next(0), SIZE, IndexRange::new(0, 0)),
            Err(SelectionError::NonPositiveCount { .. })
        ));
    }

    #[test]
    fn test_previous_precedes_anchor() {
        let resolution = resolve(&Selector::Previous(2), SIZE, IndexRange::new(4, 4)).unwrap();
        assert_eq!(resolution.indices, vec![1, 2, 3]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(1, 3)));

        assert_eq!(indices(Selector::Previous(1), IndexRange::new(2, 3)), vec![0, 1]);
    }

    #[test]
    fn test_previous_reports_remaining() {
        assert_eq!(
            resolve(&Selector::Previous(2), SIZE, IndexRange::new(2, 4)),
            Err(SelectionError::NotEnoughElements {
                operation: "the_previous",
                requested: 2,
                remaining: 2
            })
        );
        assert!(matches!(
            resolve(&Selector::Previous(1), SIZE, IndexRange::new(1, 4)),
            Err(SelectionError::NotEnoughElements { remaining: 1, .. })
        ));
        assert!(matches!(
            resolve(&Selector::Previous(-1), SIZE, IndexRange::new(3, 4)),
            Err(SelectionError::NonPositiveCount { .. })
        ));
    }

    #[test]
    fn test_nth() {
        let resolution = resolve(&Selector::Nth(3), SIZE, full()).unwrap();
        assert_eq!(resolution.indices, vec![3]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(3, 3)));

        assert!(matches!(
            resolve(&Selector::Nth(-1), SIZE, full()),
            Err(SelectionError::IndexOutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            resolve(&Selector::Nth(5), SIZE, full()),
            Err(SelectionError::IndexOutOfRange { index: 5, size: 5, .. })
        ));
    }

    #[test]
    fn test_slice() {
        let resolution = resolve(&Selector::Slice { start: 1, end: 3 }, SIZE, full()).unwrap();
        assert_eq!(resolution.indices, vec![1, 2, 3]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(1, 3)));

        assert_eq!(indices(Selector::Slice { start: 3, end: 4 }, full()), vec![3, 4]);
    }

    #[test]
    fn test_slice_bounds() {
        let slice = |start, end| resolve(&Selector::Slice { start, end }, SIZE, full());

        assert_eq!(slice(0, 0), Err(SelectionError::EqualSliceBounds { index: 0 }));
        assert_eq!(slice(3, 1), Err(SelectionError::InvertedSlice { start: 3, end: 1 }));
        assert!(matches!(slice(-1, 3), Err(SelectionError::IndexOutOfRange { index: -1, .. })));
        assert!(matches!(slice(-5, 3), Err(SelectionError::IndexOutOfRange { .. })));
        assert!(matches!(slice(0, -5), Err(SelectionError::IndexOutOfRange { .. })));
        assert!(matches!(slice(0, 5), Err(SelectionError::IndexOutOfRange { index: 5, .. })));
        assert!(matches!(slice(0, 100), Err(SelectionError::IndexOutOfRange { .. })));
        assert!(matches!(slice(100, 3), Err(SelectionError::IndexOutOfRange { .. })));
        // start may go no further than size - 2
        assert!(slice(4, 4).is_err());
        assert!(slice(3, 4).is_ok());
    }

    #[test]
    fn test_every_nth() {
        let resolution = resolve(&Selector::EveryNth(2), SIZE, full()).unwrap();
        assert_eq!(resolution.indices, vec![1, 3]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(1, 3)));

        assert_eq!(indices(Selector::EveryNth(1), full()), vec![0, 1, 2, 3, 4]);
        assert_eq!(indices(Selector::EveryNth(5), full()), vec![4]);

        assert!(matches!(
            resolve(&Selector::EveryNth(0), SIZE, full()),
            Err(SelectionError::NonPositiveCount { operation: "every_nth", .. })
        ));
        assert!(matches!(
            resolve(&Selector::EveryNth(6), SIZE, full()),
            Err(SelectionError::CountExceedsSize { .. })
        ));
    }

    #[test]
    fn test_predicate() {
        let selector = Selector::Predicate(Rc::new(|i| i % 2 == 0 && i != 0));
        let resolution = resolve(&selector, SIZE, IndexRange::new(0, 0)).unwrap();

        assert_eq!(resolution.indices, vec![2, 4]);
        assert_eq!(resolution.anchor, Some(IndexRange::new(2, 4)));
    }

    #[test]
    fn test_predicate_without_matches_keeps_anchor() {
        let selector = Selector::Predicate(Rc::new(|_| false));
        let resolution = resolve(&selector, SIZE, IndexRange::new(1, 2)).unwrap();

        assert!(resolution.indices.is_empty());
        assert_eq!(resolution.anchor, None);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let selector = Selector::Random { count: 3, seed: 42 };

        let first = resolve(&selector, SIZE, full()).unwrap();
        let second = resolve(&selector, SIZE, full()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.indices.len(), 3);
        assert_eq!(first.anchor, None);
        assert!(first.indices.windows(2).all(|w| w[0] < w[1]));
        assert!(first.indices.iter().all(|&i| i < SIZE));
    }

    #[test]
    fn test_random_full_and_bounds() {
        let all = resolve(&Selector::Random { count: 5, seed: 7 }, SIZE, full()).unwrap();
        assert_eq!(all.indices, vec![0, 1, 2, 3, 4]);

        for count in 1..=SIZE as i64 {
            let picked = resolve(&Selector::Random { count, seed: 99 }, SIZE, full()).unwrap();
            assert_eq!(picked.indices.len(), count as usize);
        }

        assert!(matches!(
            resolve(&Selector::Random { count: 0, seed: 1 }, SIZE, full()),
            Err(SelectionError::NonPositiveCount { .. })
        ));
        assert!(matches!(
            resolve(&Selector::Random { count: 6, seed: 1 }, SIZE, full()),
            Err(SelectionError::CountExceedsSize { .. })
        ));
    }

    #[test]
    fn test_operation_names_and_debug() {
        assert_eq!(Selector::Slice { start: 1, end: 2 }.operation(), "the_slice");
        assert_eq!(
            format!("{:?}", Selector::Predicate(Rc::new(|_| true))),
            "Predicate(..)"
        );
        assert_eq!(format!("{:?}", Selector::First(2)), "First(2)");
    }
}
