use std::cmp::Ordering;

use geo::{Coordinate, GeoFloat};

/// Wraps a [`Coordinate`] to support lexicographic ordering.
///
/// The ordering is by `x` and then by `y`. Implements `PartialOrd`,
/// `Ord` and `Eq` even though `Coordinate` doesn't implement these.
/// This is necessary to key the crossing set on exact coordinate
/// equality via ordered collections (`BTreeSet`), and to range-check
/// a point against the ordered endpoints of a segment.
///
/// Note that the trait impls exist even when `T` is not `Eq` or
/// `Ord`. We must ensure that an `OrderedCoord` only contains values
/// that can be consistently ordered, hence the finiteness check in
/// the `From` impl.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OrderedCoord<T: GeoFloat>(Coordinate<T>);

impl<T: GeoFloat> OrderedCoord<T> {
    /// The wrapped coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.0
    }
}

/// Implement lexicographic ordering by `x` and then by `y`
/// coordinate.
impl<T: GeoFloat> PartialOrd for OrderedCoord<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.x.partial_cmp(&other.0.x) {
            Some(Ordering::Equal) => self.0.y.partial_cmp(&other.0.y),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl<T: GeoFloat> Ord for OrderedCoord<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

/// We derive `Eq` manually to not require `T: Eq`.
impl<T: GeoFloat> Eq for OrderedCoord<T> {}

/// Create from `Coordinate` while checking the components are finite.
impl<T: GeoFloat> From<Coordinate<T>> for OrderedCoord<T> {
    fn from(pt: Coordinate<T>) -> Self {
        assert!(
            pt.x.is_finite(),
            "ordered coord requires a finite x-coordinate"
        );
        assert!(
            pt.y.is_finite(),
            "ordered coord requires a finite y-coordinate"
        );
        OrderedCoord(pt)
    }
}
