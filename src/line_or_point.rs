use geo::{
    kernels::{HasKernel, Kernel, Orientation},
    line_intersection::LineIntersection,
    Coordinate, GeoFloat, Line,
};

use crate::point::OrderedCoord;

/// Either a line segment or a point.
///
/// The coordinates are ordered (see [`OrderedCoord`]) and a line
/// segment must have distinct points (the `Point` variant is used if
/// the coordinates are equal). A degenerate input segment is thus a
/// legal value; it takes part in intersection tests as the point it
/// denotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineOrPoint<T: GeoFloat> {
    Point(OrderedCoord<T>),
    Line(OrderedCoord<T>, OrderedCoord<T>),
}

/// Convert from a [`Line`] ensuring end point ordering.
impl<T: GeoFloat> From<Line<T>> for LineOrPoint<T> {
    fn from(l: Line<T>) -> Self {
        let start = l.start.into();
        let end = l.end.into();
        if start < end {
            LineOrPoint::Line(start, end)
        } else if start > end {
            LineOrPoint::Line(end, start)
        } else {
            LineOrPoint::Point(start)
        }
    }
}

/// Convert from a [`Coordinate`]
impl<T: GeoFloat> From<Coordinate<T>> for LineOrPoint<T> {
    fn from(c: Coordinate<T>) -> Self {
        LineOrPoint::Point(c.into())
    }
}

impl<T: GeoFloat> LineOrPoint<T> {
    /// Checks if the variant is a line.
    #[inline]
    pub fn is_line(&self) -> bool {
        match self {
            LineOrPoint::Line(_, _) => true,
            _ => false,
        }
    }

    /// Return a [`Line`] representation (degenerate for the point variant).
    #[inline]
    pub fn line(&self) -> Line<T> {
        match self {
            LineOrPoint::Line(p, q) => Line::new(p.coord(), q.coord()),
            LineOrPoint::Point(p) => Line::new(p.coord(), p.coord()),
        }
    }

    /// Compute the exact intersection of two geometries.
    ///
    /// Classification uses exact orientation predicates (via the
    /// kernel of `T`), never epsilon comparisons; the coordinates of
    /// a returned crossing point are the floating evaluation of the
    /// true intersection. Returns `None` when disjoint, a `Point` for
    /// a single common point (a proper crossing, a shared endpoint,
    /// or a point incident on a segment), and a `Line` for a
    /// collinear overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        match (self.is_line(), other.is_line()) {
            (_, true) => self.intersect_line(other),
            (true, false) => other.intersect_line(self),
            (false, false) => {
                if self == other {
                    Some(*self)
                } else {
                    None
                }
            }
        }
    }

    /// Intersect a line with self and return a point, an overlapping
    /// segment or `None`.
    ///
    /// The `other` argument must be a line variant (panics otherwise).
    fn intersect_line(&self, other: &Self) -> Option<Self> {
        debug_assert!(other.is_line(), "tried to intersect with a point variant!");

        let line = other.line();
        match *self {
            LineOrPoint::Point(p) => {
                if <T as HasKernel>::Ker::orient2d(line.start, p.coord(), line.end)
                    == Orientation::Collinear
                {
                    let ls = line.start.into();
                    let le = line.end.into();
                    if p >= ls && p <= le {
                        Some(*self)
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            LineOrPoint::Line(p, q) => {
                use geo::algorithm::line_intersection::line_intersection;
                line_intersection(Line::new(p.coord(), q.coord()), line).map(|l| match l {
                    LineIntersection::SinglePoint { intersection, .. } => intersection.into(),
                    LineIntersection::Collinear { intersection } => intersection.into(),
                })
            }
        }
    }
}
