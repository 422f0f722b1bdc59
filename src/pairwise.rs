//! The reference crossing-count engine.
//!
//! Evaluates every unordered pair of segments with exact predicates
//! and folds the results into a set of distinct intersection points.
//! This is the ground-truth oracle the faster backends are checked
//! against: O(n²) by construction and deliberately so — it must be
//! correct, not fast.

use std::collections::BTreeSet;
use std::io;

use geo::{GeoFloat, Line};
use itertools::Itertools;

use crate::codec;
use crate::engine::Engine;
use crate::line_or_point::LineOrPoint;
use crate::point::OrderedCoord;
use crate::store::SegmentStore;

/// The distinct intersection points of one run, keyed by exact
/// coordinate equality. Insertion is idempotent; a point witnessed by
/// many pairs is counted once.
pub type CrossingSet<T> = BTreeSet<OrderedCoord<T>>;

/// Brute-force pairwise intersection engine.
///
/// The canonical realization of the crossing-count semantics:
///
/// - a pair meeting in a single point contributes that point — this
///   includes segments that merely share an endpoint, and degenerate
///   (zero-length) segments incident on another segment;
/// - a collinear overlapping pair contributes *both* endpoints of the
///   overlap sub-segment;
/// - disjoint pairs (collinear or not) contribute nothing.
///
/// The reported count is the cardinality of the resulting
/// [`CrossingSet`]. The count is independent of insertion order.
#[derive(Debug, Clone, Default)]
pub struct PairwiseIntersections<T: GeoFloat = f64> {
    geoms: Vec<LineOrPoint<T>>,
}

impl<T: GeoFloat> PairwiseIntersections<T> {
    pub fn new() -> Self {
        PairwiseIntersections { geoms: Vec::new() }
    }

    /// Add a segment; a degenerate one participates as a point.
    pub fn push(&mut self, segment: Line<T>) {
        self.geoms.push(segment.into());
    }

    /// Build an engine over all segments of a store.
    pub fn from_store(store: &SegmentStore<T>) -> Self {
        let mut engine = Self::new();
        for segment in store.iter() {
            engine.push(*segment);
        }
        engine
    }

    /// Evaluate all unordered pairs and collect the crossing set.
    pub fn crossing_points(&self) -> CrossingSet<T> {
        let mut points = CrossingSet::new();
        for (a, b) in self.geoms.iter().tuple_combinations() {
            match a.intersect(b) {
                Some(LineOrPoint::Point(p)) => {
                    points.insert(p);
                }
                Some(LineOrPoint::Line(p, q)) => {
                    // Both ends of an overlap count as intersection
                    // points.
                    points.insert(p);
                    points.insert(q);
                }
                None => {}
            }
        }
        log::debug!(
            "{} segments produced {} distinct crossings",
            self.geoms.len(),
            points.len()
        );
        points
    }
}

impl Engine for PairwiseIntersections<f64> {
    fn ingest(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(Line::from([(x1, y1), (x2, y2)]));
    }

    fn compute(&mut self, print: Option<&mut dyn io::Write>) -> io::Result<usize> {
        let points = self.crossing_points();
        if let Some(out) = print {
            for point in &points {
                let c = point.coord();
                writeln!(out, "{};{}", codec::encode(c.x), codec::encode(c.y))?;
            }
        }
        Ok(points.len())
    }
}
