//! Benchmark harness and reference oracle for line-segment crossing
//! counts.
//!
//! Several independent geometry backends (arrangement sweeps, noding
//! indices, crossing-number statistics) are benchmarked against a
//! shared, bit-reproducible input format. This crate owns the parts
//! every backend shares:
//!
//! 1. [Bit-exact codec](#bit-exact-codec)
//! 1. [Reference crossing semantics](#reference-crossing-semantics)
//! 1. [Harness](#harness)
//!
//! # Bit-exact Codec
//!
//! Coordinates travel as 64-character binary strings reinterpreting
//! the raw bits of an IEEE-754 double ([`codec`]). Decimal text is
//! never parsed, so the same input reproduces bit-for-bit across
//! platforms and language runtimes.
//!
//! # Reference Crossing Semantics
//!
//! [`PairwiseIntersections`] evaluates every unordered pair of
//! segments with exact orientation predicates and folds the results
//! into a set of distinct points: a single-point meeting (proper
//! crossing, shared endpoint, or a degenerate segment incident on
//! another) contributes its point, and a collinear overlap
//! contributes both endpoints of the overlap. The crossing count is
//! the cardinality of that set.
//!
//! ## Usage
//!
//! ```rust
//! use geo::Line;
//! use segint_bench::PairwiseIntersections;
//!
//! let mut engine = PairwiseIntersections::new();
//! // Three concurrent lines: three intersecting pairs, one point.
//! engine.push(Line::from([(1., 0.), (0., 1.)]));
//! engine.push(Line::from([(0., 0.5), (1., 0.5)]));
//! engine.push(Line::from([(0., 0.), (1., 1.)]));
//! assert_eq!(engine.crossing_points().len(), 1);
//! ```
//!
//! # Harness
//!
//! [`bench::run`] feeds a [`SegmentStore`] to any [`Engine`] backend
//! and reports the count together with the wall-clock time and
//! resident-memory delta of the compute call alone. The reference
//! engine here is the oracle; external backends plug in behind the
//! same trait and must agree with it.

pub mod codec;

mod point;
pub use point::OrderedCoord;

mod line_or_point;
pub use line_or_point::LineOrPoint;

mod store;
pub use store::SegmentStore;

mod engine;
pub use engine::Engine;

mod pairwise;
pub use pairwise::{CrossingSet, PairwiseIntersections};

pub mod bench;
pub use bench::{Mode, Report};

mod error;
pub use error::{BenchError, FormatError, MeasurementError};
