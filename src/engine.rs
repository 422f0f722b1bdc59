use std::io;

/// Interface any crossing-count backend exposes to the harness.
///
/// The harness never inspects a backend's geometric representation;
/// it feeds segments in through [`ingest`](Engine::ingest) and asks
/// for the canonical count through [`compute`](Engine::compute).
/// Backends are selected at runtime and must agree with the reference
/// [`PairwiseIntersections`](crate::PairwiseIntersections) engine on
/// well-defined inputs; a disagreement is a bug in the backend.
pub trait Engine {
    /// Add one segment by its endpoint coordinates.
    fn ingest(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Count the distinct intersection points of the ingested segments.
    ///
    /// When `print` is given, additionally emits every point to the
    /// sink as `encode(x);encode(y)`, one per line, in the bit-exact
    /// coordinate encoding. No ordering of the emitted points is
    /// guaranteed; consumers must compare as sets.
    fn compute(&mut self, print: Option<&mut dyn io::Write>) -> io::Result<usize>;
}
