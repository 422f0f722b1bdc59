//! Benchmark orchestration.
//!
//! Feeds a [`SegmentStore`] into an [`Engine`], brackets the compute
//! call with wall-clock and resident-memory samples, and renders the
//! result. Only the compute call sits inside the measurement window;
//! ingestion and all I/O stay outside it so that numbers are
//! comparable across backends.

use std::io;
use std::time::{Duration, Instant};

use crate::engine::Engine;
use crate::error::MeasurementError;
use crate::store::SegmentStore;

/// What the harness reports for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report the crossing count with timing and memory cost.
    Count,
    /// Stream every intersection point in encoded form; no
    /// timing/memory reporting.
    Enumerate,
}

/// Outcome of one harness run.
#[derive(Debug)]
pub enum Report {
    Count {
        crossings: usize,
        elapsed: Duration,
        /// Resident-set delta across the compute call. `Err` when the
        /// host failed to sample memory; the run itself still counts.
        memory_delta_kb: Result<i64, MeasurementError>,
    },
    Enumerate {
        crossings: usize,
    },
}

impl Report {
    /// The crossing count, whichever mode produced the report.
    pub fn crossings(&self) -> usize {
        match *self {
            Report::Count { crossings, .. } => crossings,
            Report::Enumerate { crossings } => crossings,
        }
    }

    /// Render in the harness output format.
    ///
    /// Count mode prints three lines: the count, elapsed whole
    /// milliseconds, and the memory delta in kilobytes (or the
    /// failure marker when sampling was unavailable). Enumerate mode
    /// prints nothing here; the points were already streamed during
    /// the run.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Report::Count {
                crossings,
                elapsed,
                memory_delta_kb,
            } => {
                writeln!(out, "{}", crossings)?;
                writeln!(out, "{}", elapsed.as_millis())?;
                match memory_delta_kb {
                    Ok(kb) => writeln!(out, "{}", kb),
                    Err(e) => writeln!(out, "{}", e),
                }
            }
            Report::Enumerate { .. } => Ok(()),
        }
    }
}

/// Resident set size of this process, in kilobytes.
fn memory_usage_kb() -> Result<i64, MeasurementError> {
    let process =
        psutil::process::Process::new(std::process::id()).map_err(|_| MeasurementError)?;
    let info = process.memory_info().map_err(|_| MeasurementError)?;
    Ok((info.rss() / 1024) as i64)
}

/// Run `engine` over `store` in the given `mode`.
///
/// The engine ingests every segment of the store first (untimed),
/// then computes once. In [`Mode::Enumerate`], the `p_x;p_y` header
/// and the encoded points are written to `out` as they stream.
pub fn run<W: io::Write>(
    store: &SegmentStore<f64>,
    engine: &mut dyn Engine,
    mode: Mode,
    out: &mut W,
) -> io::Result<Report> {
    for segment in store.iter() {
        engine.ingest(segment.start.x, segment.start.y, segment.end.x, segment.end.y);
    }
    log::debug!("running {:?} over {} segments", mode, store.len());

    match mode {
        Mode::Count => {
            let memory_before = memory_usage_kb();
            let start = Instant::now();
            let crossings = engine.compute(None)?;
            let elapsed = start.elapsed();
            let memory_after = memory_usage_kb();

            let memory_delta_kb = match (memory_before, memory_after) {
                (Ok(before), Ok(after)) => Ok(after - before),
                _ => Err(MeasurementError),
            };
            Ok(Report::Count {
                crossings,
                elapsed,
                memory_delta_kb,
            })
        }
        Mode::Enumerate => {
            writeln!(out, "p_x;p_y")?;
            let crossings = engine.compute(Some(out))?;
            Ok(Report::Enumerate { crossings })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::codec::{decode, encode};
    use crate::pairwise::PairwiseIntersections;

    fn record(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
        format!(
            "{};{};{};{}",
            encode(x1),
            encode(y1),
            encode(x2),
            encode(y2)
        )
    }

    /// The combined end-to-end input: a disjoint pair, a classic
    /// crossing, an endpoint touch and a collinear overlap folded
    /// into one six-segment store.
    fn scenario_csv() -> String {
        let records = [
            record(0., 0., 2., 0.),
            record(5., 5., 6., 6.),
            record(0., 0., 2., 2.),
            record(0., 2., 2., 0.),
            record(1., 0., 3., 0.),
            record(2., 2., 3., 1.),
        ];
        format!("x1;y1;x2;y2\n{}\n", records.join("\n"))
    }

    const SCENARIO_CROSSINGS: [(f64, f64); 5] =
        [(0., 0.), (1., 0.), (1., 1.), (2., 0.), (2., 2.)];

    #[test]
    fn count_mode_reports_triple() {
        let store = SegmentStore::from_reader(scenario_csv().as_bytes()).unwrap();
        let mut engine = PairwiseIntersections::new();
        let mut out = Vec::new();
        let report = run(&store, &mut engine, Mode::Count, &mut out).unwrap();

        assert!(out.is_empty(), "count mode writes nothing during the run");
        assert_eq!(report.crossings(), SCENARIO_CROSSINGS.len());

        report.render(&mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "5");
        lines[1].parse::<u64>().expect("elapsed ms is an integer");
        if lines[2] != "Failed to get memory usage" {
            lines[2].parse::<i64>().expect("memory delta is an integer");
        }
    }

    #[test]
    fn enumerate_mode_streams_the_crossing_set() {
        let store = SegmentStore::from_reader(scenario_csv().as_bytes()).unwrap();
        let mut engine = PairwiseIntersections::new();
        let mut out = Vec::new();
        let report = run(&store, &mut engine, Mode::Enumerate, &mut out).unwrap();
        assert_eq!(report.crossings(), SCENARIO_CROSSINGS.len());

        let streamed = String::from_utf8(out.clone()).unwrap();
        let mut lines = streamed.lines();
        assert_eq!(lines.next(), Some("p_x;p_y"));

        // No ordering is guaranteed; compare by decoded set equality.
        let got: BTreeSet<(u64, u64)> = lines
            .map(|line| {
                let mut fields = line.split(';');
                let x = decode(fields.next().unwrap()).unwrap();
                let y = decode(fields.next().unwrap()).unwrap();
                (x.to_bits(), y.to_bits())
            })
            .collect();
        let expected: BTreeSet<(u64, u64)> = SCENARIO_CROSSINGS
            .iter()
            .map(|&(x, y)| (x.to_bits(), y.to_bits()))
            .collect();
        assert_eq!(got, expected);

        // Rendering an enumerate report adds nothing.
        let mut rest = Vec::new();
        report.render(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn memory_failure_marker_renders_literally() {
        let report = Report::Count {
            crossings: 0,
            elapsed: Duration::from_millis(0),
            memory_delta_kb: Err(MeasurementError),
        };
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\n0\nFailed to get memory usage\n"
        );
    }
}
