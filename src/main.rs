use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use segint_bench::{bench, Mode, PairwiseIntersections, SegmentStore};

struct Config {
    file: PathBuf,
    print_intersections: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Config> {
    let mut file = None;
    let mut print_intersections = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-f" => {
                file = Some(PathBuf::from(
                    args.next().context("missing value for -f")?,
                ));
            }
            "-a" => print_intersections = true,
            other => bail!("unknown argument {:?}; usage: -f <file_path> [-a]", other),
        }
    }

    let file = file.context("No file provided. Use -f <file_path> to specify a CSV file.")?;
    if file.extension().and_then(OsStr::to_str) != Some("csv") {
        bail!("The specified file is not a .csv file.");
    }

    Ok(Config {
        file,
        print_intersections,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let config = parse_args(env::args().skip(1))?;
    let store = SegmentStore::from_csv_path(&config.file)?;

    let mut engine = PairwiseIntersections::new();
    let mode = if config.print_intersections {
        Mode::Enumerate
    } else {
        Mode::Count
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = bench::run(&store, &mut engine, mode, &mut out)?;
    report.render(&mut out)?;
    out.flush()?;
    Ok(())
}
