//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;
use core::time::Duration;
use std::ffi::OsString;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
#[doc(hidden)]
pub use self::error::error_context;
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Options of a solver binary.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Log debug messages.
    verbose: bool,
    /// Output JSON lines instead of text.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, arg)?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, arg)?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, arg)?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }
}

/// Parse the argument following the option `name`.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;

    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;

    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

#[derive(Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Construct a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().copied().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the `n`th percentile out of sorted samples.
fn percentile(samples: &[Duration], n: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples.get(last * n / 100).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}
