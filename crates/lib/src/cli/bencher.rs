use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Output, OutputEq, OutputKind, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Repeatedly runs a solver and reports timing percentiles.
#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, checking every produced value against `expected`.
    ///
    /// Errors raised by the solver are reported as messages rather than
    /// failing the process, so that the runner can keep going.
    pub fn iter<T, O, C, E>(&mut self, opts: &Opts, expected: Option<C>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let stdout = std::io::stdout();

        let kind = if opts.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        let mut o = Output::new(stdout.lock(), kind);

        if let Err(e) = self.inner_iter(&mut o, opts, expected.as_ref(), iter) {
            o.error(e)?;
        }

        Ok(())
    }

    fn inner_iter<T, O, C, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<&C>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut run = || -> Result<Duration> {
            let before = Instant::now();
            let value = iter()?;
            let elapsed = before.elapsed();
            check(&value, expected)?;
            black_box(value);
            Ok(elapsed)
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                run()?;
            }
        }

        self.samples.clear();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                self.samples.push(run()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                self.samples.push(run()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        self.samples.sort();

        let report = Report::from_sorted(&self.samples);
        o.report(&report)?;
        Ok(())
    }
}

fn check<O, C>(value: &O, expected: Option<&C>) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if let Some(expected) = expected {
        if !value.output_eq(expected) {
            bail!("{value:?} (value) != {expected:?} (expected)");
        }
    }

    Ok(())
}
