//! Builds every solver and runs them, collecting their reports.
//!
//! Arguments after `--` are passed on to each solver, so
//! `cargo run -p lib -- -- --bench` benchmarks everything.

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::Deserialize;

/// Package containing the solvers to run.
const PACKAGE: &str = "y2023";

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    /// Test if options are verbose.
    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let executables = build()?;

    let mut total = Report::default();

    for e in executables {
        run(&opts, &e, &mut total).with_context(|| e.name.clone())?;
    }

    println!("total: {total}");
    Ok(())
}

/// Build the solvers in release mode and collect their executables sorted by
/// name.
fn build() -> Result<Vec<Executable>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release"]);
    cmd.args(["-p", PACKAGE]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let mut executables = Vec::new();

    for value in json_lines(stdout) {
        let value = value?;

        if value.get("reason").and_then(|d| d.as_str()) != Some("compiler-artifact") {
            continue;
        }

        let artifact: Artifact = serde_json::from_value(value)?;

        let [kind] = &artifact.target.kind[..] else {
            continue;
        };

        if kind != "bin" {
            continue;
        }

        executables.push(Executable {
            name: artifact.target.name,
            path: artifact.executable.context("missing executable")?,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("building {PACKAGE} failed: {status}");
    }

    executables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(executables)
}

/// Run a single solver, adding any report it produces to `total`.
fn run(opts: &Opts, e: &Executable, total: &mut Report) -> Result<()> {
    let mut cmd = Command::new(&e.path);
    cmd.stdout(Stdio::piped());
    cmd.args(&opts.args[..]);
    cmd.arg("--json");

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    for value in json_lines(stdout) {
        let value = value?;

        match value.get("type").and_then(|d| d.as_str()) {
            Some("report") => {
                let report = serde_json::from_value::<Data<Report>>(value)?.data;

                if !opts.quiet {
                    println!("{name}: {report}", name = e.name);
                }

                *total += &report;
            }
            Some("message") => {
                let message = serde_json::from_value::<Data<Message>>(value)?.data;

                if opts.is_verbose() || message.is_important() {
                    println!(
                        "{name}: {kind}: {output}",
                        name = e.name,
                        kind = message.kind,
                        output = message.output
                    );
                }
            }
            _ => {}
        }
    }

    let status = child.wait()?;

    if opts.is_verbose() || !status.success() {
        println!("{name}: {status}", name = e.name);
    }

    Ok(())
}

fn json_lines(reader: impl Read) -> impl Iterator<Item = serde_json::Result<serde_json::Value>> {
    serde_json::Deserializer::from_reader(reader).into_iter()
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_important(&self) -> bool {
        self.kind == "error"
    }
}
