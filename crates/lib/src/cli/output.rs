use core::fmt;
use std::io::{self, Write};

use serde::{Serialize, Serializer};

use crate::cli::Report;

/// Output of a solver binary, either for humans or as JSON lines consumed by
/// the runner.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(Line::<&str>::Report(report)),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, kind: MessageKind, output: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(Line::Message(Message { kind, output })),
            OutputKind::Normal => writeln!(self.out, "{kind}: {output}"),
        }
    }

    fn json<T>(&mut self, line: Line<'_, T>) -> io::Result<()>
    where
        T: fmt::Display,
    {
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)
    }
}

/// A single line of JSON output, `{"type": "...", "data": ...}`.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
#[serde(bound(serialize = "T: fmt::Display"))]
enum Line<'a, T>
where
    T: fmt::Display,
{
    Message(Message<T>),
    Report(&'a Report),
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = "T: fmt::Display"))]
struct Message<T>
where
    T: fmt::Display,
{
    kind: MessageKind,
    #[serde(serialize_with = "display")]
    output: T,
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
