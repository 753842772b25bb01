use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate the location in the input which caused `error`, if known.
pub fn error_context<E>(path: &'static str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_span(&error);
    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(ErrorContext { path, pos })
}

/// A line and column range, all zero-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
    end: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0, 0);

    pub(crate) const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let start = self.start + 1;

        if self.end > start {
            write!(f, "{line}:{start}-{}", self.end)
        } else {
            write!(f, "{line}:{start}")
        }
    }
}

/// Errors might be wrapped in several layers of context, so walk the chain to
/// find the first input error.
fn find_span(error: &anyhow::Error) -> Range<Size> {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<IStrError>() {
            return e.span.clone();
        }
    }

    Size::ZERO..Size::ZERO
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
