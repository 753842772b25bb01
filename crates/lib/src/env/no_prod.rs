use core::ops::Range;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::IStr;

/// Byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Translate a byte span into a line and column range.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    use crate::input::NL;

    let span = Size::usize_range(span);

    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let (line, start) = match memchr::memrchr(NL, d) {
        Some(last) => (
            memchr::memchr_iter(NL, d).count(),
            d.len().saturating_sub(last + 1),
        ),
        None => (0, d.len()),
    };

    let end = match data.get(span) {
        Some(rest) => start.saturating_add(memchr::memchr(NL, rest).unwrap_or(rest.len())),
        None => start,
    };

    LineCol::new(line, start, end)
}

/// Read the input file at `read_path` into storage which lives for the rest
/// of the process.
#[inline]
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    return inner(read_path).with_context(|| anyhow!(path));

    #[inline]
    fn inner(read_path: &str) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(8192);
        file.read_to_end(&mut buf)?;
        let data: &'static [u8] = Box::leak(buf.into_boxed_slice());
        Ok(IStr::new(data, Size::ZERO))
    }
}

/// Prepare an input processor.
///
/// Evaluates to the input and the path it was loaded from. The data is leaked
/// since it's needed until the process exits *anyway*.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}
