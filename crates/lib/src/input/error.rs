use core::fmt;
use core::ops::Range;
use std::num::ParseIntError;

use crate::env::Size;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    BadArray(usize, usize),
    ExpectedLine,
    UnexpectedEof,
    StringCapacity(usize),
    ArrayCapacity(usize),
    ParseIntError(ParseIntError),
    /// Error raised by a custom conversion, see [from_input!].
    ///
    /// [from_input!]: crate::from_input
    Custom(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::BadArray(expected, actual) => {
                write!(f, "bad array; expected {expected}, but got {actual}")
            }
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::StringCapacity(cap) => write!(f, "string out of capacity ({cap})"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
            ErrorKind::ParseIntError(e) => e.fmt(f),
            ErrorKind::Custom(e) => e.fmt(f),
        }
    }
}

impl From<ParseIntError> for ErrorKind {
    #[inline]
    fn from(error: ParseIntError) -> Self {
        Self::ParseIntError(error)
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for IStrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::ParseIntError(e) => Some(e),
            ErrorKind::Custom(e) => Some(&**e),
            _ => None,
        }
    }
}
