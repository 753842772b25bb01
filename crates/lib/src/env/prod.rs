use core::ops::Range;

use crate::cli::error::LineCol;

/// Offsets are not tracked in production builds.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size;

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self;

    #[inline]
    pub(crate) fn new(_: usize) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn checked_add(self, _: Size) -> Option<Self> {
        Some(Self)
    }

    #[inline]
    pub(crate) fn saturating_add(self, _: Size) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn advance(&mut self, _: usize) {}
}

pub(crate) fn pos_from(_: &[u8], _: Range<Size>) -> LineCol {
    LineCol::EMPTY
}

/// Prepare an input processor with the input embedded into the binary.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        (
            $crate::input::IStr::new(
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path)),
                $crate::env::Size::ZERO,
            ),
            concat!("inputs/", $path),
        )
    }};
}
