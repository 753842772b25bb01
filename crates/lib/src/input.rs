//! Input parser.

mod error;
mod lines;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::{ArrayString, ArrayVec};
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::lines::Lines;

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// Remaining data to parse.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over the remaining lines of input, parsing each
    /// one as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    /// use lib::env::Size;
    ///
    /// let mut input = IStr::new(b"10 20\n30\n", Size::ZERO);
    /// let lines = input.lines::<Vec<u32>>().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(lines, [vec![10, 20], vec![30]]);
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn lines<T>(&mut self) -> Lines<'_, T> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line is
    /// missing or is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there is no more data
    /// to process.
    ///
    /// A trailing newline does not produce an empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    /// use lib::env::Size;
    ///
    /// let mut input = IStr::new(b"abc\n\ndef\n", Size::ZERO);
    /// assert_eq!(input.try_line::<&str>()?, Some("abc"));
    /// assert_eq!(input.try_line::<&str>()?, Some(""));
    /// assert_eq!(input.try_line::<&str>()?, Some("def"));
    /// assert_eq!(input.try_line::<&str>()?, None);
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Shorthand for using [Ws] to scan whitespace, returning the number of
    /// newlines consumed.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next whitespace-delimited word, returning the offset
    /// the word was found at relative to the current input.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of input.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let start = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            self.index.advance(data.len());
            return Some(IStr::new(data, start));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::new(data, start))
    }

    /// Find the first index at or after `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when a value is required but missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input is exhausted.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::BadArray($num, 0)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

#[rustfmt::skip]
macro_rules! number {
    ($ty:ty, $error:ident) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(index.saturating_add(n)..p.index, ErrorKind::$error(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

number!(usize, NotInteger);
number!(isize, NotInteger);
number!(u8, NotInteger);
number!(u16, NotInteger);
number!(u32, NotInteger);
number!(u64, NotInteger);
number!(u128, NotInteger);
number!(i8, NotInteger);
number!(i16, NotInteger);
number!(i32, NotInteger);
number!(i64, NotInteger);
number!(i128, NotInteger);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        let start = p.index;
        p.index.advance(data.len());
        Ok(Some(IStr::new(data, start)))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        p.index.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&'static [u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl FromInput for &'static BStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(data) = <&'static [u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

impl<const N: usize> FromInput for ArrayString<N> {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(string) = <&str>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(string) = ArrayString::from(string) else {
            return Err(IStrError::new(index..p.index, ErrorKind::StringCapacity(N)));
        };

        Ok(Some(string))
    }
}

/// Parse until end of line.
pub struct Nl<T>(pub T);

impl<T> FromInput for Nl<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut input) = p.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(Self(input.next()?)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());

        let Some(data) = p.data.get(..n) else {
            return Ok(Some(Self(0)));
        };

        p.advance(n);
        Ok(Some(Self(memchr::memchr_iter(NL, data).count())))
    }
}

impl<T, const N: usize> FromInput for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let start = p.index;

        let Some(output) = ArrayVec::<T, N>::try_from_input(p)? else {
            return Ok(None);
        };

        match output.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                start..p.index,
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}

/// Collects word-delimited values until the input is exhausted.
impl<T, const N: usize> FromInput for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

/// Collects word-delimited values until the input is exhausted.
///
/// The element type must eventually return `Ok(None)`, so this should not be
/// used with types that consume the rest of the input such as `&str`.
impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Matches anything without consuming input.
#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}

/// Filter out empty values.
pub struct NonEmpty<T>(pub T);

impl<T> FromInput for NonEmpty<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.is_empty() {
            return Ok(None);
        }

        Ok(T::try_from_input(p)?.map(Self))
    }
}
