/// Helper macro to implement [FromInput] through a conversion from another
/// parseable value.
///
/// On error the input is rewound and the error is reported with the span of
/// the consumed value.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Pair(u32, u32);
///
/// lib::from_input! {
///     |(a, b): (W<u32>, W<u32>)| -> Pair {
///         Ok(Pair(a.0, b.0))
///     }
/// }
///
/// struct Span(u32, u32);
///
/// lib::from_input! {
///     |[a, b]: [u32; 2]| -> Span {
///         ensure!(a <= b, "{a} must not be greater than {b}");
///         Ok(Span(a, b))
///     }
/// }
///
/// let mut input = IStr::new(b"3 7\n9 2\n", lib::env::Size::ZERO);
/// let Pair(a, b) = input.line::<Pair>()?;
/// assert_eq!((a, b), (3, 7));
/// assert!(input.line::<Span>().is_err());
/// # Ok::<_, Error>(())
/// ```
///
/// [FromInput]: crate::input::FromInput
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ty $block:block) => {
        $crate::from_input!(@impl [$value] $ty, $out, $block);
    };

    (|($($pat:tt)*): $ty:ty| -> $out:ty $block:block) => {
        $crate::from_input!(@impl [($($pat)*)] $ty, $out, $block);
    };

    (|[$($pat:tt)*]: $ty:ty| -> $out:ty $block:block) => {
        $crate::from_input!(@impl [[$($pat)*]] $ty, $out, $block);
    };

    (@impl [$($pat:tt)*] $ty:ty, $out:ty, $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> ::core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($pat)*: $ty| -> ::core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(error) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(
                            span,
                            $crate::input::ErrorKind::Custom(error),
                        ))
                    }
                }
            }
        }
    };
}

/// Declare the entrypoint of a solver.
///
/// The solver function receives the loaded input and returns both answers.
/// The generated `main` parses [Opts], loads the input from the `inputs`
/// directory of the calling crate, and either runs the solver once checking
/// the answers against `expect`, or benchmarks it when `--bench` is passed.
///
/// ```no_run
/// use lib::prelude::*;
///
/// lib::entry! {
///     input = "d01.txt", expect = (142, 281);
///
///     fn main(mut input: IStr) -> Result<(u32, u32)> {
///         let mut o1 = 0;
///
///         while let Some(line) = input.try_line::<&[u8]>()? {
///             o1 += line.len() as u32;
///         }
///
///         Ok((o1, 0))
///     }
/// }
/// ```
///
/// [Opts]: crate::cli::Opts
#[macro_export]
macro_rules! entry {
    (
        input = $input:literal, expect = $expect:expr;
        $(#[$meta:meta])*
        fn $name:ident($($args:tt)*) -> $ret:ty $body:block
    ) => {
        fn main() -> $crate::prelude::Result<()> {
            $(#[$meta])*
            fn $name($($args)*) -> $ret $body

            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!($input);

            match opts.mode {
                $crate::cli::Mode::Default => {
                    let value = match $name(input) {
                        Ok(value) => value,
                        Err(error) => return Err($crate::cli::error_context(path, input, error)),
                    };

                    let expected = $expect;

                    assert!(
                        $crate::cli::OutputEq::output_eq(&value, &expected),
                        "{:?} (value) != {:?} (expected)",
                        value,
                        expected
                    );

                    $crate::macro_support::log::info!("{value:?}");
                }
                $crate::cli::Mode::Bench => {
                    let mut b = $crate::cli::Bencher::new();
                    b.iter(&opts, Some($expect), || $name(input))?;
                }
            }

            Ok(())
        }
    };
}
