//! Shared harness for puzzle solvers.
//!
//! A solver is a function from an [IStr] to a pair of answers, wrapped in
//! [entry!] which takes care of loading input, checking the answers and
//! running benchmarks.
//!
//! [IStr]: crate::input::IStr

pub mod cli;
pub mod input;

#[cfg_attr(prod, path = "env/prod.rs")]
#[cfg_attr(not(prod), path = "env/no_prod.rs")]
#[doc(hidden)]
pub mod env;

mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
    pub use log;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::entry;
    pub use crate::input::{IStr, NonEmpty, Nl, Ws, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};
    pub use arrayvec::ArrayString;
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
    pub use std::collections::{HashMap, HashSet};
}
