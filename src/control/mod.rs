//! Algebraic containers for absence and failure.
//!
//! - [`Optional`]: a value or its absence
//! - [`Either`]: a failure (`Left`) or a success (`Right`)
//! - [`Error`]: the uniform failure shape produced at panic and rejection
//!   boundaries, with [`ErrorEither`] as the matching `Either` alias
//!
//! The submodules [`optional`] and [`either`] hold the pipeline forms of the
//! combinators: free functions that take the callbacks first and return a
//! reusable closure over the container.
//!
//! # Error Taxonomy
//!
//! - **Absence** is not an error and is modelled as [`Optional::Absent`].
//! - **Expected failure** is modelled as [`Either::Left`] carrying a
//!   caller-chosen payload.
//! - **Unexpected panics** are captured once, at
//!   [`Either::try_catch_error`], and converted into [`Error`].
//!
//! ```rust
//! use railway::pipe;
//! use railway::control::{Error, Optional, optional, either};
//!
//! let lookup = |id: u32| Optional::from_nullable(["ada", "grace"].get(id as usize).copied());
//!
//! let greeting = |id: u32| pipe!(
//!     lookup(id),
//!     optional::required(|| Error::new("unknown user")),
//!     either::map(|name: &str| format!("hello {name}")),
//!     either::fold(|error: Error| error.message().to_string(), |text| text)
//! );
//!
//! assert_eq!(greeting(1), "hello grace");
//! assert_eq!(greeting(9), "unknown user");
//! ```

pub mod either;
mod error;
pub mod optional;

pub use either::{Either, ErrorEither};
pub use error::Error;
pub use optional::Optional;
