//! # railway
//!
//! Railway-oriented containers for Rust: an optional value, a disjoint
//! success/failure union and a deferred asynchronous result, together with
//! left-to-right composition helpers to thread them through pipelines.
//!
//! ## Overview
//!
//! - **Composition**: `pipe!`, `flow!`, `curry2!`..`curry4!`, `identity`, `constant`, `flip`
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Monad`
//! - **Containers**: [`Optional`](control::Optional), [`Either`](control::Either)
//!   and the uniform failure payload [`Error`](control::Error)
//! - **Deferred results**: [`AsyncResult`](effect::AsyncResult), a re-invocable
//!   recipe that always settles into an `Either`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad)
//! - `compose`: Function composition macros and helpers
//! - `control`: `Optional`, `Either` and `Error`
//! - `async`: `AsyncResult` (built on `futures`)
//! - `serde`: Serialization for `Optional` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::pipe;
//! use railway::control::{Optional, optional};
//!
//! let missing = pipe!(
//!     Optional::from_nullable(None::<i32>),
//!     optional::map(|x: i32| x + 3),
//!     optional::get_or_else(|| 0)
//! );
//! assert_eq!(missing, 0);
//!
//! let present = pipe!(
//!     Optional::from_nullable(Some(5)),
//!     optional::map(|x: i32| x + 3),
//!     optional::get_or_else(|| 0)
//! );
//! assert_eq!(present, 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use railway::prelude::*;
///
/// let checked: Either<Error, u32> = Either::from_predicate(23, |age| *age >= 21, || {
///     Error::new("too young")
/// });
/// assert_eq!(checked, Either::Right(23));
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "async")]
pub mod effect;
