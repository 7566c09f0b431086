//! Either type - a success value or a failure value.
//!
//! [`Either<E, A>`] is `Left(E)` or `Right(A)`. By convention `Left` carries a
//! failure and `Right` carries a success; the two are never swapped
//! implicitly. Combinators such as [`Either::map`] and [`Either::chain`] only
//! touch the `Right` side, so once a `Left` enters a pipeline it travels to
//! the end untouched until [`Either::fold`], [`Either::map_left`] or
//! [`Either::or_else`] deals with it.
//!
//! The only place where a panic is observed is [`Either::try_catch_error`]
//! (and its fallible sibling [`Either::try_catch`]); everything else is a
//! total function over the two variants.
//!
//! # Examples
//!
//! ```rust
//! use railway::pipe;
//! use railway::control::{Either, Error, either};
//!
//! let check_age = either::from_predicate(|age: &u32| *age >= 21, || Error::new("too young"));
//!
//! assert_eq!(check_age(23), Either::Right(23));
//! assert_eq!(
//!     pipe!(check_age(8), either::map_left(|error: Error| error.message().to_string())),
//!     Either::Left("too young".to_string())
//! );
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::control::{Error, Optional};
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `E` - The failure type
/// * `A` - The success type
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    /// The failure variant.
    Left(E),
    /// The success variant.
    Right(A),
}

/// An [`Either`] whose failure side is the crate's uniform [`Error`].
pub type ErrorEither<A> = Either<Error, A>;

impl<E, A> Either<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the failure, if any.
    #[inline]
    pub fn left_value(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the success, if any.
    #[inline]
    pub fn right_value(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }

    /// Keeps the success as `Present`, dropping any failure.
    #[inline]
    pub fn into_optional(self) -> Optional<A> {
        Optional::from_nullable(self.right_value())
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Returns `Right(value)` if `predicate` holds, otherwise
    /// `Left(on_false())`.
    ///
    /// `on_false` is evaluated only when the predicate fails.
    ///
    /// ```rust
    /// use railway::control::{Either, Error};
    ///
    /// let too_young = || Error::new("too young");
    ///
    /// let refused = Either::from_predicate(8, |age| *age >= 21, too_young);
    /// assert_eq!(refused.left_value().map(|error| error.message().to_string()),
    ///            Some("too young".to_string()));
    ///
    /// assert_eq!(Either::from_predicate(23, |age| *age >= 21, too_young), Either::Right(23));
    /// ```
    #[inline]
    pub fn from_predicate<P, F>(value: A, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce() -> E,
    {
        if predicate(&value) {
            Self::Right(value)
        } else {
            Self::Left(on_false())
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success; a `Left` passes through with the same error.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the failure; a `Right` passes through unchanged.
    #[inline]
    pub fn map_left<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is active.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, left_function: F, right_function: G) -> Either<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Binds `function` over the success and flattens the result.
    ///
    /// A `Left` short-circuits: `function` is not called and the original
    /// error is returned.
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// fn halve(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(Either::Right(12).chain(halve).chain(halve), Either::Right(3));
    /// assert_eq!(
    ///     Either::Right(6).chain(halve).chain(halve).chain(halve),
    ///     Either::Left("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Recovers from a failure by running `function` on it.
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> Either<E2, A>,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Turns a success into a failure when `predicate` does not hold.
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce() -> E,
    {
        self.chain(|value| Self::from_predicate(value, predicate, on_false))
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Eliminates the `Either` by applying the function for the active side.
    #[inline]
    pub fn fold<R, L, G>(self, on_left: L, on_right: G) -> R
    where
        L: FnOnce(E) -> R,
        G: FnOnce(A) -> R,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the success, or a value computed from the failure.
    #[inline]
    pub fn get_or_else<F>(self, on_left: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        self.fold(on_left, |value| value)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Collects every success in input order, or returns the first failure
    /// by input order.
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let all: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Right(2)];
    /// assert_eq!(Either::sequence(all), Either::Right(vec![1, 2]));
    ///
    /// let mixed = vec![Either::Right(1), Either::Left("second"), Either::Left("third")];
    /// assert_eq!(Either::sequence(mixed), Either::Left("second"));
    /// ```
    pub fn sequence<I>(eithers: I) -> Either<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        eithers
            .into_iter()
            .map(Self::into_result)
            .collect::<Result<Vec<A>, E>>()
            .into()
    }

    /// Applies `function` to every item and sequences the results.
    ///
    /// Items after the first failure are not visited.
    pub fn traverse<T, I, F>(items: I, mut function: F) -> Either<E, Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        items
            .into_iter()
            .map(|item| function(item).into_result())
            .collect::<Result<Vec<A>, E>>()
            .into()
    }
}

// =============================================================================
// Panic Boundary
// =============================================================================

impl<A> Either<Error, A> {
    /// Runs `thunk`, capturing a panic as `Left(Error)`.
    ///
    /// This is the synchronous boundary between code that may panic and the
    /// railway: a normal return becomes `Right`, a panic becomes `Left` with
    /// the payload coerced by [`Error::from_panic`]. The panic never reaches
    /// the caller.
    ///
    /// ```rust
    /// use railway::control::{Either, Error};
    ///
    /// assert_eq!(Either::try_catch_error(|| 6 * 7), Either::Right(42));
    ///
    /// let failed = Either::<Error, i32>::try_catch_error(|| panic!("kaboom"));
    /// assert_eq!(failed, Either::Left(Error::new("kaboom")));
    /// ```
    pub fn try_catch_error<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(Error::from_panic(payload)),
        }
    }

    /// Runs a fallible `thunk`: both an `Err` and a panic become
    /// `Left(Error)`.
    ///
    /// ```rust
    /// use railway::control::{Either, Error};
    ///
    /// let parsed = Either::try_catch(|| "17".parse::<u8>().map_err(Error::wrap));
    /// assert_eq!(parsed, Either::Right(17));
    ///
    /// let rejected = Either::try_catch(|| Err::<u8, _>("no digits"));
    /// assert_eq!(rejected, Either::Left(Error::new("no digits")));
    /// ```
    pub fn try_catch<F, X>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<A, X>,
        X: Into<Error>,
    {
        Either::try_catch_error(thunk).chain(|result| match result {
            Ok(value) => Self::Right(value),
            Err(failure) => {
                let error: Error = failure.into();
                tracing::debug!(failure = %error, "captured error as failure");
                Self::Left(error)
            }
        })
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<E, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Monad for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.chain(function)
    }
}

// =============================================================================
// Pipeline Combinators
// =============================================================================

/// Lifts a failure. Pipeline-friendly spelling of `Either::Left`.
#[inline]
pub const fn left<E, A>(error: E) -> Either<E, A> {
    Either::Left(error)
}

/// Lifts a success. Pipeline-friendly spelling of `Either::Right`.
#[inline]
pub const fn right<E, A>(value: A) -> Either<E, A> {
    Either::Right(value)
}

/// Pipeline form of [`Either::map`].
pub fn map<E, A, B, F>(function: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> B,
{
    move |either| either.map(&function)
}

/// Pipeline form of [`Either::map_left`].
pub fn map_left<E, E2, A, F>(function: F) -> impl Fn(Either<E, A>) -> Either<E2, A>
where
    F: Fn(E) -> E2,
{
    move |either| either.map_left(&function)
}

/// Pipeline form of [`Either::chain`].
pub fn chain<E, A, B, F>(function: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> Either<E, B>,
{
    move |either| either.chain(&function)
}

/// Pipeline form of [`Either::from_predicate`]: lifts a plain value.
pub fn from_predicate<E, A, P, F>(predicate: P, on_false: F) -> impl Fn(A) -> Either<E, A>
where
    P: Fn(&A) -> bool,
    F: Fn() -> E,
{
    move |value| Either::from_predicate(value, &predicate, &on_false)
}

/// Pipeline form of [`Either::fold`].
pub fn fold<E, A, R, L, G>(on_left: L, on_right: G) -> impl Fn(Either<E, A>) -> R
where
    L: Fn(E) -> R,
    G: Fn(A) -> R,
{
    move |either| either.fold(&on_left, &on_right)
}

/// Pipeline form of [`Either::get_or_else`].
pub fn get_or_else<E, A, F>(on_left: F) -> impl Fn(Either<E, A>) -> A
where
    F: Fn(E) -> A,
{
    move |either| either.get_or_else(&on_left)
}

/// Free-function form of [`Either::try_catch_error`].
pub fn try_catch_error<A, F>(thunk: F) -> ErrorEither<A>
where
    F: FnOnce() -> A,
{
    Either::try_catch_error(thunk)
}
