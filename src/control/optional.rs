//! Optional type - a value or its absence.
//!
//! [`Optional<A>`] is either `Present(A)` or `Absent`. Absence is not an
//! error: it is an ordinary, expected outcome that the caller resolves with
//! [`Optional::fold`] or [`Optional::get_or_else`], or turns into a typed
//! failure with [`Optional::required`].
//!
//! Every operation exists twice:
//!
//! - as a consuming method, e.g. `value.map(f)`;
//! - as a free function returning a reusable closure, e.g. `optional::map(f)`,
//!   for use as a stage of [`pipe!`](crate::pipe!) or [`flow!`](crate::flow!).
//!
//! # Examples
//!
//! ```rust
//! use railway::pipe;
//! use railway::control::{Optional, optional};
//!
//! let from_nothing = pipe!(
//!     Optional::from_nullable(None::<i32>),
//!     optional::map(|x: i32| x + 3),
//!     optional::get_or_else(|| 0)
//! );
//! assert_eq!(from_nothing, 0);
//!
//! let from_five = pipe!(
//!     Optional::from_nullable(Some(5)),
//!     optional::map(|x: i32| x + 3),
//!     optional::get_or_else(|| 0)
//! );
//! assert_eq!(from_five, 8);
//! ```

use crate::control::Either;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// Values are immutable: every combinator consumes `self` and returns a new
/// `Optional`.
///
/// # Type Parameters
///
/// * `A` - The type of the value when present
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

impl<A> Optional<A> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps `value` as `Present`.
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Lifts a possibly-missing value: `Some(x)` becomes `Present(x)`,
    /// `None` becomes `Absent`.
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(5)), Optional::Present(5));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::Absent);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Returns `Present(value)` if `predicate` holds for it, otherwise `Absent`.
    ///
    /// The predicate is called exactly once.
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// assert_eq!(Optional::from_predicate(4, |n| n % 2 == 0), Optional::Present(4));
    /// assert_eq!(Optional::from_predicate(3, |n| n % 2 == 0), Optional::Absent);
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: A, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Self::Present(value)
        } else {
            Self::Absent
        }
    }

    // =========================================================================
    // Variant Checks
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the inner value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&A> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to a present value; `Absent` passes through and
    /// `function` is not called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Binds `function` over a present value and flattens the result.
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let half = |n: i32| Optional::from_predicate(n, |n| n % 2 == 0).map(|n| n / 2);
    /// assert_eq!(Optional::some(8).chain(half).chain(half), Optional::Present(2));
    /// assert_eq!(Optional::some(6).chain(half).chain(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.chain(|value| Self::from_predicate(value, predicate))
    }

    /// Returns `self` if present, otherwise evaluates `fallback`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => fallback(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    pub fn alt(self, alternative: Self) -> Self {
        self.or_else(|| alternative)
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Eliminates the `Optional`: exactly one of the two branches runs.
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// let describe = |value: Optional<u32>| {
    ///     value.fold(|| "nobody".to_string(), |age| format!("{age} years"))
    /// };
    /// assert_eq!(describe(Optional::some(23)), "23 years");
    /// assert_eq!(describe(Optional::none()), "nobody");
    /// ```
    #[inline]
    pub fn fold<R, N, P>(self, on_absent: N, on_present: P) -> R
    where
        N: FnOnce() -> R,
        P: FnOnce(A) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the present value, or the lazily computed default.
    ///
    /// `on_absent` is not evaluated when a value is present.
    #[inline]
    pub fn get_or_else<F>(self, on_absent: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.fold(on_absent, |value| value)
    }

    /// Converts absence into a typed failure.
    ///
    /// `on_absent` runs only for `Absent`.
    ///
    /// ```rust
    /// use railway::control::{Either, Error, Optional};
    ///
    /// let missing: Optional<&str> = Optional::none();
    /// assert_eq!(
    ///     missing.required(|| Error::new("name is required")),
    ///     Either::Left(Error::new("name is required"))
    /// );
    /// assert_eq!(Optional::some("Ada").required(|| "unused"), Either::Right("Ada"));
    /// ```
    #[inline]
    pub fn required<E, F>(self, on_absent: F) -> Either<E, A>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(on_absent()),
        }
    }

    /// Collects every present value, or returns `Absent` if any element is
    /// absent. Iteration stops at the first `Absent`.
    pub fn sequence<I>(optionals: I) -> Optional<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        Optional::from_nullable(
            optionals
                .into_iter()
                .map(Self::into_option)
                .collect::<Option<Vec<A>>>(),
        )
    }
}

impl<A> Default for Optional<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Optional<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Optional<A>> for Option<A> {
    #[inline]
    fn from(optional: Optional<A>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.chain(function)
    }
}

// =============================================================================
// Pipeline Combinators
// =============================================================================

/// Pipeline form of [`Optional::map`].
pub fn map<A, B, F>(function: F) -> impl Fn(Optional<A>) -> Optional<B>
where
    F: Fn(A) -> B,
{
    move |optional| optional.map(&function)
}

/// Pipeline form of [`Optional::chain`].
pub fn chain<A, B, F>(function: F) -> impl Fn(Optional<A>) -> Optional<B>
where
    F: Fn(A) -> Optional<B>,
{
    move |optional| optional.chain(&function)
}

/// Pipeline form of [`Optional::filter`].
pub fn filter<A, P>(predicate: P) -> impl Fn(Optional<A>) -> Optional<A>
where
    P: Fn(&A) -> bool,
{
    move |optional| optional.filter(&predicate)
}

/// Pipeline form of [`Optional::from_predicate`]: lifts a plain value.
///
/// ```rust
/// use railway::control::{Optional, optional};
///
/// let adult = optional::from_predicate(|age: &u32| *age >= 18);
/// assert_eq!(adult(30), Optional::Present(30));
/// assert_eq!(adult(12), Optional::Absent);
/// ```
pub fn from_predicate<A, P>(predicate: P) -> impl Fn(A) -> Optional<A>
where
    P: Fn(&A) -> bool,
{
    move |value| Optional::from_predicate(value, &predicate)
}

/// Pipeline form of [`Optional::fold`].
pub fn fold<A, R, N, P>(on_absent: N, on_present: P) -> impl Fn(Optional<A>) -> R
where
    N: Fn() -> R,
    P: Fn(A) -> R,
{
    move |optional| optional.fold(&on_absent, &on_present)
}

/// Pipeline form of [`Optional::get_or_else`].
pub fn get_or_else<A, F>(on_absent: F) -> impl Fn(Optional<A>) -> A
where
    F: Fn() -> A,
{
    move |optional| optional.get_or_else(&on_absent)
}

/// Pipeline form of [`Optional::required`].
pub fn required<A, E, F>(on_absent: F) -> impl Fn(Optional<A>) -> Either<E, A>
where
    F: Fn() -> E,
{
    move |optional| optional.required(&on_absent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(None, 0)]
    #[case(Some(5), 8)]
    fn test_add_three_or_zero(#[case] input: Option<i32>, #[case] expected: i32) {
        let result = pipe!(
            Optional::from_nullable(input),
            map(|x: i32| x + 3),
            get_or_else(|| 0)
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_present_never_wraps_absence() {
        let nested: Optional<Option<i32>> = Optional::some(None);
        assert!(nested.is_present());
        assert_eq!(Optional::from_nullable(None::<i32>), Optional::Absent);
    }

    #[rstest]
    fn test_chain_short_circuits_on_absent() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::none().chain(|x| {
            calls.set(calls.get() + 1);
            Optional::some(x)
        });
        assert_eq!(result, Optional::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_from_predicate_calls_predicate_once() {
        let calls = Cell::new(0);
        let even = from_predicate(|n: &i32| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });
        assert_eq!(even(2), Optional::Present(2));
        assert_eq!(even(3), Optional::Absent);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_get_or_else_is_lazy() {
        let evaluated = Cell::new(false);
        let value = Optional::some(1).get_or_else(|| {
            evaluated.set(true);
            0
        });
        assert_eq!(value, 1);
        assert!(!evaluated.get());
    }

    #[rstest]
    fn test_fold_runs_exactly_one_branch() {
        let absent_calls = Cell::new(0);
        let present_calls = Cell::new(0);
        let folder = fold(
            || absent_calls.set(absent_calls.get() + 1),
            |_: i32| present_calls.set(present_calls.get() + 1),
        );
        folder(Optional::some(1));
        folder(Optional::some(2));
        folder(Optional::none());
        assert_eq!(present_calls.get(), 2);
        assert_eq!(absent_calls.get(), 1);
    }

    #[rstest]
    fn test_required_only_builds_error_when_absent() {
        let built = Cell::new(0);
        let need = required(|| {
            built.set(built.get() + 1);
            "missing"
        });
        assert_eq!(need(Optional::some(4)), Either::Right(4));
        assert_eq!(need(Optional::none()), Either::Left("missing"));
        assert_eq!(built.get(), 1);
    }

    #[rstest]
    fn test_or_else_and_alt() {
        assert_eq!(Optional::none().alt(Optional::some(2)), Optional::Present(2));
        assert_eq!(Optional::some(1).alt(Optional::some(2)), Optional::Present(1));
        assert_eq!(Optional::<i32>::none().or_else(Optional::none), Optional::Absent);
    }

    #[rstest]
    fn test_sequence() {
        let all = vec![Optional::some(1), Optional::some(2)];
        assert_eq!(Optional::sequence(all), Optional::Present(vec![1, 2]));

        let gap = vec![Optional::some(1), Optional::none(), Optional::some(3)];
        assert_eq!(Optional::sequence(gap), Optional::Absent);

        assert_eq!(Optional::<i32>::sequence(Vec::new()), Optional::Present(vec![]));
    }

    #[rstest]
    fn test_option_conversions() {
        let optional: Optional<i32> = Some(3).into();
        let back: Option<i32> = optional.into();
        assert_eq!(back, Some(3));
        assert_eq!(Optional::<i32>::default(), Optional::Absent);
    }

    #[rstest]
    fn test_filter_pipeline_is_reusable() {
        let positive = filter(|n: &i32| *n > 0);
        assert_eq!(positive(Optional::some(1)), Optional::Present(1));
        assert_eq!(positive(Optional::some(-1)), Optional::Absent);
        assert_eq!(positive(Optional::none()), Optional::Absent);
    }
}
