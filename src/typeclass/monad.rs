//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` runs the next step only when the previous one produced a
//! value. For `Either` this is the short-circuit discipline: once a `Left`
//! appears, later steps are skipped and the `Left` is returned untouched.
//!
//! # Examples
//!
//! ```rust
//! use railway::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! assert_eq!(Some("-1").flat_map(parse_positive), None);
//! ```

use super::functor::Functor;

/// Functors that can lift plain values and chain dependent computations.
pub trait Monad: Functor {
    /// Lifts a plain value into the success shape of this container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Binds `function` over the inner value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
