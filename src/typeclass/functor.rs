//! Functor type class - mapping over container values.
//!
//! A functor applies a function to the value inside a container without
//! changing the container's shape: an absent value stays absent, a failure
//! stays the same failure.
//!
//! # Examples
//!
//! ```rust
//! use railway::typeclass::Functor;
//!
//! let transformed: Option<String> = Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let failed: Result<i32, &str> = Err("boom");
//! assert_eq!(failed.fmap(|n| n + 1), Err("boom"));
//! ```

use super::higher::TypeConstructor;

/// Types whose inner value can be transformed while preserving structure.
///
/// Implementations must satisfy the identity and composition laws listed in
/// the [module documentation](crate::typeclass).
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|x| x * 2), expected);
    }

    #[rstest]
    fn result_replace_keeps_error() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.replace("value"), Err("boom"));
        assert_eq!(Ok::<i32, &str>(1).void(), Ok(()));
    }
}
