//! Higher-kinded type emulation through generic associated types.
//!
//! ```rust
//! use railway::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = relabel(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A type of the shape `F<Inner>` that can be re-applied to another type.
///
/// `Optional<i32>::WithType<String>` is `Optional<String>`; for two-parameter
/// containers the failure side stays fixed, so `Either<E, i32>::WithType<B>`
/// is `Either<E, B>`.
pub trait TypeConstructor {
    /// The type currently held by the container.
    type Inner;

    /// The same container applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
