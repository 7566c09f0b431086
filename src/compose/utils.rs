//! Small combinators used as building blocks inside pipelines.

/// Returns the value unchanged.
///
/// The unit of [`flow!`](crate::flow!): `flow!(identity, f)` and
/// `flow!(f, identity)` both behave like `f`. Mapping `identity` over a
/// container leaves it untouched, which is the functor identity law.
///
/// # Examples
///
/// ```
/// use railway::compose::identity;
/// use railway::control::Optional;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Optional::some(3).map(identity), Optional::some(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// Handy as the lazy default of `get_or_else` style terminals.
///
/// # Examples
///
/// ```
/// use railway::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and flipping twice gives back `f`.
///
/// # Examples
///
/// ```
/// use railway::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
