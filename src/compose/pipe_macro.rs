//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. The value is moved
/// from stage to stage; nothing is mutated in place.
///
/// Each stage only needs to implement [`FnOnce`], since each function
/// is called exactly once. `pipe!` adds no error handling of its own: a
/// stage that returns an [`Either::Left`](crate::control::Either::Left)
/// simply hands it to the next stage.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use railway::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
///
/// ## Container pipeline
///
/// ```
/// use railway::pipe;
/// use railway::control::{Either, Error, either};
///
/// let verdict = pipe!(
///     8_u32,
///     either::from_predicate(|age: &u32| *age >= 21, || Error::new("too young")),
///     either::map(|age: u32| format!("welcome, age {age}")),
///     either::fold(|error: Error| error.message().to_string(), |greeting| greeting)
/// );
/// assert_eq!(verdict, "too young");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
