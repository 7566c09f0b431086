//! The `flow!` macro for building left-to-right function chains.

/// Composes functions from left to right into a single function.
///
/// `flow!(f, g, h)(x)` is equivalent to `pipe!(x, f, g, h)`, that is
/// `h(g(f(x)))`.
///
/// Unlike [`pipe!`](crate::pipe!), `flow!` does not apply anything: it returns a
/// closure. When every stage implements [`Fn`] the produced closure is [`Fn`]
/// too, and each call re-runs the whole chain from its input. Nothing is
/// memoised between calls.
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `move |x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Chains any number of functions
///
/// # Examples
///
/// ```
/// use railway::flow;
/// use railway::control::{Optional, optional};
///
/// let add_three_or_zero = flow!(
///     Optional::from_nullable,
///     optional::map(|x: i32| x + 3),
///     optional::get_or_else(|| 0)
/// );
///
/// assert_eq!(add_three_or_zero(Some(5)), 8);
/// assert_eq!(add_three_or_zero(None), 0);
/// assert_eq!(add_three_or_zero(Some(-3)), 0);
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::flow!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
