//! The curry macro family for converting multi-argument functions to curried form.
//!
//! The wrapped function is shared between partial applications through
//! `std::rc::Rc`, and every earlier argument is cloned when the final
//! argument arrives. A partial application can therefore be called any
//! number of times, and two partial applications built from the same curried
//! function never observe each other's arguments.

/// Converts a 2-argument function into a curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use railway::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// assert_eq!(double(7), 14);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Every argument type except the last must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use railway::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let to_percentage = curry3!(clamp)(0)(100);
/// assert_eq!(to_percentage(150), 100);
/// assert_eq!(to_percentage(-4), 0);
/// assert_eq!(to_percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// `curry4!(f)(a)(b)(c)(d) == f(a, b, c, d)`.
///
/// # Examples
///
/// ```
/// use railway::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum_four)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
