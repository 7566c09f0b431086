//! Function composition utilities.
//!
//! Every container in this crate is consumed through left-to-right
//! pipelines. This module provides the glue for those pipelines:
//!
//! - [`pipe!`]: Thread a value through functions left to right
//! - [`flow!`]: Build a reusable left-to-right function chain
//! - [`curry2!`] through [`curry4!`]: Convert multi-argument functions to curried form
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use railway::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! ## Flow
//!
//! ```
//! use railway::flow;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // flow!(f, g)(x) = g(f(x))
//! let double_then_increment = flow!(double, add_one);
//! assert_eq!(double_then_increment(5), 11);
//! assert_eq!(double_then_increment(1), 3);
//! ```
//!
//! ## Currying
//!
//! ```
//! use railway::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry2!(add)(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Laws
//!
//! - **Left Identity**: `flow!(identity, f) == f`
//! - **Right Identity**: `flow!(f, identity) == f`
//! - **Associativity**: `flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
//! - **Pipe Consistency**: `pipe!(x, f, g) == flow!(f, g)(x)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod curry_macro;
mod flow_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::flow;
pub use crate::pipe;
