//! Deferred computations that settle into an [`Either`](crate::control::Either).
//!
//! [`AsyncResult`] is built on the `futures` crate and does not depend on any
//! particular executor. There is no internal scheduler and no cancellation:
//! once a run has started it proceeds until its future settles. A caller that
//! needs a timeout can race the thunk's future against a timer of its own
//! runtime inside [`AsyncResult::try_catch_error`].

mod async_result;

pub use async_result::AsyncResult;
