//! `AsyncResult` - a re-invocable recipe for a deferred `Either`.
//!
//! An [`AsyncResult<E, A>`] wraps a zero-argument function that, each time it
//! is called, starts a fresh future resolving to an [`Either<E, A>`]. It is a
//! description of work, not work in flight:
//!
//! - nothing runs until [`AsyncResult::run`] is called;
//! - every call to `run` re-invokes the underlying thunk, nothing is cached;
//! - clones share the recipe, never a result.
//!
//! Combinators ([`map`](AsyncResult::map), [`chain`](AsyncResult::chain), ...)
//! wrap the recipe in a new recipe. Their continuations run only after the
//! wrapped future settles, and only on the `Right` branch.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Either, Error};
//! use railway::effect::AsyncResult;
//!
//! # futures::executor::block_on(async {
//! let roll = AsyncResult::try_catch_error(|| async { Ok::<_, Error>(4) })
//!     .map(|n| n * 10)
//!     .chain(|n| {
//!         if n > 25 { AsyncResult::right(n) } else { AsyncResult::left(Error::new("too low")) }
//!     });
//!
//! assert_eq!(roll.run().await, Either::Right(40));
//! assert_eq!(roll.run().await, Either::Right(40));
//! # });
//! ```

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use static_assertions::assert_impl_all;

use crate::control::{Either, Error};

type Thunk<E, A> = dyn Fn() -> BoxFuture<'static, Either<E, A>> + Send + Sync;

/// A deferred computation that always settles into an [`Either`].
///
/// # Type Parameters
///
/// * `E` - The failure type
/// * `A` - The success type
pub struct AsyncResult<E, A> {
    thunk: Arc<Thunk<E, A>>,
}

assert_impl_all!(AsyncResult<Error, i32>: Clone, Send, Sync);

impl<E, A> Clone for AsyncResult<E, A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<E, A> std::fmt::Debug for AsyncResult<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("AsyncResult").finish_non_exhaustive()
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<E, A> AsyncResult<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates an `AsyncResult` from a thunk producing a future of `Either`.
    ///
    /// The thunk is trusted: a panic inside it is not captured. Use
    /// [`AsyncResult::try_catch_error`] at boundaries where the wrapped code
    /// may fail unexpectedly.
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || thunk().boxed()),
        }
    }

    /// Lifts an already-known `Either` into an immediately-resolved
    /// computation. Each run yields a clone of `either`.
    pub fn from_either(either: Either<E, A>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::new(move || future::ready(either.clone()))
    }

    /// Lifts a success.
    pub fn right(value: A) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::from_either(Either::Right(value))
    }

    /// Lifts a failure.
    pub fn left(error: E) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::from_either(Either::Left(error))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Starts one evaluation of the recipe.
    ///
    /// The thunk is invoked immediately; the returned future resolves once the
    /// underlying work settles.
    pub fn run(&self) -> BoxFuture<'static, Either<E, A>> {
        (self.thunk)()
    }

    /// Runs the recipe and eliminates the result with `fold`.
    pub async fn fold<R, L, G>(&self, on_left: L, on_right: G) -> R
    where
        L: FnOnce(E) -> R,
        G: FnOnce(A) -> R,
    {
        self.run().await.fold(on_left, on_right)
    }

    /// Runs the recipe and returns the success, or a value computed from the
    /// failure.
    pub async fn get_or_else<F>(&self, on_left: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        self.run().await.get_or_else(on_left)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the success once the computation settles.
    ///
    /// `function` may run once per evaluation, so it must be [`Fn`].
    pub fn map<B, F>(self, function: F) -> AsyncResult<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let pending = self.run();
            let function = Arc::clone(&function);
            async move { pending.await.map(|value| function(value)) }
        })
    }

    /// Transforms the failure once the computation settles.
    pub fn map_left<E2, F>(self, function: F) -> AsyncResult<E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let pending = self.run();
            let function = Arc::clone(&function);
            async move { pending.await.map_left(|error| function(error)) }
        })
    }

    /// Continues with another deferred computation built from the success.
    ///
    /// A `Left` short-circuits: `function` is not called and the next
    /// computation is never started.
    pub fn chain<B, F>(self, function: F) -> AsyncResult<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> AsyncResult<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let pending = self.run();
            let function = Arc::clone(&function);
            async move {
                match pending.await {
                    Either::Left(error) => Either::Left(error),
                    Either::Right(value) => function(value).run().await,
                }
            }
        })
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Runs every computation concurrently and collects the successes in
    /// input order.
    ///
    /// All computations are started before any of them is awaited, and every
    /// one of them is awaited to completion even when an earlier one fails.
    /// The result is the first `Left` by input order, regardless of which
    /// computation settled first.
    ///
    /// ```rust
    /// use railway::control::{Either, Error};
    /// use railway::effect::AsyncResult;
    ///
    /// # futures::executor::block_on(async {
    /// let safe = AsyncResult::try_catch_error(|| async { Ok::<_, Error>("safe") });
    /// let all = AsyncResult::sequence(vec![safe.clone(), safe.clone(), safe]);
    ///
    /// assert_eq!(all.run().await, Either::Right(vec!["safe", "safe", "safe"]));
    /// # });
    /// ```
    pub fn sequence<I>(computations: I) -> AsyncResult<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let computations: Arc<[Self]> = computations.into_iter().collect();
        AsyncResult::new(move || {
            let started: Vec<_> = computations.iter().map(Self::run).collect();
            async move {
                let settled = future::join_all(started).await;
                tracing::trace!(count = settled.len(), "sequence settled");
                Either::sequence(settled)
            }
        })
    }

    /// Runs the computations one after another in input order, stopping at
    /// the first `Left`. Computations after a failure are never started.
    pub fn sequence_sequential<I>(computations: I) -> AsyncResult<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let computations: Arc<[Self]> = computations.into_iter().collect();
        AsyncResult::new(move || {
            let computations = Arc::clone(&computations);
            async move {
                let mut values = Vec::with_capacity(computations.len());
                for computation in computations.iter() {
                    match computation.run().await {
                        Either::Left(error) => return Either::Left(error),
                        Either::Right(value) => values.push(value),
                    }
                }
                Either::Right(values)
            }
        })
    }

    /// Builds one computation per item with `function` and
    /// [`sequence`](AsyncResult::sequence)s them.
    pub fn traverse<T, I, F>(items: I, function: F) -> AsyncResult<E, Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

// =============================================================================
// Rejection Boundary
// =============================================================================

impl<A> AsyncResult<Error, A>
where
    A: Send + 'static,
{
    /// Wraps a fallible asynchronous operation.
    ///
    /// Each run invokes `thunk` and awaits its future:
    ///
    /// - `Ok(value)` becomes `Right(value)`;
    /// - `Err(failure)` becomes `Left(failure.into())`;
    /// - a panic, either while calling `thunk` or while polling its future,
    ///   becomes `Left` via [`Error::from_panic`].
    ///
    /// The produced computation never panics and never yields anything but an
    /// `Either`.
    ///
    /// ```rust
    /// use railway::control::{Either, Error};
    /// use railway::effect::AsyncResult;
    ///
    /// # futures::executor::block_on(async {
    /// let rejected =
    ///     AsyncResult::try_catch_error(|| async { Err::<i32, _>("connection refused") });
    /// assert_eq!(rejected.run().await, Either::Left(Error::new("connection refused")));
    /// # });
    /// ```
    pub fn try_catch_error<F, Fut, X>(thunk: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, X>> + Send + 'static,
        X: Into<Error> + 'static,
    {
        Self::new(move || {
            let started = panic::catch_unwind(AssertUnwindSafe(&thunk));
            async move {
                let pending = match started {
                    Ok(pending) => pending,
                    Err(payload) => return Either::Left(Error::from_panic(payload)),
                };
                match AssertUnwindSafe(pending).catch_unwind().await {
                    Ok(Ok(value)) => Either::Right(value),
                    Ok(Err(failure)) => {
                        let error: Error = failure.into();
                        tracing::debug!(failure = %error, "async operation rejected");
                        Either::Left(error)
                    }
                    Err(payload) => Either::Left(Error::from_panic(payload)),
                }
            }
        })
    }
}

impl<E, A> From<Either<E, A>> for AsyncResult<E, A>
where
    E: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    fn from(either: Either<E, A>) -> Self {
        Self::from_either(either)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_nothing_runs_before_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let computation = AsyncResult::<Error, usize>::new(move || {
            let counter = Arc::clone(&counter);
            async move { Either::Right(counter.fetch_add(1, Ordering::SeqCst)) }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(block_on(computation.run()), Either::Right(0));
        assert_eq!(block_on(computation.run()), Either::Right(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_map_left_only_sees_failures() {
        let failed = AsyncResult::<&str, i32>::left("boom").map_left(str::len);
        assert_eq!(block_on(failed.run()), Either::Left(4));

        let succeeded = AsyncResult::<&str, i32>::right(1).map_left(str::len);
        assert_eq!(block_on(succeeded.run()), Either::Right(1));
    }

    #[rstest]
    fn test_fold_and_get_or_else() {
        let failed = AsyncResult::<&str, usize>::left("four");
        assert_eq!(block_on(failed.get_or_else(str::len)), 4);
        assert_eq!(block_on(failed.fold(|_| "left", |_| "right")), "left");
    }

    #[rstest]
    fn test_from_either_conversion() {
        let computation: AsyncResult<String, i32> = Either::Right(5).into();
        assert_eq!(block_on(computation.run()), Either::Right(5));
    }

    #[rstest]
    fn test_try_catch_error_captures_synchronous_panic_in_thunk() {
        let computation = AsyncResult::try_catch_error(|| -> future::Ready<Result<i32, Error>> {
            panic!("before the future existed")
        });
        assert_eq!(
            block_on(computation.run()),
            Either::Left(Error::new("before the future existed"))
        );
    }
}
