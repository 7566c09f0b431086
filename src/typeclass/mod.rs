//! Type classes shared by the containers of this crate.
//!
//! Rust has no higher-kinded types, so [`TypeConstructor`] emulates them with
//! a generic associated type. [`Functor`] and [`Monad`] are written against it
//! and implemented for [`Option`], [`Result`] and, with the `control` feature,
//! for [`Optional`](crate::control::Optional) and
//! [`Either`](crate::control::Either).
//!
//! # Laws
//!
//! - **Functor identity**: `fa.fmap(|x| x) == fa`
//! - **Functor composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Monad left identity**: `M::pure(a).flat_map(f) == f(a)`
//! - **Monad right identity**: `m.flat_map(M::pure) == m`
//! - **Monad associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
