//! # Tagged: optional and disjoint-result containers
//!
//! Two small sum types with the combinators needed to program with them
//! without ever reaching for a panicking unwrap.
//!
//! ## Core Types
//!
//! - **[`Maybe<T>`]**: `Just(T)` or `Nothing`, a value that may be absent
//! - **[`Either<L, R>`]**: `Right(R)` on success or `Left(L)` with a failure reason
//! - **[`Container`]**: the `wrap`/`map`/`and_then` contract both types share
//!
//! ## Key Features
//!
//! - **Lawful**: `map` and `and_then` obey the functor and monad laws
//! - **Point-free**: [`compose`] builds reusable pipelines from curried combinators
//! - **Interoperable**: lossless `From` conversions to `Option`, `Result` and [`either::Either`]
//! - **Total**: [`list`] accessors return `Nothing` instead of panicking on short slices
//!
//! ## Example
//!
//! ```
//! use tagged::prelude::*;
//!
//! let scores = [72, 95, 88];
//!
//! // Take the best score after the first attempt, insisting it is a pass.
//! let best_retry = tail(&scores)
//!     .and_then(|rest| Maybe::from(rest.iter().max()))
//!     .ok_or_else(|| "no retries")
//!     .filter_or_else(|s| **s >= 50, || "failed");
//!
//! assert_eq!(best_retry, Either::Right(&95));
//! ```
//!
//! ## Common Functions
//!
//! **Building values:**
//! - [`Maybe::wrap`], [`Either::wrap`] - put a value in the present/success slot
//! - [`Either::from_maybe`] - attach a failure reason to an absent value
//!
//! **Getting values out:**
//! - [`Maybe::get_or_else`] - the value or a lazily computed fallback
//! - [`Maybe::ok_or_absent`] - a `Result` usable with `?`

pub mod compose;
pub mod convert;
pub mod list;
pub mod prelude;

mod container;
mod error;
mod iter;
mod maybe;
mod result;

pub use container::*;
pub use error::*;
pub use iter::*;
pub use maybe::*;
pub use result::*;
