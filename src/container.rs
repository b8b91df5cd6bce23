//! The contract shared by [`Maybe`] and [`Either`].
//!
//! [`Container`] lets the point-free combinators in [`compose`](crate::compose)
//! work over both containers. Implementations must satisfy:
//!
//! - `c.map(|x| x) == c`
//! - `c.map(f).map(g) == c.map(|x| g(f(x)))`
//! - `C::wrap(x).and_then(f) == f(x)`
//! - `c.and_then(C::wrap) == c`
//! - `c.and_then(f).and_then(g) == c.and_then(|x| f(x).and_then(g))`
//!
//! # Examples
//!
//! ```rust
//! use tagged::{Container, Either, Maybe};
//!
//! fn double_all<C: Container<Item = i32>>(c: C) -> C::With<i32> {
//!     c.map(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::Just(2)), Maybe::Just(4));
//! assert_eq!(double_all(Either::<&str, i32>::Left("e")), Either::Left("e"));
//! ```

use crate::{maybe::Maybe, result::Either};

/// A single-slot container that can be mapped over and bound through.
pub trait Container: Sized {
    /// Type of the value the container may hold
    type Item;

    /// The same container shape holding a `U` instead of `Self::Item`.
    type With<U>: Container<Item = U>;

    /// Puts a value into the container's "present" or "success" slot.
    fn wrap(item: Self::Item) -> Self;

    /// Applies `f` to the held value, if any, keeping the container shape.
    fn map<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Item) -> U;

    /// Feeds the held value, if any, to `f` and returns its container without nesting.
    fn and_then<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Item) -> Self::With<U>;
}

impl<T> Container for Maybe<T> {
    type Item = T;
    type With<U> = Maybe<U>;

    #[inline]
    fn wrap(item: T) -> Self {
        Maybe::wrap(item)
    }

    #[inline]
    fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe::map(self, f)
    }

    #[inline]
    fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        Maybe::and_then(self, f)
    }
}

impl<L, R> Container for Either<L, R> {
    type Item = R;
    type With<U> = Either<L, U>;

    #[inline]
    fn wrap(item: R) -> Self {
        Either::wrap(item)
    }

    #[inline]
    fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        Either::map(self, f)
    }

    #[inline]
    fn and_then<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        Either::and_then(self, f)
    }
}
