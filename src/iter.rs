//! Iterator support for the containers.
//!
//! A [`Maybe<T>`] iterates over zero or one item. Collecting an iterator of
//! containers produces a container of a collection, stopping at the first
//! `Nothing` or `Left`:
//!
//! ```rust
//! use tagged::{Either, Maybe};
//!
//! let all: Maybe<Vec<i32>> = vec![Maybe::Just(1), Maybe::Just(2)].into_iter().collect();
//! assert_eq!(all, Maybe::Just(vec![1, 2]));
//!
//! let parsed: Either<String, Vec<u8>> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| Either::from(s.parse::<u8>().map_err(|_| format!("bad: {s}"))))
//!     .collect();
//! assert_eq!(parsed, Either::Left("bad: x".to_string()));
//! ```

use crate::{maybe::Maybe, result::Either};

/// An iterator over the value in a [`Maybe`], if any.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Maybe<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_just());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        self.iter()
    }
}

impl<T> Maybe<T> {
    /// Iterates over a borrowed value, if any.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let total: i32 = [Maybe::Just(2), Maybe::Nothing, Maybe::Just(5)]
    ///     .iter()
    ///     .flat_map(Maybe::iter)
    ///     .sum();
    /// assert_eq!(total, 7);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter().map(Option::<T>::from).collect::<Option<V>>().into()
    }
}

impl<L, R, V> FromIterator<Either<L, R>> for Either<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        iter.into_iter().map(Either::into_result).collect::<Result<V, L>>().into()
    }
}
