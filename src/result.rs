use crate::maybe::Maybe;

/// Success-with-value or failure-with-reason.
///
/// `Left` carries the failure, `Right` carries the success value. Combinators are
/// biased to the right: [`map`](Either::map) and [`and_then`](Either::and_then)
/// only touch `Right` and pass a `Left` through untouched.
///
/// # Examples
///
/// ```rust
/// use tagged::Either;
///
/// fn parse(s: &str) -> Either<String, i32> {
///     s.parse::<i32>().map_err(|_| format!("not a number: {s}")).into()
/// }
///
/// let checked = parse("42").filter_or_else(|n| *n < 100, || "too big".to_string());
/// assert_eq!(checked, Either::Right(42));
///
/// let failed = parse("4x").map(|n| n * 2);
/// assert_eq!(failed, Either::Left("not a number: 4x".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum Either<L, R> {
    /// Failure, with its reason
    Left(L),
    /// Success, with its value
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps a success value in `Right`.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let x: Either<String, i32> = Either::wrap(1);
    /// assert_eq!(x, Either::Right(1));
    /// ```
    #[inline]
    pub const fn wrap(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a `Left` (failure).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let x: Either<&str, i32> = Either::Left("boom");
    /// assert!(x.is_left());
    /// assert!(!x.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` (success).
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts from `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let mut x: Either<&str, i32> = Either::Right(1);
    /// if let Either::Right(v) = x.as_mut() {
    ///     *v += 1;
    /// }
    /// assert_eq!(x, Either::Right(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let ok: Either<&str, i32> = Either::Right(3);
    /// let err: Either<&str, i32> = Either::Left("bad");
    ///
    /// assert_eq!(ok.map(|v| v * 2), Either::Right(6));
    /// assert_eq!(err.map(|v| v * 2), Either::Left("bad"));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Maps the failure reason, leaving a success untouched.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Feeds the success value to `f` and returns its result as is.
    ///
    /// A `Left` short-circuits: `f` is not called.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let checked_div = |d: i32| move |n: i32| {
    ///     if d == 0 { Either::Left("divide by zero") } else { Either::Right(n / d) }
    /// };
    ///
    /// let x: Either<&str, i32> = Either::Right(100);
    /// assert_eq!(x.and_then(checked_div(5)).and_then(checked_div(2)), Either::Right(10));
    /// assert_eq!(x.and_then(checked_div(0)).and_then(checked_div(2)), Either::Left("divide by zero"));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Keeps a `Right` when `predicate` holds, otherwise turns it into `Left(on_false())`.
    ///
    /// A `Left` is returned unchanged and neither closure is called.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let age: Either<&str, u32> = Either::Right(15);
    /// assert_eq!(age.filter_or_else(|a| *a >= 18, || "minor"), Either::Left("minor"));
    /// ```
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce() -> L,
    {
        self.and_then(|r| {
            if predicate(&r) {
                Either::Right(r)
            } else {
                Either::Left(on_false())
            }
        })
    }

    /// Collapses both variants into one value.
    #[inline]
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Returns the success value, or recovers one from the failure reason.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let x: Either<&str, usize> = Either::Left("four");
    /// assert_eq!(x.get_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    /// Converts from `Either<L, R>` to `Either<R, L>` by swapping variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// The failure reason, if any.
    #[inline]
    pub fn left_value(self) -> Maybe<L> {
        match self {
            Either::Left(l) => Maybe::Just(l),
            Either::Right(_) => Maybe::Nothing,
        }
    }

    /// The success value, if any. The failure reason is discarded.
    ///
    /// ```rust
    /// use tagged::{Either, Maybe};
    ///
    /// let x: Either<&str, i32> = Either::Right(2);
    /// let y: Either<&str, i32> = Either::Left("gone");
    /// assert_eq!(x.to_maybe(), Maybe::Just(2));
    /// assert_eq!(y.to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::Nothing,
            Either::Right(r) => Maybe::Just(r),
        }
    }

    /// Builds an `Either` from a `Maybe`, materialising the failure with `on_absent`.
    ///
    /// `on_absent` is only called for `Nothing`.
    ///
    /// ```rust
    /// use tagged::{Either, Maybe};
    ///
    /// let found: Either<&str, i32> = Either::from_maybe(Maybe::Just(1), || "missing");
    /// let lost: Either<&str, i32> = Either::from_maybe(Maybe::Nothing, || "missing");
    /// assert_eq!(found, Either::Right(1));
    /// assert_eq!(lost, Either::Left("missing"));
    /// ```
    #[inline]
    pub fn from_maybe<F>(maybe: Maybe<R>, on_absent: F) -> Self
    where
        F: FnOnce() -> L,
    {
        maybe.ok_or_else(on_absent)
    }

    /// Converts into a standard `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns `true` if this is a `Right` holding a value equal to `x`.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<R>,
    {
        matches!(self, Either::Right(v) if x == v)
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting from the success side.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_is_left_and_is_right() {
        let l: Either<&str, i32> = Either::Left("e");
        let r: Either<&str, i32> = Either::wrap(1);

        assert!(l.is_left());
        assert!(!l.is_right());
        assert!(r.is_right());
        assert!(!r.is_left());
    }

    #[test]
    fn test_map_only_touches_right() {
        let l: Either<i32, i32> = Either::Left(1);
        let r: Either<i32, i32> = Either::Right(1);

        assert_eq!(l.map(|x| x + 10), Either::Left(1));
        assert_eq!(r.map(|x| x + 10), Either::Right(11));
        assert_eq!(l.map_left(|x| x + 10), Either::Left(11));
        assert_eq!(r.map_left(|x| x + 10), Either::Right(1));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let calls = Cell::new(0);
        let step = |x: i32| -> Either<&str, i32> {
            calls.set(calls.get() + 1);
            Either::Right(x + 1)
        };

        assert_eq!(Either::<&str, i32>::Left("stop").and_then(step), Either::Left("stop"));
        assert_eq!(calls.get(), 0);
        assert_eq!(Either::<&str, i32>::Right(1).and_then(step), Either::Right(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_or_else() {
        let even = |x: &i32| x % 2 == 0;

        assert_eq!(Either::<&str, i32>::Right(2).filter_or_else(even, || "odd"), Either::Right(2));
        assert_eq!(Either::<&str, i32>::Right(3).filter_or_else(even, || "odd"), Either::Left("odd"));
        assert_eq!(Either::<&str, i32>::Left("prior").filter_or_else(even, || "odd"), Either::Left("prior"));
    }

    #[test]
    fn test_filter_or_else_skips_closures_on_left() {
        let calls = Cell::new(0);
        let result = Either::<&str, i32>::Left("prior").filter_or_else(
            |_| {
                calls.set(calls.get() + 1);
                true
            },
            || {
                calls.set(calls.get() + 1);
                "odd"
            },
        );
        assert_eq!(result, Either::Left("prior"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_fold_get_or_else_and_swap() {
        let l: Either<&str, usize> = Either::Left("abc");
        let r: Either<&str, usize> = Either::Right(7);

        assert_eq!(l.fold(|e| e.len(), |v| v), 3);
        assert_eq!(r.fold(|e| e.len(), |v| v), 7);
        assert_eq!(l.get_or_else(|e| e.len() * 2), 6);
        assert_eq!(r.get_or_else(|e| e.len() * 2), 7);
        assert_eq!(l.swap(), Either::Right("abc"));
        assert_eq!(r.swap(), Either::Left(7));
    }

    #[test]
    fn test_maybe_conversions() {
        let l: Either<&str, i32> = Either::Left("e");
        let r: Either<&str, i32> = Either::Right(5);

        assert_eq!(l.to_maybe(), Maybe::Nothing);
        assert_eq!(r.to_maybe(), Maybe::Just(5));
        assert_eq!(l.left_value(), Maybe::Just("e"));
        assert_eq!(r.left_value(), Maybe::Nothing);

        assert_eq!(Either::from_maybe(Maybe::Just(5), || "e"), r);
        assert_eq!(Either::from_maybe(Maybe::<i32>::Nothing, || "e"), l);
    }

    #[test]
    fn test_into_result_and_contains() {
        assert_eq!(Either::<&str, i32>::Right(1).into_result(), Ok(1));
        assert_eq!(Either::<&str, i32>::Left("e").into_result(), Err("e"));
        assert!(Either::<&str, i32>::Right(1).contains(&1));
        assert!(!Either::<&str, i32>::Left("e").contains(&1));
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(1));
        assert_eq!(nested.flatten(), Either::Right(1));

        let inner_left: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
        assert_eq!(inner_left.flatten(), Either::Left("inner"));
    }
}
