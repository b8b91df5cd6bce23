//! The optional-value container.
//!
//! [`Maybe<T>`] is either [`Nothing`](Maybe::Nothing) or [`Just(T)`](Maybe::Just).
//! There is no panicking `unwrap`: a value leaves the container through
//! [`get_or_else`](Maybe::get_or_else), [`get_or`](Maybe::get_or), [`fold`](Maybe::fold)
//! or plain pattern matching.
//!
//! # Examples
//!
//! ```rust
//! use tagged::Maybe;
//!
//! let port = Maybe::wrap("8080")
//!     .and_then(|s| Maybe::from(s.parse::<u16>().ok()))
//!     .filter(|p| *p >= 1024);
//!
//! assert_eq!(port, Maybe::Just(8080));
//! assert_eq!(port.get_or_else(|| 80), 8080);
//! ```

use crate::{error::Absent, result::Either};

/// Presence or absence of a value, with no reason attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum Maybe<T> {
    /// No value
    Nothing,
    /// Some value of type `T`
    Just(T),
}

impl<T> Maybe<T> {
    /// Wraps a value in `Just`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(3), Maybe::Just(3));
    /// ```
    #[inline]
    pub const fn wrap(value: T) -> Self {
        Maybe::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Returns `true` if the value is `Just`.
    ///
    /// To get at the payload, match on the variant instead of testing first:
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let x = Maybe::wrap(2);
    /// assert!(x.is_just());
    /// if let Maybe::Just(v) = x {
    ///     assert_eq!(v, 2);
    /// }
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` if the value is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let name = Maybe::wrap(String::from("ada"));
    /// assert_eq!(name.as_ref().map(|s| s.len()), Maybe::Just(3));
    /// assert!(name.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(v) => Maybe::Just(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Just(v) => Maybe::Just(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to the contained value.
    ///
    /// `Nothing` is returned unchanged and `f` is not called.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(4).map(|x| x * 2), Maybe::Just(8));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(v) => Maybe::Just(f(v)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Feeds the contained value to `f` and returns its result as is.
    ///
    /// The result is not wrapped again, so a function returning `Maybe<U>` gives
    /// back a `Maybe<U>` rather than a `Maybe<Maybe<U>>`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    ///
    /// assert_eq!(Maybe::wrap(8).and_then(half).and_then(half), Maybe::Just(2));
    /// assert_eq!(Maybe::wrap(6).and_then(half).and_then(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(v) => f(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a `Just` only when `predicate` holds for its value.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(4).filter(|x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::wrap(3).filter(|x| x % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|v| if predicate(&v) { Maybe::Just(v) } else { Maybe::Nothing })
    }

    /// Returns the contained value, or computes one from `default`.
    ///
    /// `default` is only called for `Nothing`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(1).get_or_else(|| unreachable!()), 1);
    /// assert_eq!(Maybe::Nothing.get_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => default(),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => default,
        }
    }

    /// Returns `self` if it is `Just`, otherwise the container produced by `f`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let fallback = || Maybe::Just("guest");
    /// assert_eq!(Maybe::Just("root").or_else(fallback), Maybe::Just("root"));
    /// assert_eq!(Maybe::Nothing.or_else(fallback), Maybe::Just("guest"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Just(v) => Maybe::Just(v),
            Maybe::Nothing => f(),
        }
    }

    /// Collapses both variants into one value.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |v| format!("got {v}"));
    /// assert_eq!(describe(Maybe::Just(5)), "got 5");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<U, N, J>(self, on_nothing: N, on_just: J) -> U
    where
        N: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(v) => on_just(v),
            Maybe::Nothing => on_nothing(),
        }
    }

    /// Returns `true` if this is a `Just` holding a value equal to `x`.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Maybe::Just(v) if x == v)
    }

    /// Turns `Just(v)` into `Right(v)` and `Nothing` into `Left(on_absent())`.
    ///
    /// ```rust
    /// use tagged::{Either, Maybe};
    ///
    /// let missing: Maybe<u8> = Maybe::Nothing;
    /// assert_eq!(missing.ok_or_else(|| "no byte"), Either::Left("no byte"));
    /// assert_eq!(Maybe::Just(1u8).ok_or_else(|| "no byte"), Either::Right(1));
    /// ```
    #[inline]
    pub fn ok_or_else<L, F>(self, on_absent: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Just(v) => Either::Right(v),
            Maybe::Nothing => Either::Left(on_absent()),
        }
    }

    /// Converts into a standard `Result`, so the value can be taken with `?`.
    ///
    /// ```rust
    /// use tagged::{Absent, Maybe};
    ///
    /// fn first_even(xs: &[i32]) -> Result<i32, Absent> {
    ///     let found = tagged::list::find(xs, |x| *x % 2 == 0).ok_or_absent()?;
    ///     Ok(*found)
    /// }
    ///
    /// assert_eq!(first_even(&[1, 4, 5]), Ok(4));
    /// assert_eq!(first_even(&[1, 3]), Err(Absent));
    /// ```
    #[inline]
    pub fn ok_or_absent(self) -> Result<T, Absent> {
        match self {
            Maybe::Just(v) => Ok(v),
            Maybe::Nothing => Err(Absent),
        }
    }

    /// Takes the value out, leaving `Nothing` in its place.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::replace(self, Maybe::Nothing)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}
