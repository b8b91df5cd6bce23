//! Curried binding, extraction and conversion.

use crate::{Container, maybe::Maybe, result::Either};

/// Create a function that binds any [`Container`] through `f`.
///
/// The container returned by `f` is passed on as is, never wrapped again.
///
/// # Examples
///
/// ```
/// use tagged::compose::and_then;
/// use tagged::Maybe;
///
/// let reciprocal = and_then(|x: f64| if x == 0.0 { Maybe::Nothing } else { Maybe::Just(1.0 / x) });
/// assert_eq!(reciprocal(Maybe::Just(4.0)), Maybe::Just(0.25));
/// assert_eq!(reciprocal(Maybe::Just(0.0)), Maybe::Nothing);
/// ```
pub fn and_then<C, U, F>(f: F) -> impl Fn(C) -> C::With<U>
where
    C: Container,
    F: Fn(C::Item) -> C::With<U>,
{
    move |c: C| c.and_then(&f)
}

/// Create a function that takes the value out of a `Maybe`, falling back to `default()`.
///
/// `default` is only called for `Nothing`.
///
/// # Examples
///
/// ```
/// use tagged::compose::get_or_else;
/// use tagged::Maybe;
///
/// let or_empty = get_or_else(String::new);
/// assert_eq!(or_empty(Maybe::Just("x".to_string())), "x");
/// assert_eq!(or_empty(Maybe::Nothing), "");
/// ```
pub fn get_or_else<T, F>(default: F) -> impl Fn(Maybe<T>) -> T
where
    F: Fn() -> T,
{
    move |m: Maybe<T>| m.get_or_else(&default)
}

/// Create a function that turns an `Either` into a `Maybe`, dropping any failure reason.
pub fn to_maybe<L, R>() -> impl Fn(Either<L, R>) -> Maybe<R> {
    Either::to_maybe
}

/// Create a function that turns a `Maybe` into an `Either`, using `on_absent` for `Nothing`.
///
/// # Examples
///
/// ```
/// use tagged::compose::{from_maybe, to_maybe};
/// use tagged::{Either, Maybe};
///
/// let require = from_maybe(|| "required");
/// assert_eq!(require(Maybe::Just(1)), Either::Right(1));
/// assert_eq!(require(Maybe::Nothing), Either::Left("required"));
///
/// let forget = to_maybe();
/// assert_eq!(forget(Either::<&str, i32>::Left("oops")), Maybe::Nothing);
/// ```
pub fn from_maybe<L, R, F>(on_absent: F) -> impl Fn(Maybe<R>) -> Either<L, R>
where
    F: Fn() -> L,
{
    move |m: Maybe<R>| Either::from_maybe(m, &on_absent)
}
