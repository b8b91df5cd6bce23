//! Curried mapping and filtering.

use crate::{Container, maybe::Maybe, result::Either};

/// Create a function that maps `f` over any [`Container`].
///
/// # Examples
///
/// ```
/// use tagged::compose::map;
/// use tagged::{Either, Maybe};
///
/// let len = map(|s: &str| s.len());
/// assert_eq!(len(Maybe::Just("four")), Maybe::Just(4));
/// assert_eq!(len(Maybe::Nothing), Maybe::Nothing);
///
/// let negate = map(|x: i32| -x);
/// assert_eq!(negate(Either::<&str, i32>::Right(1)), Either::Right(-1));
/// ```
pub fn map<C, U, F>(f: F) -> impl Fn(C) -> C::With<U>
where
    C: Container,
    F: Fn(C::Item) -> U,
{
    move |c: C| c.map(&f)
}

/// Create a function that keeps a `Just` only when `predicate` holds.
///
/// # Examples
///
/// ```
/// use tagged::compose::filter;
/// use tagged::Maybe;
///
/// let short = filter(|s: &&str| s.len() <= 3);
/// assert_eq!(short(Maybe::Just("abc")), Maybe::Just("abc"));
/// assert_eq!(short(Maybe::Just("abcd")), Maybe::Nothing);
/// ```
pub fn filter<T, P>(predicate: P) -> impl Fn(Maybe<T>) -> Maybe<T>
where
    P: Fn(&T) -> bool,
{
    move |m: Maybe<T>| m.filter(&predicate)
}

/// Create a function that keeps a `Right` when `predicate` holds and otherwise
/// replaces it with `Left(on_false())`.
///
/// # Examples
///
/// ```
/// use tagged::compose::filter_or_else;
/// use tagged::Either;
///
/// let adult = filter_or_else(|age: &u32| *age >= 18, || "too young");
/// assert_eq!(adult(Either::Right(30)), Either::Right(30));
/// assert_eq!(adult(Either::Right(12)), Either::Left("too young"));
/// assert_eq!(adult(Either::Left("no age")), Either::Left("no age"));
/// ```
pub fn filter_or_else<L, R, P, F>(predicate: P, on_false: F) -> impl Fn(Either<L, R>) -> Either<L, R>
where
    P: Fn(&R) -> bool,
    F: Fn() -> L,
{
    move |e: Either<L, R>| e.filter_or_else(&predicate, &on_false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{compose, identity};

    #[test]
    fn test_map_over_maybe() {
        let double = map(|x: i32| x * 2);

        assert_eq!(double(Maybe::Just(4)), Maybe::Just(8));
        assert_eq!(double(Maybe::Nothing), Maybe::Nothing);
    }

    #[test]
    fn test_map_over_either() {
        let describe = map(|x: u8| format!("#{x}"));

        assert_eq!(describe(Either::<(), u8>::Right(7)), Either::Right("#7".to_string()));
        assert_eq!(describe(Either::<(), u8>::Left(())), Either::Left(()));
    }

    #[test]
    fn test_map_identity_is_noop() {
        let same = map(identity::<i32>);
        assert_eq!(same(Maybe::Just(3)), Maybe::Just(3));
        assert_eq!(same(Maybe::Nothing), Maybe::Nothing);
    }

    #[test]
    fn test_map_composition() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 10;

        let separately = compose(map(g), map(f));
        let fused = map(compose(g, f));

        for m in [Maybe::Just(1), Maybe::Just(-4), Maybe::Nothing] {
            assert_eq!(separately(m), fused(m));
        }
    }

    #[test]
    fn test_filter() {
        let even = filter(|x: &i32| x % 2 == 0);

        assert_eq!(even(Maybe::Just(2)), Maybe::Just(2));
        assert_eq!(even(Maybe::Just(3)), Maybe::Nothing);
        assert_eq!(even(Maybe::Nothing), Maybe::Nothing);
    }

    #[test]
    fn test_filter_or_else() {
        let non_empty = filter_or_else(|s: &String| !s.is_empty(), || "empty");

        assert_eq!(non_empty(Either::Right("a".to_string())), Either::Right("a".to_string()));
        assert_eq!(non_empty(Either::Right(String::new())), Either::Left("empty"));
        assert_eq!(non_empty(Either::Left("earlier")), Either::Left("earlier"));
    }
}
