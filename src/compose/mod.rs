//! Point-free combinators
//!
//! Each function here takes the "configuration" of an operation (a mapping
//! function, a predicate, a fallback) and returns a closure that applies it to
//! a container. This lets pipelines be built before any value exists:
//!
//! ```rust
//! use tagged::compose::{and_then, compose, filter, get_or_else};
//! use tagged::Maybe;
//!
//! let parse = and_then(|s: &str| Maybe::from(s.parse::<i64>().ok()));
//! let positive = filter(|n: &i64| *n > 0);
//! let or_zero = get_or_else(|| 0);
//!
//! let pipeline = compose(or_zero, compose(positive, parse));
//!
//! assert_eq!(pipeline(Maybe::Just("12")), 12);
//! assert_eq!(pipeline(Maybe::Just("-3")), 0);
//! assert_eq!(pipeline(Maybe::Just("abc")), 0);
//! assert_eq!(pipeline(Maybe::Nothing), 0);
//! ```

mod chain;
mod map;

pub use chain::{and_then, from_maybe, get_or_else, to_maybe};
pub use map::{filter, filter_or_else, map};

/// Returns its argument unchanged.
#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/// Composes two functions right to left: `compose(g, f)(x) == g(f(x))`.
///
/// ```rust
/// use tagged::compose::compose;
///
/// let shout = compose(|s: String| s + "!", |s: &str| s.to_uppercase());
/// assert_eq!(shout("hey"), "HEY!");
/// ```
#[inline]
pub fn compose<A, B, C, G, F>(g: G, f: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x: A| g(f(x))
}
