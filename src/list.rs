//! Total accessors over slices.
//!
//! Every function borrows from the slice and returns [`Maybe::Nothing`] where
//! indexing would otherwise panic.
//!
//! ```rust
//! use tagged::list::{head, init, last, tail};
//! use tagged::Maybe;
//!
//! let xs = [1, 2, 3];
//! assert_eq!(head(&xs), Maybe::Just(&1));
//! assert_eq!(tail(&xs), Maybe::Just(&[2, 3][..]));
//! assert_eq!(last(&xs), Maybe::Just(&3));
//! assert_eq!(init(&xs), Maybe::Just(&[1, 2][..]));
//!
//! let empty: [i32; 0] = [];
//! assert_eq!(head(&empty), Maybe::Nothing);
//! ```

use crate::maybe::Maybe;

/// The first element.
#[inline]
pub fn head<T>(xs: &[T]) -> Maybe<&T> {
    xs.first().into()
}

/// Everything after the first element.
#[inline]
pub fn tail<T>(xs: &[T]) -> Maybe<&[T]> {
    xs.split_first().map(|(_, rest)| rest).into()
}

/// The last element.
#[inline]
pub fn last<T>(xs: &[T]) -> Maybe<&T> {
    xs.last().into()
}

/// Everything before the last element.
#[inline]
pub fn init<T>(xs: &[T]) -> Maybe<&[T]> {
    xs.split_last().map(|(_, rest)| rest).into()
}

/// The element at `index`.
#[inline]
pub fn nth<T>(xs: &[T], index: usize) -> Maybe<&T> {
    xs.get(index).into()
}

/// The first element matching `predicate`.
///
/// ```rust
/// use tagged::list::find;
/// use tagged::Maybe;
///
/// let words = ["apple", "kiwi", "banana"];
/// assert_eq!(find(&words, |w| w.len() == 4), Maybe::Just(&"kiwi"));
/// assert_eq!(find(&words, |w| w.is_empty()), Maybe::Nothing);
/// ```
#[inline]
pub fn find<T, P>(xs: &[T], mut predicate: P) -> Maybe<&T>
where
    P: FnMut(&T) -> bool,
{
    xs.iter().find(|x| predicate(x)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_gives_nothing_everywhere() {
        let xs: &[i32] = &[];

        assert_eq!(head(xs), Maybe::Nothing);
        assert_eq!(tail(xs), Maybe::Nothing);
        assert_eq!(last(xs), Maybe::Nothing);
        assert_eq!(init(xs), Maybe::Nothing);
        assert_eq!(nth(xs, 0), Maybe::Nothing);
        assert_eq!(find(xs, |_| true), Maybe::Nothing);
    }

    #[test]
    fn test_single_element() {
        let xs = [7];

        assert_eq!(head(&xs), Maybe::Just(&7));
        assert_eq!(last(&xs), Maybe::Just(&7));
        assert_eq!(tail(&xs), Maybe::Just(&[][..]));
        assert_eq!(init(&xs), Maybe::Just(&[][..]));
    }

    #[test]
    fn test_accessors_are_distinct() {
        let xs = ['a', 'b', 'c', 'd'];

        assert_eq!(head(&xs), Maybe::Just(&'a'));
        assert_eq!(tail(&xs), Maybe::Just(&['b', 'c', 'd'][..]));
        assert_eq!(last(&xs), Maybe::Just(&'d'));
        assert_eq!(init(&xs), Maybe::Just(&['a', 'b', 'c'][..]));
    }

    #[test]
    fn test_nth() {
        let xs = [10, 20, 30];

        assert_eq!(nth(&xs, 1), Maybe::Just(&20));
        assert_eq!(nth(&xs, 3), Maybe::Nothing);
    }

    #[test]
    fn test_find_returns_first_match() {
        let xs = [1, 4, 6, 9];

        assert_eq!(find(&xs, |x| x % 2 == 0), Maybe::Just(&4));
        assert_eq!(find(&xs, |x| *x > 100), Maybe::Nothing);
    }

    #[test]
    fn test_accessors_chain_with_and_then() {
        let rows = vec![vec![1, 2], vec![], vec![3]];

        let second_row_head = nth(&rows, 1).and_then(|row| head(row));
        let third_row_head = nth(&rows, 2).and_then(|row| head(row));

        assert_eq!(second_row_head, Maybe::Nothing);
        assert_eq!(third_row_head, Maybe::Just(&3));
    }
}
