//! Conversions between the containers and their standard-library and
//! [`either`] crate counterparts.
//!
//! | from                      | to                        | loses information?        |
//! |---------------------------|---------------------------|---------------------------|
//! | `Option<T>`               | `Maybe<T>`                | no                        |
//! | `Result<R, L>`            | `Either<L, R>`            | no                        |
//! | `either::Either<L, R>`    | `Either<L, R>`            | no                        |
//! | `Either<(), T>`           | `Maybe<T>`                | no                        |
//! | `Either<L, R>`            | `Maybe<R>`                | yes, via [`Either::to_maybe`] |
//! | `Maybe<R>`                | `Either<L, R>`            | needs [`Either::from_maybe`]  |
//!
//! Every conversion above goes both ways through `From` except the last two.

use crate::{maybe::Maybe, result::Either};

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Just(v),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(v) => Some(v),
            Maybe::Nothing => None,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

impl<L, R> From<either::Either<L, R>> for Either<L, R> {
    #[inline]
    fn from(value: either::Either<L, R>) -> Self {
        match value {
            either::Either::Left(l) => Either::Left(l),
            either::Either::Right(r) => Either::Right(r),
        }
    }
}

impl<L, R> From<Either<L, R>> for either::Either<L, R> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(l) => either::Either::Left(l),
            Either::Right(r) => either::Either::Right(r),
        }
    }
}

/// `Either<(), T>` and `Maybe<T>` carry the same information.
impl<T> From<Either<(), T>> for Maybe<T> {
    #[inline]
    fn from(value: Either<(), T>) -> Self {
        value.to_maybe()
    }
}

impl<T> From<Maybe<T>> for Either<(), T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.ok_or_else(|| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_round_trip() {
        for o in [Some(1), None] {
            let m: Maybe<i32> = o.into();
            let back: Option<i32> = m.into();
            assert_eq!(back, o);
        }
        assert_eq!(Maybe::from(Some("x")), Maybe::Just("x"));
        assert_eq!(Maybe::<u8>::from(None), Maybe::Nothing);
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("e".to_string());

        assert_eq!(Either::from(ok.clone()), Either::Right(1));
        assert_eq!(Either::from(err.clone()), Either::Left("e".to_string()));
        assert_eq!(Result::from(Either::from(ok.clone())), ok);
        assert_eq!(Result::from(Either::from(err.clone())), err);
    }

    #[test]
    fn test_either_crate_round_trip() {
        let l: either::Either<&str, i32> = either::Either::Left("l");
        let r: either::Either<&str, i32> = either::Either::Right(2);

        assert_eq!(Either::from(l), Either::Left("l"));
        assert_eq!(Either::from(r), Either::Right(2));
        assert_eq!(either::Either::from(Either::from(l)), l);
        assert_eq!(either::Either::from(Either::from(r)), r);
    }

    #[test]
    fn test_unit_error_is_isomorphic_to_maybe() {
        for e in [Either::<(), i32>::Right(3), Either::Left(())] {
            let m: Maybe<i32> = e.into();
            let back: Either<(), i32> = m.into();
            assert_eq!(back, e);
        }
        for m in [Maybe::Just(3), Maybe::Nothing] {
            let e: Either<(), i32> = m.into();
            let back: Maybe<i32> = e.into();
            assert_eq!(back, m);
        }
    }

    #[test]
    fn test_richer_error_is_lossy() {
        let a: Either<&str, i32> = Either::Left("first");
        let b: Either<&str, i32> = Either::Left("second");

        assert_eq!(a.to_maybe(), b.to_maybe());
        assert_eq!(Either::from_maybe(a.to_maybe(), || "restored"), Either::Left("restored"));
    }
}
