use thiserror::Error;

/// Error returned when a [`Maybe`](crate::Maybe) is converted into a `Result`
/// and turns out to be `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("expected a value but found nothing")]
pub struct Absent;
