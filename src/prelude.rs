//! Commonly used imports
//!
//! Use `use tagged::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Absent, Container, Either, Maybe};

// Safe accessors
pub use crate::list::{head, init, last, tail};

// Composition
pub use crate::compose::{compose, identity};
