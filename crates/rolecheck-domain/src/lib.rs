//! Pure role policy validation (no IO).
//!
//! Input: a role policy built by `rolecheck-model` (or `None` when the input held no policy).
//! Output: a boolean verdict, or in robust mode the first schema violation.

#![forbid(unsafe_code)]

pub mod checks;
pub mod error;
pub mod policy;

mod engine;

pub use engine::{validate, validate_lenient, validate_robust};
pub use error::{NameViolation, ValidationError};
pub use policy::Mode;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
