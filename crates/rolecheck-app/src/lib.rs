//! Use case orchestration for rolecheck.
//!
//! This crate provides the application layer: use cases that coordinate file discovery, the
//! model parser, the validation engine, and rendering. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod discover;
mod explain;
mod render;

pub use check::{CheckInput, CheckOutput, run_check, validate_text, verdict_exit_code};
pub use discover::discover_inputs;
pub use explain::{ExplainOutput, Surfaces, format_explanation, format_not_found, run_explain};
pub use render::{render_text, serialize_report};
