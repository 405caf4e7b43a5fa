//! Stable DTOs and IDs used across the rolecheck workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - normalized source path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::SourcePath;
pub use receipt::{
    Outcome, PolicyReport, PolicyResult, ReportMode, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
