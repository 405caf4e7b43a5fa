//! Role policy document model.
//!
//! Input: JSON text or an already-parsed `serde_json::Value`.
//! Output: immutable [`RolePolicy`] values with `Action`/`Resource` normalized to string lists.
//!
//! This crate is intentionally free of validation semantics: absent fields are legal here and
//! are judged by `rolecheck-domain`.

#![forbid(unsafe_code)]

mod error;
mod model;
mod parse;

pub use error::{Field, MalformedFieldError, ParseError};
pub use model::{PolicyDocument, RolePolicy, Statement};
pub use parse::{
    OneOrMany, ParsedInput, RawPolicyDocument, RawRolePolicy, RawStatement, from_value,
    many_from_value, parse_any, parse_many, parse_one,
};
