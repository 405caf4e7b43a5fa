//! Individual robust-mode checks.
//!
//! Every check returns `Ok(true)` when it passes, an error for a schema violation, and
//! `Ok(false)` only for the soft wildcard-resource failure. Checks compose with `?` and `&&`, so
//! the first failure stops evaluation.

mod document;
mod policy_name;
mod resource;
mod statement;

pub use document::{SUPPORTED_VERSIONS, policy_document, role_policy, version};
pub use policy_name::{MAX_NAME_LEN, policy_name};
pub use resource::{WILDCARD, has_wildcard, resource, resource_is_scoped};
pub use statement::{ALLOWED_EFFECTS, action, effect, principal, statement, statements};
