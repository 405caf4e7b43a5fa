//! Stable identifiers for checks and outcome codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_POLICY_PRESENT: &str = "policy.present";
pub const CHECK_POLICY_NAME: &str = "policy.name";
pub const CHECK_DOCUMENT_PRESENT: &str = "document.present";
pub const CHECK_DOCUMENT_VERSION: &str = "document.version";
pub const CHECK_DOCUMENT_STATEMENT: &str = "document.statement";
pub const CHECK_STATEMENT_EFFECT: &str = "statement.effect";
pub const CHECK_STATEMENT_PRINCIPAL: &str = "statement.principal";
pub const CHECK_STATEMENT_ACTION: &str = "statement.action";
pub const CHECK_STATEMENT_RESOURCE: &str = "statement.resource";

// Codes: policy.present
pub const CODE_ROLE_POLICY_MISSING: &str = "role_policy_missing";

// Codes: policy.name
pub const CODE_POLICY_NAME_MISSING: &str = "policy_name_missing";
pub const CODE_POLICY_NAME_FORMAT: &str = "policy_name_format";
pub const CODE_POLICY_NAME_TOO_SHORT: &str = "policy_name_too_short";
pub const CODE_POLICY_NAME_TOO_LONG: &str = "policy_name_too_long";

// Codes: document.present
pub const CODE_POLICY_DOCUMENT_MISSING: &str = "policy_document_missing";

// Codes: document.version
pub const CODE_VERSION_MISSING: &str = "version_missing";
pub const CODE_VERSION_UNSUPPORTED: &str = "version_unsupported";

// Codes: document.statement
pub const CODE_STATEMENT_MISSING: &str = "statement_missing";

// Codes: statement.effect
pub const CODE_EFFECT_MISSING: &str = "effect_missing";
pub const CODE_EFFECT_INVALID: &str = "effect_invalid";

// Codes: statement.principal
pub const CODE_PRINCIPAL_NOT_ALLOWED: &str = "principal_not_allowed";

// Codes: statement.action
pub const CODE_ACTION_MISSING: &str = "action_missing";

// Codes: statement.resource
pub const CODE_RESOURCE_MISSING: &str = "resource_missing";
pub const CODE_WILDCARD_RESOURCE: &str = "wildcard_resource";

// Parser-level
pub const CHECK_INPUT_PARSE: &str = "input.parse";
pub const CODE_MALFORMED_FIELD: &str = "malformed_field";
pub const CODE_INVALID_JSON: &str = "invalid_json";
