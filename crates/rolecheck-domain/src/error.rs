use rolecheck_types::ids;
use std::fmt;

/// Which policy name constraint failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameViolation {
    Missing,
    BadFormat,
    TooShort,
    TooLong,
}

impl NameViolation {
    pub fn message(self) -> &'static str {
        match self {
            NameViolation::Missing => "Role policy name not specified",
            NameViolation::BadFormat => "Role policy name is of wrong format",
            NameViolation::TooShort => "Role policy name is too short (minimum length is 1)",
            NameViolation::TooLong => "Role policy name is too long (maximum length is 128)",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            NameViolation::Missing => ids::CODE_POLICY_NAME_MISSING,
            NameViolation::BadFormat => ids::CODE_POLICY_NAME_FORMAT,
            NameViolation::TooShort => ids::CODE_POLICY_NAME_TOO_SHORT,
            NameViolation::TooLong => ids::CODE_POLICY_NAME_TOO_LONG,
        }
    }
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Schema violation reported by robust validation.
///
/// A wildcard resource is not an error: robust validation returns `Ok(false)` for it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Role policy is missing")]
    RolePolicyMissing,

    #[error("{0}")]
    PolicyNameInvalid(NameViolation),

    #[error("Policy document not specified")]
    PolicyDocumentMissing,

    #[error("Policy document version not specified")]
    VersionMissing,

    #[error("Unsupported Version field value: {version}")]
    VersionUnsupported { version: String },

    #[error("Statement field not specified")]
    StatementMissing,

    #[error("Effect field not specified")]
    EffectMissing,

    #[error("Received 'Effect' field value is not allowed: {effect}")]
    EffectInvalid { effect: String },

    #[error("Principal cannot be specified in an attached policy document")]
    PrincipalNotAllowed,

    #[error("At least one action has to be specified")]
    ActionMissing,

    #[error("Resource field not specified")]
    ResourceMissing,
}

impl ValidationError {
    /// Stable snake_case code, see [`rolecheck_types::ids`].
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RolePolicyMissing => ids::CODE_ROLE_POLICY_MISSING,
            ValidationError::PolicyNameInvalid(v) => v.code(),
            ValidationError::PolicyDocumentMissing => ids::CODE_POLICY_DOCUMENT_MISSING,
            ValidationError::VersionMissing => ids::CODE_VERSION_MISSING,
            ValidationError::VersionUnsupported { .. } => ids::CODE_VERSION_UNSUPPORTED,
            ValidationError::StatementMissing => ids::CODE_STATEMENT_MISSING,
            ValidationError::EffectMissing => ids::CODE_EFFECT_MISSING,
            ValidationError::EffectInvalid { .. } => ids::CODE_EFFECT_INVALID,
            ValidationError::PrincipalNotAllowed => ids::CODE_PRINCIPAL_NOT_ALLOWED,
            ValidationError::ActionMissing => ids::CODE_ACTION_MISSING,
            ValidationError::ResourceMissing => ids::CODE_RESOURCE_MISSING,
        }
    }

    /// The check that produced this error.
    pub fn check_id(&self) -> &'static str {
        match self {
            ValidationError::RolePolicyMissing => ids::CHECK_POLICY_PRESENT,
            ValidationError::PolicyNameInvalid(_) => ids::CHECK_POLICY_NAME,
            ValidationError::PolicyDocumentMissing => ids::CHECK_DOCUMENT_PRESENT,
            ValidationError::VersionMissing | ValidationError::VersionUnsupported { .. } => {
                ids::CHECK_DOCUMENT_VERSION
            }
            ValidationError::StatementMissing => ids::CHECK_DOCUMENT_STATEMENT,
            ValidationError::EffectMissing | ValidationError::EffectInvalid { .. } => {
                ids::CHECK_STATEMENT_EFFECT
            }
            ValidationError::PrincipalNotAllowed => ids::CHECK_STATEMENT_PRINCIPAL,
            ValidationError::ActionMissing => ids::CHECK_STATEMENT_ACTION,
            ValidationError::ResourceMissing => ids::CHECK_STATEMENT_RESOURCE,
        }
    }
}
