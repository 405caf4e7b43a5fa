use super::statement::statements;
use crate::error::ValidationError;
use rolecheck_model::{PolicyDocument, RolePolicy};

/// Policy language versions accepted in `PolicyDocument.Version`.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["2012-10-17", "2008-10-17"];

pub fn role_policy(policy: Option<&RolePolicy>) -> Result<&RolePolicy, ValidationError> {
    policy.ok_or(ValidationError::RolePolicyMissing)
}

/// Version first, then every statement.
pub fn policy_document(document: Option<&PolicyDocument>) -> Result<bool, ValidationError> {
    let document = document.ok_or(ValidationError::PolicyDocumentMissing)?;
    Ok(version(document.version.as_deref())? && statements(document.statement.as_deref())?)
}

pub fn version(version: Option<&str>) -> Result<bool, ValidationError> {
    match version {
        None => Err(ValidationError::VersionMissing),
        Some(v) if SUPPORTED_VERSIONS.contains(&v) => Ok(true),
        Some(v) => Err(ValidationError::VersionUnsupported {
            version: v.to_string(),
        }),
    }
}
