use crate::error::ValidationError;

/// The only resource value treated as unrestricted. Patterns like `arn:aws:s3:::*` are not.
pub const WILDCARD: &str = "*";

/// Missing resource is an error; a wildcard entry is a soft `false`.
pub fn resource(resources: Option<&[String]>) -> Result<bool, ValidationError> {
    let resources = resources.ok_or(ValidationError::ResourceMissing)?;
    Ok(!has_wildcard(resources))
}

pub fn has_wildcard(resources: &[String]) -> bool {
    resources.iter().any(|r| r == WILDCARD)
}

/// Lenient form of [`resource`]: present and wildcard-free.
pub fn resource_is_scoped(resources: Option<&[String]>) -> bool {
    resources.is_some_and(|r| !has_wildcard(r))
}
