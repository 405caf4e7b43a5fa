use crate::error::{NameViolation, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_NAME_LEN: usize = 128;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+=,.@_-]+$").expect("policy name pattern compiles"));

/// Presence, then character set, then length. An empty name fails the character set check
/// because the pattern needs at least one character.
pub fn policy_name(name: Option<&str>) -> Result<bool, ValidationError> {
    let Some(name) = name else {
        return Err(ValidationError::PolicyNameInvalid(NameViolation::Missing));
    };

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::PolicyNameInvalid(NameViolation::BadFormat));
    }
    if name.is_empty() {
        return Err(ValidationError::PolicyNameInvalid(NameViolation::TooShort));
    }
    // The pattern admits ASCII only, so bytes == characters here.
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::PolicyNameInvalid(NameViolation::TooLong));
    }

    Ok(true)
}
