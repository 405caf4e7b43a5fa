use crate::checks;
use crate::error::ValidationError;
use crate::policy::Mode;
use rolecheck_model::RolePolicy;

/// Validate a role policy in the given mode.
///
/// Lenient mode never returns `Err`. Robust mode returns the first schema violation; a wildcard
/// resource is reported as `Ok(false)` in both modes.
pub fn validate(policy: Option<&RolePolicy>, mode: Mode) -> Result<bool, ValidationError> {
    match mode {
        Mode::Lenient => Ok(validate_lenient(policy)),
        Mode::Robust => validate_robust(policy),
    }
}

/// Null-safety plus wildcard detection. Name, version, effect, principal and action are ignored.
pub fn validate_lenient(policy: Option<&RolePolicy>) -> bool {
    let Some(statements) = policy.and_then(RolePolicy::statements) else {
        tracing::debug!(mode = "lenient", "no statements to inspect");
        return false;
    };

    let result = statements
        .iter()
        .all(|st| checks::resource_is_scoped(st.resource()));

    tracing::debug!(
        mode = "lenient",
        statements = statements.len(),
        result,
        "validated role policy"
    );
    result
}

/// Every check in order: policy, name, document (version, then statements).
pub fn validate_robust(policy: Option<&RolePolicy>) -> Result<bool, ValidationError> {
    let policy = checks::role_policy(policy)?;

    let result = checks::policy_name(policy.policy_name())?
        && checks::policy_document(policy.policy_document.as_ref())?;

    tracing::debug!(
        mode = "robust",
        policy_name = policy.policy_name(),
        result,
        "validated role policy"
    );
    Ok(result)
}
