use super::resource::resource;
use crate::error::ValidationError;
use rolecheck_model::Statement;
use serde_json::Value;

pub const ALLOWED_EFFECTS: [&str; 2] = ["Allow", "Deny"];

/// Statements in document order; the first one that does not pass ends the run.
pub fn statements(statements: Option<&[Statement]>) -> Result<bool, ValidationError> {
    let statements = statements.ok_or(ValidationError::StatementMissing)?;

    for (index, st) in statements.iter().enumerate() {
        if !statement(st)? {
            tracing::debug!(index, sid = ?st.sid, "statement grants a wildcard resource");
            return Ok(false);
        }
    }

    Ok(true)
}

/// Effect, principal, action, resource.
pub fn statement(st: &Statement) -> Result<bool, ValidationError> {
    Ok(effect(st.effect())?
        && principal(st.principal.as_ref())?
        && action(st.action())?
        && resource(st.resource())?)
}

pub fn effect(effect: Option<&str>) -> Result<bool, ValidationError> {
    match effect {
        None => Err(ValidationError::EffectMissing),
        Some(e) if ALLOWED_EFFECTS.contains(&e) => Ok(true),
        Some(e) => Err(ValidationError::EffectInvalid {
            effect: e.to_string(),
        }),
    }
}

/// Role policies apply to the identity they are attached to and must not name a principal.
pub fn principal(principal: Option<&Value>) -> Result<bool, ValidationError> {
    match principal {
        None => Ok(true),
        Some(_) => Err(ValidationError::PrincipalNotAllowed),
    }
}

pub fn action(actions: Option<&[String]>) -> Result<bool, ValidationError> {
    match actions {
        Some(list) if !list.is_empty() => Ok(true),
        _ => Err(ValidationError::ActionMissing),
    }
}
