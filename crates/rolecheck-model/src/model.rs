use serde_json::Value;

/// Top-level parsed unit: a named inline role policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RolePolicy {
    pub policy_name: Option<String>,
    pub policy_document: Option<PolicyDocument>,
}

/// The `PolicyDocument` object nested in a role policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyDocument {
    pub version: Option<String>,

    /// Statements in document order.
    pub statement: Option<Vec<Statement>>,
}

/// One effect/principal/action/resource rule.
///
/// `action` and `resource` are already normalized: a bare string in the source JSON becomes a
/// one-element list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statement {
    pub sid: Option<String>,
    pub effect: Option<String>,

    /// Opaque; only presence matters. JSON `null` is stored as `None`.
    pub principal: Option<Value>,

    pub action: Option<Vec<String>>,
    pub resource: Option<Vec<String>>,
}

impl RolePolicy {
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    /// Statements of the embedded document, if both are present.
    pub fn statements(&self) -> Option<&[Statement]> {
        self.policy_document
            .as_ref()
            .and_then(|d| d.statement.as_deref())
    }
}

impl Statement {
    pub fn effect(&self) -> Option<&str> {
        self.effect.as_deref()
    }

    pub fn action(&self) -> Option<&[String]> {
        self.action.as_deref()
    }

    pub fn resource(&self) -> Option<&[String]> {
        self.resource.as_deref()
    }
}
