use crate::error::{Field, MalformedFieldError, ParseError};
use crate::model::{PolicyDocument, RolePolicy, Statement};
use serde::Deserialize;
use serde_json::Value;

/// Role policy exactly as it appears in JSON, before normalization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRolePolicy {
    pub policy_name: Option<String>,
    pub policy_document: Option<RawPolicyDocument>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPolicyDocument {
    pub version: Option<String>,
    pub statement: Option<Vec<RawStatement>>,
}

/// Statement with `Action`/`Resource` still in their raw JSON shape.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStatement {
    pub sid: Option<String>,
    pub effect: Option<String>,
    pub principal: Option<Value>,
    pub action: Option<Value>,
    pub resource: Option<Value>,
}

/// The two accepted shapes of `Action` and `Resource`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

impl OneOrMany {
    /// Resolve a raw field value. `None` stays absent; anything but a string or a list of
    /// strings is a [`MalformedFieldError`].
    pub fn normalize(
        field: Field,
        raw: Option<Value>,
    ) -> Result<Option<Vec<String>>, MalformedFieldError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let found = json_type_name(&raw);
        serde_json::from_value::<OneOrMany>(raw)
            .map(|v| Some(v.into()))
            .map_err(|_| MalformedFieldError { field, found })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(items) if items.iter().any(|v| !v.is_string()) => "array with non-string items",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<RawStatement> for Statement {
    type Error = MalformedFieldError;

    fn try_from(raw: RawStatement) -> Result<Self, Self::Error> {
        Ok(Statement {
            sid: raw.sid,
            effect: raw.effect,
            principal: raw.principal,
            action: OneOrMany::normalize(Field::Action, raw.action)?,
            resource: OneOrMany::normalize(Field::Resource, raw.resource)?,
        })
    }
}

impl TryFrom<RawPolicyDocument> for PolicyDocument {
    type Error = MalformedFieldError;

    fn try_from(raw: RawPolicyDocument) -> Result<Self, Self::Error> {
        let statement = raw
            .statement
            .map(|list| {
                list.into_iter()
                    .map(Statement::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(PolicyDocument {
            version: raw.version,
            statement,
        })
    }
}

impl TryFrom<RawRolePolicy> for RolePolicy {
    type Error = MalformedFieldError;

    fn try_from(raw: RawRolePolicy) -> Result<Self, Self::Error> {
        Ok(RolePolicy {
            policy_name: raw.policy_name,
            policy_document: raw
                .policy_document
                .map(PolicyDocument::try_from)
                .transpose()?,
        })
    }
}

/// Result of [`parse_any`]: the shape is decided by the top-level JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedInput {
    Single(Option<RolePolicy>),
    Batch(Vec<Option<RolePolicy>>),
}

impl ParsedInput {
    pub fn into_policies(self) -> Vec<Option<RolePolicy>> {
        match self {
            ParsedInput::Single(p) => vec![p],
            ParsedInput::Batch(v) => v,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, ParsedInput::Batch(_))
    }
}

/// Parse one role policy. A top-level JSON `null` yields `Ok(None)`.
pub fn parse_one(text: &str) -> Result<Option<RolePolicy>, ParseError> {
    let raw: Option<RawRolePolicy> = serde_json::from_str(text)?;
    convert_one(raw)
}

/// Parse a JSON array of role policies. `null` entries are kept as `None`.
pub fn parse_many(text: &str) -> Result<Vec<Option<RolePolicy>>, ParseError> {
    let raw: Vec<Option<RawRolePolicy>> = serde_json::from_str(text)?;
    convert_many(raw)
}

/// Same as [`parse_one`], from an already-parsed JSON value.
pub fn from_value(value: Value) -> Result<Option<RolePolicy>, ParseError> {
    let raw: Option<RawRolePolicy> = serde_json::from_value(value)?;
    convert_one(raw)
}

/// Same as [`parse_many`], from an already-parsed JSON value.
pub fn many_from_value(value: Value) -> Result<Vec<Option<RolePolicy>>, ParseError> {
    let raw: Vec<Option<RawRolePolicy>> = serde_json::from_value(value)?;
    convert_many(raw)
}

/// Parse either shape: a top-level array is a batch, anything else a single policy.
pub fn parse_any(text: &str) -> Result<ParsedInput, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(ParsedInput::Batch(many_from_value(value)?))
    } else {
        Ok(ParsedInput::Single(from_value(value)?))
    }
}

fn convert_one(raw: Option<RawRolePolicy>) -> Result<Option<RolePolicy>, ParseError> {
    Ok(raw.map(RolePolicy::try_from).transpose()?)
}

fn convert_many(raw: Vec<Option<RawRolePolicy>>) -> Result<Vec<Option<RolePolicy>>, ParseError> {
    raw.into_iter().map(convert_one).collect()
}
