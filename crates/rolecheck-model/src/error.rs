use std::fmt;

/// Statement fields that accept either a string or a list of strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Action,
    Resource,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Action => "Action",
            Field::Resource => "Resource",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Action` or `Resource` held a JSON shape other than a string or a list of strings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Could not deserialize value of field: {field} (found {found})")]
pub struct MalformedFieldError {
    pub field: Field,
    /// JSON type name of the offending value.
    pub found: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid role policy JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    MalformedField(#[from] MalformedFieldError),
}
