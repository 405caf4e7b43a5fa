use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `rolecheck.toml` schema v1.
///
/// This is a *user-facing* config model: values stay strings here and are checked during
/// resolution, so error messages can name the offending key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RolecheckConfigV1 {
    /// Optional schema string for tooling (`rolecheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Validation mode: `lenient` (default) or `robust`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Input shape: `auto` (default), `single`, or `many`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}
