//! Config parsing and run settings resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::RolecheckConfigV1;
pub use resolve::{EffectiveConfig, InputShape, Overrides, ResolvedConfig};

/// Stable schema identifier accepted in the `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "rolecheck.config.v1";

/// Parse `rolecheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RolecheckConfigV1> {
    let cfg: RolecheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings used for a run (defaults + config file + overrides).
pub fn resolve_config(
    cfg: RolecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of `rolecheck.toml`, pretty-printed.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(RolecheckConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let cfg = parse_config_toml(
            r#"
schema = "rolecheck.config.v1"
mode = "robust"
input = "many"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.schema.as_deref(), Some(SCHEMA_CONFIG_V1));
        assert_eq!(cfg.mode.as_deref(), Some("robust"));
        assert_eq!(cfg.input.as_deref(), Some("many"));
    }

    #[test]
    fn parse_empty_config_is_default() {
        let cfg = parse_config_toml("").expect("parse");
        assert_eq!(cfg, RolecheckConfigV1::default());
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(parse_config_toml("mode = 1").is_err());
    }

    #[test]
    fn schema_mentions_every_key() {
        let schema = config_schema_json().expect("schema");
        assert!(schema.contains("\"mode\""));
        assert!(schema.contains("\"input\""));
        assert!(schema.contains("\"schema\""));
    }
}
