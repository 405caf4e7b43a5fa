use crate::model::RolecheckConfigV1;
use anyhow::Context;
use rolecheck_domain::Mode;

/// How the input file's top-level JSON value is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputShape {
    /// A top-level array is a batch, anything else a single policy.
    #[default]
    Auto,
    Single,
    Many,
}

impl InputShape {
    pub fn as_str(self) -> &'static str {
        match self {
            InputShape::Auto => "auto",
            InputShape::Single => "single",
            InputShape::Many => "many",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub mode: Option<String>,
    pub input: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub mode: Mode,
    pub input: InputShape,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: RolecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != crate::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            crate::SCHEMA_CONFIG_V1
        );
    }

    let mut effective = EffectiveConfig::default();

    if let Some(mode_s) = overrides.mode.or(cfg.mode) {
        effective.mode = parse_mode(&mode_s).context("invalid mode")?;
    }

    if let Some(input_s) = overrides.input.or(cfg.input) {
        effective.input = parse_input(&input_s).context("invalid input")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_mode(v: &str) -> anyhow::Result<Mode> {
    match v {
        "lenient" => Ok(Mode::Lenient),
        "robust" => Ok(Mode::Robust),
        other => anyhow::bail!("unknown mode: {other} (expected 'lenient' or 'robust')"),
    }
}

fn parse_input(v: &str) -> anyhow::Result<InputShape> {
    match v {
        "auto" => Ok(InputShape::Auto),
        "single" => Ok(InputShape::Single),
        "many" => Ok(InputShape::Many),
        other => anyhow::bail!("unknown input shape: {other} (expected auto|single|many)"),
    }
}
