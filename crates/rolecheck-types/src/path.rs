use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display path of a validated input file, as it appears in reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - an empty input becomes `-`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = "-".to_string();
        }
        Self(v)
    }

    /// Path of `file` relative to `root`, or `file` unchanged when it is not under `root`.
    pub fn relative_to(file: &Utf8Path, root: &Utf8Path) -> Self {
        match file.strip_prefix(root) {
            Ok(rel) if !rel.as_str().is_empty() => SourcePath::new(rel.as_str()),
            _ => SourcePath::new(file.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SourcePath {
    fn from(value: &Utf8Path) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SourcePath {
    fn from(value: Utf8PathBuf) -> Self {
        SourcePath::new(value.as_str())
    }
}
