use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Resolve the policy files to validate.
///
/// Behavior:
/// - A file path is returned as-is, whatever its extension.
/// - A directory is walked recursively for `*.json` files, returned in sorted order.
pub fn discover_inputs(path: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let meta = std::fs::metadata(path).with_context(|| format!("read {}", path))?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut out: Vec<Utf8PathBuf> = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.with_context(|| format!("walk {}", path))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        if file.extension() == Some("json") {
            out.push(file);
        }
    }

    // Stable order.
    out.sort();
    tracing::debug!(root = %path, files = out.len(), "discovered policy files");
    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn single_file_is_returned_regardless_of_extension() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let file = root.join("policy.txt");
        write_file(&file, "{}");

        assert_eq!(discover_inputs(&file).expect("discover"), vec![file]);
    }

    #[test]
    fn directory_yields_sorted_json_files_only() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("b.json"), "{}");
        write_file(&root.join("a.json"), "{}");
        write_file(&root.join("nested/c.json"), "{}");
        write_file(&root.join("notes.md"), "# notes");

        let found = discover_inputs(&root).expect("discover");
        let rel: Vec<&str> = found
            .iter()
            .map(|p| p.strip_prefix(&root).expect("under root").as_str())
            .collect();
        assert_eq!(rel, vec!["a.json", "b.json", "nested/c.json"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = discover_inputs(&root.join("nope.json")).expect_err("missing");
        assert!(err.to_string().contains("nope.json"));
    }
}
