//! Package-manifest loading and denylist-based trimming.
//!
//! The manifest is read once, two collections are filtered, and the document is
//! written back once. Every key outside the denylists passes through unchanged.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const DEV_DEPENDENCIES_KEY: &str = "devDependencies";
const SCRIPTS_KEY: &str = "scripts";

/// Removes the denylisted dev dependencies and scripts from the manifest at
/// `path`, leaving all other keys untouched, and writes it back pretty-printed.
pub fn trim_manifest(
    path: &Path,
    dev_dependency_denylist: &[String],
    script_denylist: &[String],
) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    let mut doc: Value = serde_json::from_str(&raw)?;

    if !doc.is_object() {
        return Err(Error::ManifestError {
            path: path.display().to_string(),
            detail: "top-level value is not an object".to_string(),
        });
    }

    omit_keys(&mut doc, DEV_DEPENDENCIES_KEY, dev_dependency_denylist);
    omit_keys(&mut doc, SCRIPTS_KEY, script_denylist);

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');
    fs::write(path, rendered)?;
    Ok(())
}

/// Drops every denylisted key from the named collection, if it exists.
fn omit_keys(doc: &mut Value, collection: &str, denylist: &[String]) {
    if let Some(map) = doc.get_mut(collection).and_then(Value::as_object_mut) {
        map.retain(|key, _| {
            let keep = !denylist.iter().any(|denied| denied == key);
            if !keep {
                log::debug!("Dropping '{key}' from '{collection}'");
            }
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn denylist(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn write_manifest(dir: &Path, value: &Value) -> std::path::PathBuf {
        let path = dir.join("package.json");
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn drops_only_denylisted_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_manifest(
            tmp.path(),
            &json!({
                "name": "my-cool-lib",
                "version": "0.0.1",
                "devDependencies": {
                    "enquirer": "^2.3.0",
                    "chalk": "^4.0.0",
                    "replace-in-file": "^6.0.0",
                    "typescript": "^4.0.0"
                },
                "scripts": {
                    "bootstrap": "node scripts/bootstrap.js",
                    "build": "tsc",
                    "test": "jest"
                }
            }),
        );

        trim_manifest(
            &path,
            &denylist(&["enquirer", "chalk", "replace-in-file"]),
            &denylist(&["bootstrap"]),
        )
        .unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let dev_deps = doc["devDependencies"].as_object().unwrap();
        assert_eq!(dev_deps.len(), 1);
        assert_eq!(dev_deps["typescript"], "^4.0.0");

        let scripts = doc["scripts"].as_object().unwrap();
        assert!(scripts.get("bootstrap").is_none());
        assert_eq!(scripts["build"], "tsc");
        assert_eq!(scripts["test"], "jest");

        // Untouched top-level keys pass through unchanged.
        assert_eq!(doc["name"], "my-cool-lib");
        assert_eq!(doc["version"], "0.0.1");
    }

    #[test]
    fn key_order_is_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_manifest(
            tmp.path(),
            &json!({
                "name": "lib",
                "scripts": { "z-last": "z", "bootstrap": "b", "a-first": "a" }
            }),
        );

        trim_manifest(&path, &[], &denylist(&["bootstrap"])).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let z = raw.find("z-last").unwrap();
        let a = raw.find("a-first").unwrap();
        assert!(z < a);
    }

    #[test]
    fn missing_collections_are_tolerated() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_manifest(tmp.path(), &json!({ "name": "lib" }));

        trim_manifest(&path, &denylist(&["chalk"]), &denylist(&["bootstrap"])).unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["name"], "lib");
    }

    #[test]
    fn non_object_manifest_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("package.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = trim_manifest(&path, &[], &[]);
        assert!(matches!(result, Err(Error::ManifestError { .. })));
    }

    #[test]
    fn missing_manifest_propagates_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("package.json");
        assert!(matches!(trim_manifest(&path, &[], &[]), Err(Error::IoError(_))));
    }

    #[test]
    fn written_manifest_ends_with_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_manifest(tmp.path(), &json!({ "name": "lib" }));

        trim_manifest(&path, &[], &[]).unwrap();

        assert!(fs::read_to_string(&path).unwrap().ends_with('\n'));
    }
}
