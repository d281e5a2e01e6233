//! Typed access to `package.json` manifests
//!
//! Only the two dependency tables modsize cares about are modelled. Every other
//! field in a manifest is ignored, and version specs are never interpreted.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The project's own `package.json`.
///
/// Dependency maps keep their declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: Option<Map<String, Value>>,

    #[serde(rename = "peerDependencies", default)]
    pub peer_dependencies: Option<Map<String, Value>>,
}

/// A `package.json` found under the dependency root.
///
/// Only `peerDependencies` is read, so odd values in any other field of an
/// installed package never stop a scan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(rename = "peerDependencies", default)]
    pub peer_dependencies: Option<Map<String, Value>>,
}

fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_json(&content, path)
}

impl Manifest {
    /// Parse a manifest from JSON text. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        parse_json(content, path)
    }

    /// Read and parse the manifest at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Load the project manifest from `project_dir`, failing with
    /// [`Error::MissingManifest`] when it is absent.
    pub fn load_project(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(Error::MissingManifest(path));
        }
        log::debug!("reading project manifest {}", path.display());
        Self::from_file(&path)
    }

    /// Names declared under `devDependencies`.
    pub fn dev_dependency_names(&self) -> HashSet<String> {
        self.dev_dependencies
            .iter()
            .flat_map(|deps| deps.keys().cloned())
            .collect()
    }

    /// Names declared under `peerDependencies`, in declaration order.
    pub fn peer_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.peer_dependencies
            .iter()
            .flat_map(|deps| deps.keys().map(String::as_str))
    }
}

impl PackageManifest {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        parse_json(content, path)
    }

    /// Load the manifest in `dir` if the directory has one.
    pub fn load_in_dir(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        log::trace!("reading manifest {}", path.display());
        read_json(&path).map(Some)
    }

    /// Names declared under `peerDependencies`, in declaration order.
    pub fn peer_dependency_names(&self) -> impl Iterator<Item = &str> {
        self.peer_dependencies
            .iter()
            .flat_map(|deps| deps.keys().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const SAMPLE: &str = r#"{
        "name": "my-app",
        "version": "1.0.0",
        "scripts": {"build": "tsc"},
        "dependencies": {"react": "^18.2.0"},
        "devDependencies": {"typescript": "^5.0.0", "jest": "^29.0.0"},
        "peerDependencies": {"react-dom": "^18.0.0", "@types/react": "*", "lodash": "4"}
    }"#;

    fn parse(content: &str) -> Manifest {
        Manifest::parse(content, Path::new("package.json")).unwrap()
    }

    #[test]
    fn test_dev_dependency_names() {
        let names = parse(SAMPLE).dev_dependency_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("typescript"));
        assert!(names.contains("jest"));
        assert!(!names.contains("react"));
    }

    #[test]
    fn test_peer_names_keep_declaration_order() {
        let manifest = parse(SAMPLE);
        let peers: Vec<&str> = manifest.peer_dependency_names().collect();
        assert_eq!(peers, vec!["react-dom", "@types/react", "lodash"]);
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let manifest = parse(r#"{"name": "bare"}"#);
        assert!(manifest.dev_dependency_names().is_empty());
        assert_eq!(manifest.peer_dependency_names().count(), 0);
    }

    #[test]
    fn test_null_tables_are_treated_as_absent() {
        let manifest = parse(r#"{"devDependencies": null, "peerDependencies": null}"#);
        assert!(manifest.dev_dependency_names().is_empty());
        assert_eq!(manifest.peer_dependency_names().count(), 0);
    }

    #[test]
    fn test_version_specs_are_not_interpreted() {
        let manifest = parse(r#"{"peerDependencies": {"odd": {"version": 1}, "num": 2}}"#);
        let peers: Vec<&str> = manifest.peer_dependency_names().collect();
        assert_eq!(peers, vec!["odd", "num"]);
    }

    #[test]
    fn test_invalid_json_is_reported_with_path() {
        let err = Manifest::parse("{ not json", Path::new("pkg/package.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
        assert!(err.to_string().contains("pkg/package.json"));
    }

    #[test]
    fn test_load_project_missing() {
        let dir = TempDir::new().unwrap();
        let err = Manifest::load_project(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingManifest(_)));
    }

    #[test]
    fn test_load_in_dir() {
        let dir = TempDir::new().unwrap();
        assert!(PackageManifest::load_in_dir(dir.path()).unwrap().is_none());

        fs::write(dir.path().join(MANIFEST_FILE), SAMPLE).unwrap();
        let manifest = PackageManifest::load_in_dir(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.peer_dependency_names().count(), 3);
    }

    #[test]
    fn test_package_manifest_ignores_malformed_dev_dependencies() {
        for dev in [r#"[]"#, r#""jest""#, "42"] {
            let content = format!(
                r#"{{"devDependencies": {}, "peerDependencies": {{"react": "*"}}}}"#,
                dev
            );
            let manifest = PackageManifest::parse(&content, Path::new("package.json")).unwrap();
            let peers: Vec<&str> = manifest.peer_dependency_names().collect();
            assert_eq!(peers, vec!["react"], "devDependencies = {}", dev);
        }
    }

    #[test]
    fn test_project_manifest_rejects_malformed_dev_dependencies() {
        let err = Manifest::parse(r#"{"devDependencies": []}"#, Path::new("package.json"))
            .unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }
}
