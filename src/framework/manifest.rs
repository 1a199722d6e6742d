//! Package manifest inspection
//!
//! Detectors and confidence scoring peek into `package.json` and `app.json`.
//! A manifest that cannot be read or parsed is logged and treated as absent.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::files::{find_by_name, FileRecord};

/// The parts of `package.json` that matter for detection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<Map<String, Value>>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<Map<String, Value>>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Whether `name` is listed with a non-empty version in `dependencies`
    pub fn has_dependency(&self, name: &str) -> bool {
        listed(self.dependencies.as_ref(), name)
    }

    /// Whether `name` is listed with a non-empty version in `devDependencies`
    pub fn has_dev_dependency(&self, name: &str) -> bool {
        listed(self.dev_dependencies.as_ref(), name)
    }

    /// Whether `dependencies` has any key starting with `prefix`
    pub fn has_dependency_prefix(&self, prefix: &str) -> bool {
        has_prefix(self.dependencies.as_ref(), prefix)
    }

    /// Whether `devDependencies` has any key starting with `prefix`
    pub fn has_dev_dependency_prefix(&self, prefix: &str) -> bool {
        has_prefix(self.dev_dependencies.as_ref(), prefix)
    }
}

fn listed(table: Option<&Map<String, Value>>, name: &str) -> bool {
    table
        .and_then(|t| t.get(name))
        .map(is_truthy)
        .unwrap_or(false)
}

fn has_prefix(table: Option<&Map<String, Value>>, prefix: &str) -> bool {
    table
        .map(|t| t.keys().any(|k| k.starts_with(prefix)))
        .unwrap_or(false)
}

/// Loose truthiness for manifest values (`""`, `false`, `0`, `null` are absent)
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read and parse the shallowest `package.json` in the file set
pub fn read_package_manifest(files: &[FileRecord]) -> Option<PackageManifest> {
    let content = read_manifest_text(files, "package.json")?;
    match PackageManifest::parse(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::warn!("Ignoring malformed package.json: {}", e);
            None
        }
    }
}

/// Whether the shallowest `app.json` carries an `expo` block or an app `name`
pub fn app_json_has_expo_config(files: &[FileRecord]) -> bool {
    let Some(content) = read_manifest_text(files, "app.json") else {
        return false;
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(data) => {
            let field = |key: &str| data.get(key).map(is_truthy).unwrap_or(false);
            field("expo") || field("name")
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed app.json: {}", e);
            false
        }
    }
}

fn read_manifest_text(files: &[FileRecord], name: &str) -> Option<String> {
    let file = find_by_name(files, name)?;
    match file.read_text() {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", file.path, e);
            None
        }
    }
}
