//! Directory scanning
//!
//! Enumerates a local project directory into `FileRecord`s the same way a
//! browser folder picker would: every path starts with the project's own
//! directory name and uses `/` separators. Content stays on disk until the
//! processor asks for it.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{EzcpError, Result};
use crate::files::FileRecord;

/// Name used as the root path segment and report title
pub fn project_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(|p| p.file_name())
        .or_else(|| root.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string())
}

/// Enumerate all regular files below `root`, sorted by path
pub fn scan_directory(root: &Path) -> Result<Vec<FileRecord>> {
    if !root.is_dir() {
        return Err(EzcpError::Other(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let name = project_name(root);
    let mut records = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let path = format!("{}/{}", name, segments.join("/"));

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        records.push(FileRecord::deferred(path, size, entry.path()));
    }

    tracing::info!("Scanned {} files under {}", records.len(), root.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_prefixes_root_name() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");
        std::fs::create_dir_all(root.join("orders")).unwrap();
        std::fs::write(root.join("manage.py"), "import django").unwrap();
        std::fs::write(root.join("orders/models.py"), "class Order: pass").unwrap();

        let records = scan_directory(&root).unwrap();
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["shop/manage.py", "shop/orders/models.py"]);
        assert_eq!(records[0].name, "manage.py");
        assert_eq!(records[0].size, 13);
        assert_eq!(records[1].read_text().unwrap(), "class Order: pass");
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("single.py");
        std::fs::write(&file, "").unwrap();
        assert!(scan_directory(&file).is_err());
    }
}
