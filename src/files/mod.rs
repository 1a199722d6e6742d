//! Project file records
//!
//! A `FileRecord` is one enumerated entry handed to the core by whatever
//! collects the project (the directory scanner, or a UI picker). Content is
//! either already in memory or deferred until `read_text` is called.

use std::path::PathBuf;

use crate::error::{EzcpError, Result};

/// Extensions treated as text (compared lower-cased, including the dot)
const TEXT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".jsx", ".tsx", ".html", ".css", ".scss", ".sass", ".json", ".xml",
    ".yml", ".yaml", ".md", ".txt", ".ini", ".cfg", ".conf", ".sql", ".sh", ".bat", ".ps1",
    ".php", ".rb", ".go", ".rs", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".vb", ".swift",
    ".kt", ".scala",
];

/// Where a record's content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileContent {
    /// Already decoded text
    Loaded(String),
    /// Read from this local path on demand
    Deferred(PathBuf),
}

/// A single enumerated project entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Relative path including the top-level directory segment, `/`-separated
    pub path: String,
    /// Base name (last path segment)
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub is_directory: bool,
    content: FileContent,
}

impl FileRecord {
    /// Create a record whose content is already in memory
    pub fn from_text(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let path = path.into();
        Self {
            name: base_name(&path).to_string(),
            size: text.len() as u64,
            is_directory: false,
            content: FileContent::Loaded(text),
            path,
        }
    }

    /// Create a record whose content is read from disk when needed
    pub fn deferred(path: impl Into<String>, size: u64, source: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: base_name(&path).to_string(),
            size,
            is_directory: false,
            content: FileContent::Deferred(source.into()),
            path,
        }
    }

    /// Override the reported byte size
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Read the content as text.
    ///
    /// Bytes are decoded as UTF-8 with replacement characters, so only I/O
    /// failures are reported.
    pub fn read_text(&self) -> Result<String> {
        match &self.content {
            FileContent::Loaded(text) => Ok(text.clone()),
            FileContent::Deferred(source) => std::fs::read(source)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| EzcpError::UnreadableFile {
                    path: self.path.clone(),
                    source,
                }),
        }
    }
}

/// Last `/`-separated segment of a path
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a file name looks like text: a known extension, or no extension at all
pub fn is_text_file(name: &str) -> bool {
    match name.rfind('.') {
        Some(idx) => {
            let ext = name[idx..].to_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        }
        None => true,
    }
}

/// Whether any record has exactly this base name
pub fn has_file_named(files: &[FileRecord], name: &str) -> bool {
    files.iter().any(|f| f.name == name)
}

/// Whether any record's relative path contains `needle`
pub fn any_path_contains(files: &[FileRecord], needle: &str) -> bool {
    files.iter().any(|f| f.path.contains(needle))
}

/// Shallowest record with this base name; ties go to the first one listed.
///
/// A project's own manifest sits above any vendored copy such as
/// `node_modules/x/package.json`, whatever the enumeration order.
pub fn find_by_name<'a>(files: &'a [FileRecord], name: &str) -> Option<&'a FileRecord> {
    files
        .iter()
        .filter(|f| f.name == name)
        .min_by_key(|f| f.path.matches('/').count())
}
