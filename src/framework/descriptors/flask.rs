//! Flask descriptor

use crate::error::Result;
use crate::files::{any_path_contains, has_file_named, FileRecord};
use crate::framework::descriptor::FrameworkDescriptor;
use crate::framework::kind::Framework;
use crate::output::Bucket;
use crate::process::ClassifiedFile;

/// Flask descriptor - no sub-units, grouped by file kind
pub struct FlaskDescriptor;

/// Python files inspected for a flask import
const IMPORT_SCAN_LIMIT: usize = 5;

const EXCLUDE_PATTERNS: &[&str] = &[
    "__pycache__/",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    ".Python",
    "venv/",
    ".venv/",
    "env/",
    ".env/",
    "ENV/",
    "env.bak/",
    "venv.bak/",
    "site-packages/",
    ".git/",
    ".gitignore",
    ".DS_Store",
    "*.log",
    "logs/",
    "instance/",
    ".coverage",
    "htmlcov/",
    ".pytest_cache/",
    ".mypy_cache/",
    ".tox/",
    "dist/",
    "build/",
    "*.egg-info/",
    "node_modules/",
    "npm-debug.log*",
];

const PRIORITY_FILES: &[&str] = &[
    "app.py",
    "main.py",
    "requirements.txt",
    "config.py",
    "run.py",
    "__init__.py",
    "models.py",
    "views.py",
    "routes.py",
    "forms.py",
];

fn has_entry_point(files: &[FileRecord]) -> bool {
    has_file_named(files, "app.py") || has_file_named(files, "main.py")
}

fn imports_flask(file: &FileRecord) -> bool {
    match file.read_text() {
        Ok(content) => content.contains("from flask") || content.contains("import flask"),
        Err(e) => {
            tracing::debug!("Skipping unreadable {} during flask scan: {}", file.path, e);
            false
        }
    }
}

impl FrameworkDescriptor for FlaskDescriptor {
    fn framework(&self) -> Framework {
        Framework::Flask
    }

    fn detect(&self, files: &[FileRecord]) -> Result<bool> {
        if !has_entry_point(files) || !has_file_named(files, "requirements.txt") {
            return Ok(false);
        }

        let found = files
            .iter()
            .filter(|f| f.name.ends_with(".py"))
            .take(IMPORT_SCAN_LIMIT)
            .any(imports_flask);
        Ok(found)
    }

    fn exclude_patterns(&self) -> &'static [&'static str] {
        EXCLUDE_PATTERNS
    }

    fn priority_files(&self) -> &'static [&'static str] {
        PRIORITY_FILES
    }

    fn confidence_bonus(&self, files: &[FileRecord]) -> u32 {
        let mut bonus = 0;
        if has_entry_point(files) {
            bonus += 20;
        }
        if any_path_contains(files, "requirements.txt") {
            bonus += 10;
        }
        bonus
    }

    fn buckets(&self, _sub_units: &[String]) -> Vec<Bucket> {
        vec![
            Bucket::titled("PYTHON FILES"),
            Bucket::titled("TEMPLATES"),
            Bucket::titled("OTHER FILES"),
        ]
    }

    fn classify(&self, file: &ClassifiedFile, _sub_units: &[String]) -> usize {
        if file.name.ends_with(".py") {
            0
        } else if file.relative_path.contains("templates/") {
            1
        } else {
            2
        }
    }
}
