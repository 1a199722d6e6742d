//! Django descriptor
//!
//! A project is Django when it has `manage.py` and a `settings.py` somewhere.
//! Each app directory becomes its own report section, after the untitled
//! section for project-level files.

use crate::error::Result;
use crate::files::{any_path_contains, has_file_named, FileRecord};
use crate::framework::descriptor::{push_unique, FrameworkDescriptor};
use crate::framework::kind::Framework;
use crate::output::Bucket;
use crate::process::ClassifiedFile;

/// Django descriptor - apps are directories holding models/views/apps modules
pub struct DjangoDescriptor;

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
    "db.sqlite3",
    "db.sqlite",
    "*/migrations/",
    "*/migration/",
    "static/collected/",
    "static/admin/",
    "media/uploads/",
    "media/cache/",
    "celerybeat-schedule",
    "celerybeat.pid",
    "*.egg-info/",
    "dist/",
    "build/",
    ".coverage",
    "htmlcov/",
    ".pytest_cache/",
    ".mypy_cache/",
    ".tox/",
    "node_modules/",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
];

const PRIORITY_FILES: &[&str] = &[
    "manage.py",
    "requirements.txt",
    "settings.py",
    "urls.py",
    "wsgi.py",
    "asgi.py",
    "models.py",
    "views.py",
    "serializers.py",
    "admin.py",
    "apps.py",
    "forms.py",
];

const APP_MARKERS: &[&str] = &["/models.py", "/views.py", "/apps.py"];

impl FrameworkDescriptor for DjangoDescriptor {
    fn framework(&self) -> Framework {
        Framework::Django
    }

    fn detect(&self, files: &[FileRecord]) -> Result<bool> {
        Ok(has_file_named(files, "manage.py") && any_path_contains(files, "settings.py"))
    }

    fn exclude_patterns(&self) -> &'static [&'static str] {
        EXCLUDE_PATTERNS
    }

    fn priority_files(&self) -> &'static [&'static str] {
        PRIORITY_FILES
    }

    fn confidence_bonus(&self, files: &[FileRecord]) -> u32 {
        let mut bonus = 0;
        if has_file_named(files, "manage.py") {
            bonus += 20;
        }
        if any_path_contains(files, "settings.py") {
            bonus += 15;
        }
        if any_path_contains(files, "models.py") {
            bonus += 10;
        }
        if any_path_contains(files, "views.py") {
            bonus += 10;
        }
        bonus
    }

    fn detect_sub_units(&self, files: &[FileRecord]) -> Vec<String> {
        let mut apps = Vec::new();

        for file in files {
            let parts: Vec<&str> = file.path.split('/').collect();
            if parts.len() < 2 || !APP_MARKERS.iter().any(|m| file.path.contains(m)) {
                continue;
            }

            // Parent directory of the marker file, unless it is the project root
            let app_dir = parts[parts.len() - 2];
            if !app_dir.is_empty() && app_dir != parts[0] {
                push_unique(&mut apps, app_dir.to_string());
            }
        }

        apps
    }

    fn sub_unit_label(&self) -> &'static str {
        "Apps"
    }

    fn buckets(&self, sub_units: &[String]) -> Vec<Bucket> {
        let mut buckets = vec![Bucket::untitled()];
        buckets.extend(
            sub_units
                .iter()
                .map(|app| Bucket::titled(format!("{} APP", app.to_uppercase()))),
        );
        buckets
    }

    fn classify(&self, file: &ClassifiedFile, sub_units: &[String]) -> usize {
        file.sub_unit
            .as_ref()
            .and_then(|app| sub_units.iter().position(|a| a == app))
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<FileRecord> {
        paths.iter().map(|p| FileRecord::from_text(*p, "")).collect()
    }

    #[test]
    fn test_detect_requires_manage_and_settings() {
        let descriptor = DjangoDescriptor;
        assert!(descriptor
            .detect(&files(&["proj/manage.py", "proj/proj/settings.py"]))
            .unwrap());
        assert!(!descriptor.detect(&files(&["proj/manage.py"])).unwrap());
        assert!(!descriptor.detect(&files(&["proj/proj/settings.py"])).unwrap());
    }

    #[test]
    fn test_detect_apps() {
        let descriptor = DjangoDescriptor;
        let apps = descriptor.detect_sub_units(&files(&[
            "proj/manage.py",
            "proj/blog/models.py",
            "proj/blog/views.py",
            "proj/shop/apps.py",
            "proj/views.py",
            "proj/shop/utils.py",
        ]));
        assert_eq!(apps, vec!["blog".to_string(), "shop".to_string()]);
    }

    #[test]
    fn test_buckets_follow_apps() {
        let descriptor = DjangoDescriptor;
        let apps = vec!["blog".to_string()];
        let buckets = descriptor.buckets(&apps);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].heading, None);
        assert_eq!(buckets[1].heading.as_deref(), Some("BLOG APP"));
    }
}
