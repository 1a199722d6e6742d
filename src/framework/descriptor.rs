//! Framework descriptor trait
//!
//! One implementation per supported framework. The registry holds them in a
//! fixed order; nothing is loaded at runtime.

use std::fmt;

use super::kind::Framework;
use crate::error::Result;
use crate::files::FileRecord;
use crate::output::{render_report, Bucket, ReportHeader};
use crate::process::ClassifiedFile;

/// Per-framework detection, classification and formatting rules
pub trait FrameworkDescriptor: Send + Sync {
    /// Get the framework identifier
    fn framework(&self) -> Framework;

    /// Stable lookup key
    fn name(&self) -> &'static str {
        self.framework().name()
    }

    fn display_name(&self) -> &'static str {
        self.framework().display_name()
    }

    fn icon(&self) -> &'static str {
        self.framework().icon()
    }

    /// Decide whether the file set is a project of this framework
    fn detect(&self, files: &[FileRecord]) -> Result<bool>;

    /// Exclude patterns applied by the file processor
    fn exclude_patterns(&self) -> &'static [&'static str];

    /// File names (or path suffixes) ranked as high priority
    fn priority_files(&self) -> &'static [&'static str];

    /// Framework-specific confidence bonus on top of the shared base score
    fn confidence_bonus(&self, files: &[FileRecord]) -> u32;

    /// Discover named sub-units (apps, routes, screens) in detection order
    fn detect_sub_units(&self, files: &[FileRecord]) -> Vec<String> {
        let _ = files;
        Vec::new()
    }

    /// Label used for sub-units in report headers
    fn sub_unit_label(&self) -> &'static str {
        "Sub-units"
    }

    /// Report buckets in emission order
    fn buckets(&self, sub_units: &[String]) -> Vec<Bucket>;

    /// Index into `buckets(sub_units)` for a selected file
    fn classify(&self, file: &ClassifiedFile, sub_units: &[String]) -> usize;

    /// Render the report for the selected files
    fn format(&self, project_name: &str, files: &[ClassifiedFile], sub_units: &[String]) -> String {
        let header = ReportHeader {
            project_name,
            display_name: self.display_name(),
            sub_unit_label: self.sub_unit_label(),
            sub_units,
        };
        let buckets = self.buckets(sub_units);
        render_report(&header, files, &buckets, |file| self.classify(file, sub_units))
    }
}

impl fmt::Debug for dyn FrameworkDescriptor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameworkDescriptor({})", self.name())
    }
}

/// Strip a `.ts`, `.tsx`, `.js` or `.jsx` extension
pub(crate) fn strip_script_extension(name: &str) -> &str {
    for ext in [".tsx", ".ts", ".jsx", ".js"] {
        if let Some(stem) = name.strip_suffix(ext) {
            return stem;
        }
    }
    name
}

pub(crate) fn is_script_file(name: &str) -> bool {
    strip_script_extension(name).len() != name.len()
}

/// Append `label` unless it is already present
pub(crate) fn push_unique(labels: &mut Vec<String>, label: String) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}
