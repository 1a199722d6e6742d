//! File processor
//!
//! Turns an enumerated file set into the ranked, classified list a user picks
//! from. Per file, in order, short-circuiting on the first rejection:
//!
//! 1. size above `max_file_size`
//! 2. any exclude pattern (descriptor, custom, test heuristics)
//! 3. not a text file
//! 4. unreadable content (logged, skipped)
//!
//! Survivors get a sub-unit and a priority tier and are sorted by tier, then
//! by relative path.

pub mod pattern;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::files::{is_text_file, FileRecord};
use crate::framework::FrameworkDescriptor;
use crate::selection::estimate_tokens;

pub use pattern::{ExcludePattern, ExcludeSet};

/// Default size ceiling: 1 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Heuristics that drop test code unless tests are included
pub const TEST_EXCLUDE_PATTERNS: &[&str] = &["*test*", "*spec*", "tests/", "test_*"];

/// Coarse importance of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file that survived processing, with its content and classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedFile {
    pub path: String,
    pub name: String,
    pub content: String,
    pub size: u64,
    pub is_directory: bool,
    pub relative_path: String,
    /// Whether the file goes into the report; owned by the caller after processing
    pub selected: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_unit: Option<String>,
}

impl ClassifiedFile {
    /// Content length in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Approximate token count (characters / 4, rounded up)
    pub fn estimated_tokens(&self) -> usize {
        estimate_tokens(self.char_count())
    }
}

/// Knobs for a processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingOptions {
    /// Keep files matching the test heuristics
    pub include_tests: bool,
    /// Extra exclude patterns, same syntax as the descriptor's
    pub custom_exclude_patterns: Vec<String>,
    /// Files larger than this many bytes are dropped
    pub max_file_size: u64,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            include_tests: false,
            custom_exclude_patterns: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ProcessingOptions {
    /// Descriptor patterns, then custom ones, then test heuristics if tests are off
    pub fn exclude_set(&self, descriptor: &dyn FrameworkDescriptor) -> ExcludeSet {
        let tests: &[&str] = if self.include_tests {
            &[]
        } else {
            TEST_EXCLUDE_PATTERNS
        };

        ExcludeSet::new(
            descriptor
                .exclude_patterns()
                .iter()
                .copied()
                .chain(self.custom_exclude_patterns.iter().map(String::as_str))
                .chain(tests.iter().copied()),
        )
    }
}

/// Filter, read, classify and sort a file set for one framework.
///
/// Content reads run in parallel; results are joined in input order before
/// sorting, so identical inputs always give identical output.
pub fn process_files(
    files: &[FileRecord],
    descriptor: &dyn FrameworkDescriptor,
    options: &ProcessingOptions,
) -> Vec<ClassifiedFile> {
    let excludes = options.exclude_set(descriptor);
    let sub_units = descriptor.detect_sub_units(files);
    let priority_files = descriptor.priority_files();

    let candidates: Vec<&FileRecord> = files
        .iter()
        .filter(|file| !file.is_directory)
        .filter(|file| {
            if file.size > options.max_file_size {
                tracing::debug!("Skipping {} ({} bytes over limit)", file.path, file.size);
                return false;
            }
            if excludes.is_excluded(&file.path, &file.name) {
                tracing::debug!("Excluding {}", file.path);
                return false;
            }
            is_text_file(&file.name)
        })
        .collect();

    let mut processed: Vec<ClassifiedFile> = candidates
        .par_iter()
        .map(|file| classify_file(file, &sub_units, priority_files))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    processed.sort_by(compare_files);

    tracing::info!(
        "Processed {} of {} files for {}",
        processed.len(),
        files.len(),
        descriptor.display_name()
    );

    processed
}

fn classify_file(
    file: &FileRecord,
    sub_units: &[String],
    priority_files: &[&str],
) -> Option<ClassifiedFile> {
    let content = match file.read_text() {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read file {}: {}", file.name, e);
            return None;
        }
    };

    let priority = file_priority(&file.name, &file.path, priority_files);

    Some(ClassifiedFile {
        path: file.path.clone(),
        name: file.name.clone(),
        content,
        size: file.size,
        is_directory: false,
        relative_path: file.path.clone(),
        selected: priority == Priority::High,
        priority,
        sub_unit: file_sub_unit(&file.path, sub_units),
    })
}

/// First sub-unit equal to one of the path's components
pub fn file_sub_unit(relative_path: &str, sub_units: &[String]) -> Option<String> {
    let parts: Vec<&str> = relative_path.split('/').collect();
    sub_units
        .iter()
        .find(|unit| parts.contains(&unit.as_str()))
        .cloned()
}

/// Priority tier from the base name and relative path
pub fn file_priority(name: &str, relative_path: &str, priority_files: &[&str]) -> Priority {
    if priority_files
        .iter()
        .any(|pf| name == *pf || relative_path.ends_with(pf))
    {
        return Priority::High;
    }

    if name.contains("test") || name.contains("spec") {
        return Priority::Low;
    }

    Priority::Medium
}

fn compare_files(a: &ClassifiedFile, b: &ClassifiedFile) -> std::cmp::Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.relative_path.cmp(&b.relative_path))
}
