//! Context report rendering
//!
//! Shared by every framework: header, structure tree, then selected files
//! partitioned into the framework's ordered buckets. Only the bucket layout
//! and the classifier differ between frameworks.

use super::tree::render_tree;
use crate::process::ClassifiedFile;
use crate::selection::selected_files;

/// One named group of files in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Printed as `--- HEADING ---` before the files; `None` prints nothing
    pub heading: Option<String>,
}

impl Bucket {
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
        }
    }

    pub fn untitled() -> Self {
        Self { heading: None }
    }
}

/// Values printed in the report header
#[derive(Debug, Clone, Copy)]
pub struct ReportHeader<'a> {
    pub project_name: &'a str,
    pub display_name: &'a str,
    pub sub_unit_label: &'a str,
    pub sub_units: &'a [String],
}

/// Render the report for the selected files.
///
/// `classify` maps a file to an index into `buckets`; out-of-range indexes
/// fall into the last bucket. Empty buckets are skipped.
pub fn render_report<F>(
    header: &ReportHeader<'_>,
    files: &[ClassifiedFile],
    buckets: &[Bucket],
    classify: F,
) -> String
where
    F: Fn(&ClassifiedFile) -> usize,
{
    let selected: Vec<&ClassifiedFile> = selected_files(files).collect();
    let total_chars: usize = selected.iter().map(|f| f.char_count()).sum();

    let mut output = format!(
        "=== {} PROJECT: {} ===\n",
        header.display_name.to_uppercase(),
        header.project_name
    );
    output.push_str(&format!("Framework: {}\n", header.display_name));
    if !header.sub_units.is_empty() {
        output.push_str(&format!(
            "{} detected: {}\n",
            header.sub_unit_label,
            header.sub_units.join(", ")
        ));
    }
    output.push_str(&format!("Selected files: {}\n", selected.len()));
    output.push_str(&format!("Total characters: {}\n\n", format_thousands(total_chars)));

    output.push_str("=== PROJECT STRUCTURE ===\n");
    output.push_str(&render_tree(selected.iter().map(|f| f.relative_path.as_str())));
    output.push_str("\n=== FILE CONTENTS ===\n\n");

    if buckets.is_empty() {
        return output;
    }

    let mut grouped: Vec<Vec<&ClassifiedFile>> = vec![Vec::new(); buckets.len()];
    for &file in &selected {
        let idx = classify(file).min(buckets.len() - 1);
        grouped[idx].push(file);
    }

    for (bucket, files) in buckets.iter().zip(&grouped) {
        if files.is_empty() {
            continue;
        }
        if let Some(heading) = &bucket.heading {
            output.push_str(&format!("--- {} ---\n\n", heading));
        }
        for file in files {
            output.push_str(&format!("--- {} ---\n", file.relative_path));
            output.push_str(&file.content);
            output.push_str("\n\n");
        }
    }

    output
}

/// Format an integer with `,` thousands separators
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}
