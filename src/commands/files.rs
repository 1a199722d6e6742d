//! Implements `ezcp files`: show the ranked file list for a project.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

use super::{analyze, resolve_descriptor};
use crate::framework::FrameworkRegistry;
use crate::process::{process_files, ClassifiedFile, Priority, ProcessingOptions};
use crate::selection::{apply_mode, selection_stats, SelectionMode};

/// Options for the files command
#[derive(Debug, Clone)]
pub struct FilesOptions {
    /// Project directory
    pub root: PathBuf,
    /// Use this framework instead of detecting one
    pub framework: Option<String>,
    pub processing: ProcessingOptions,
    pub selection: SelectionMode,
    /// Print the listing as JSON
    pub json: bool,
}

/// One row of the listing, without file content
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileListing<'a> {
    path: &'a str,
    priority: Priority,
    size: u64,
    estimated_tokens: usize,
    selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_unit: Option<&'a str>,
}

impl<'a> From<&'a ClassifiedFile> for FileListing<'a> {
    fn from(file: &'a ClassifiedFile) -> Self {
        Self {
            path: &file.relative_path,
            priority: file.priority,
            size: file.size,
            estimated_tokens: file.estimated_tokens(),
            selected: file.selected,
            sub_unit: file.sub_unit.as_deref(),
        }
    }
}

/// Execute the files command
pub fn execute_files(options: FilesOptions) -> Result<()> {
    let registry = FrameworkRegistry::global();
    let analysis = analyze(registry, &options.root)?;

    let Some(descriptor) =
        resolve_descriptor(registry, options.framework.as_deref(), &analysis.detection)?
    else {
        bail!(
            "No supported framework detected in {}; pass --framework",
            options.root.display()
        );
    };

    let mut processed = process_files(&analysis.files, descriptor, &options.processing);
    apply_mode(&mut processed, options.selection);

    if options.json {
        let listing: Vec<FileListing> = processed.iter().map(FileListing::from).collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        style("→").cyan(),
        descriptor.icon(),
        style(descriptor.display_name()).bold()
    );
    for file in &processed {
        let mark = if file.selected { "[x]" } else { "[ ]" };
        let priority = match file.priority {
            Priority::High => style(file.priority.as_str()).green(),
            Priority::Medium => style(file.priority.as_str()).yellow(),
            Priority::Low => style(file.priority.as_str()).dim(),
        };
        println!(
            "  {} {:<6} {} ({} tokens)",
            mark,
            priority,
            file.relative_path,
            file.estimated_tokens()
        );
    }

    let stats = selection_stats(&processed);
    println!();
    println!(
        "  Selected: {}/{} files, {} chars, ~{} tokens",
        stats.selected_files, stats.total_files, stats.selected_chars, stats.estimated_tokens
    );

    Ok(())
}
