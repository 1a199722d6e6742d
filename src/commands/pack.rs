//! Implements `ezcp pack`: detect, process and render the context report.
//!
//! The report goes to stdout unless `output` is set; progress and the summary
//! always go to stderr so the report can be piped.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};

use super::{analyze, resolve_descriptor};
use crate::framework::{FrameworkDescriptor, FrameworkRegistry};
use crate::output::format_thousands;
use crate::process::{process_files, ProcessingOptions};
use crate::scan::project_name;
use crate::selection::{apply_mode, selection_stats, SelectionMode};

/// Options for the pack command
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Project directory
    pub root: PathBuf,
    /// Use this framework instead of detecting one
    pub framework: Option<String>,
    pub processing: ProcessingOptions,
    pub selection: SelectionMode,
    /// Report file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Never prompt
    pub yes: bool,
}

/// Execute the pack command
pub fn execute_pack(options: PackOptions) -> Result<()> {
    let registry = FrameworkRegistry::global();

    let spinner = start_spinner("Scanning project...");
    let analysis = analyze(registry, &options.root)?;
    spinner.finish_and_clear();

    let detected = resolve_descriptor(registry, options.framework.as_deref(), &analysis.detection)?;
    let descriptor = match detected {
        Some(descriptor) => descriptor,
        None => choose_framework(registry, &options)?,
    };

    if options.framework.is_none() && analysis.detection.is_detected() {
        eprintln!(
            "{} Detected {} {} ({}% confidence)",
            style("✓").green(),
            descriptor.icon(),
            style(descriptor.display_name()).bold(),
            analysis.detection.confidence
        );
    }

    let spinner = start_spinner("Processing files...");
    let mut processed = process_files(&analysis.files, descriptor, &options.processing);
    apply_mode(&mut processed, options.selection);
    let sub_units = descriptor.detect_sub_units(&analysis.files);
    spinner.finish_and_clear();

    let report = descriptor.format(&project_name(&options.root), &processed, &sub_units);

    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &report)?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => print!("{}", report),
    }

    let stats = selection_stats(&processed);
    eprintln!(
        "  Files: {}/{} selected",
        stats.selected_files, stats.total_files
    );
    eprintln!("  Characters: {}", format_thousands(stats.selected_chars));
    eprintln!("  Estimated tokens: {}", format_thousands(stats.estimated_tokens));

    Ok(())
}

/// Ask the user for a framework when nothing was detected
fn choose_framework<'a>(
    registry: &'a FrameworkRegistry,
    options: &PackOptions,
) -> Result<&'a dyn FrameworkDescriptor> {
    if options.yes || !Term::stderr().is_term() {
        bail!(
            "No supported framework detected in {}; pass --framework",
            options.root.display()
        );
    }

    eprintln!(
        "{} No supported framework detected",
        style("✗").yellow()
    );

    let descriptors: Vec<&dyn FrameworkDescriptor> = registry.descriptors().collect();
    let items: Vec<String> = descriptors
        .iter()
        .map(|d| format!("{} {}", d.icon(), d.display_name()))
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a framework")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(descriptors[choice])
}

fn start_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
