//! Implements `ezcp detect`: ranked framework detection for a directory.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::analyze;
use crate::framework::FrameworkRegistry;

/// Options for the detect command
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Project directory
    pub root: PathBuf,
    /// Print the summary as JSON
    pub json: bool,
}

/// Execute the detect command
pub fn execute_detect(options: DetectOptions) -> Result<()> {
    let registry = FrameworkRegistry::global();
    let analysis = analyze(registry, &options.root)?;
    let summary = analysis.detection.summary();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.detected_frameworks.is_empty() {
        println!(
            "{} No supported framework detected in {} ({} files scanned)",
            style("✗").red(),
            options.root.display(),
            analysis.files.len()
        );
        return Ok(());
    }

    for (idx, framework) in summary.detected_frameworks.iter().enumerate() {
        let marker = if idx == 0 {
            style("✓").green()
        } else {
            style("→").cyan()
        };
        println!(
            "{} {} {} ({}% confidence)",
            marker,
            framework.icon,
            style(&framework.display_name).bold(),
            framework.confidence
        );
    }

    Ok(())
}
