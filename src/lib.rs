#![forbid(unsafe_code)]

//! # ezcp - Framework-aware context packing
//!
//! Detects which web or mobile framework a project uses, filters and ranks
//! its files, and renders the selected ones into a single plain-text report
//! for pasting into an AI assistant.
//!
//! ## Features
//!
//! - **Detection**: Django, Flask, Next.js and Expo, ranked by confidence
//! - **Filtering**: framework exclude lists, test heuristics, size limits
//! - **Ranking**: high/medium/low priority tiers per framework
//! - **Reports**: directory tree plus contents grouped per framework
//!
//! ## Example
//!
//! ```rust,no_run
//! use ezcp::{detect_with_confidence, process_files, scan_directory};
//! use ezcp::{FrameworkRegistry, ProcessingOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let files = scan_directory(std::path::Path::new("."))?;
//!     let registry = FrameworkRegistry::global();
//!
//!     let detection = detect_with_confidence(registry, &files);
//!     if let Some(descriptor) = detection.framework {
//!         let processed = process_files(&files, descriptor, &ProcessingOptions::default());
//!         let sub_units = descriptor.detect_sub_units(&files);
//!         print!("{}", descriptor.format("my-project", &processed, &sub_units));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod files;
pub mod framework;
pub mod output;
pub mod process;
pub mod scan;
pub mod selection;

// Re-exports
pub use config::Config;
pub use detect::{detect_with_confidence, DetectionResult, DetectionSummary, RankedFramework};
pub use error::{EzcpError, Result};
pub use files::FileRecord;
pub use framework::{Framework, FrameworkDescriptor, FrameworkRegistry};
pub use process::{process_files, ClassifiedFile, Priority, ProcessingOptions};
pub use scan::{project_name, scan_directory};
pub use selection::{SelectionMode, SelectionStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
