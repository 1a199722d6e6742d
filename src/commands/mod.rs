//! CLI command implementations
//!
//! Each command is in its own submodule and takes an options struct built
//! by `main`.

pub mod detect;
pub mod files;
pub mod frameworks;
pub mod pack;

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::detect::{detect_with_confidence, DetectionResult};
use crate::error::EzcpError;
use crate::files::FileRecord;
use crate::framework::{Framework, FrameworkDescriptor, FrameworkRegistry};
use crate::scan::scan_directory;

pub use detect::{execute_detect, DetectOptions};
pub use files::{execute_files, FilesOptions};
pub use frameworks::execute_frameworks;
pub use pack::{execute_pack, PackOptions};

/// Scanned project plus its detection outcome
pub(crate) struct Analysis<'a> {
    pub files: Vec<FileRecord>,
    pub detection: DetectionResult<'a>,
}

pub(crate) fn analyze<'a>(registry: &'a FrameworkRegistry, root: &Path) -> Result<Analysis<'a>> {
    let files = scan_directory(root)?;
    let detection = detect_with_confidence(registry, &files);
    Ok(Analysis { files, detection })
}

/// Forced framework if one was named, else the best detected match
pub(crate) fn resolve_descriptor<'a>(
    registry: &'a FrameworkRegistry,
    forced: Option<&str>,
    detection: &DetectionResult<'a>,
) -> Result<Option<&'a dyn FrameworkDescriptor>> {
    match forced {
        Some(name) => {
            let descriptor = match Framework::from_name(name) {
                Some(framework) => registry.get(framework),
                None => registry.lookup(name),
            };
            descriptor
                .map(Some)
                .ok_or_else(|| anyhow!(EzcpError::UnknownFramework(name.to_string())))
        }
        None => Ok(detection.framework),
    }
}
