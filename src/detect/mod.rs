//! Detection engine
//!
//! Runs every registered detector, scores each positive match and ranks them.
//!
//! Score for a match:
//! - 30 base
//! - +15 per priority file found (exact base name, or substring of a path)
//! - + the descriptor's own bonus for strong framework-specific signals
//! - clamped to 100
//!
//! Manifest reads behind the bonuses finish before anything is sorted.
//! Ties keep registry order.

use serde::Serialize;

use crate::files::FileRecord;
use crate::framework::{FrameworkDescriptor, FrameworkRegistry};

/// Score every match starts from
pub const BASE_CONFIDENCE: u32 = 30;

/// Added for each priority file present
pub const PRIORITY_FILE_WEIGHT: u32 = 15;

pub const MAX_CONFIDENCE: u32 = 100;

/// A matched framework and how sure we are about it
#[derive(Debug, Clone, Copy)]
pub struct RankedFramework<'a> {
    pub descriptor: &'a dyn FrameworkDescriptor,
    pub confidence: u8,
}

/// Outcome of a ranked detection run
#[derive(Debug, Clone)]
pub struct DetectionResult<'a> {
    /// Highest-confidence match, if any
    pub framework: Option<&'a dyn FrameworkDescriptor>,
    /// Confidence of `framework`, 0 when nothing matched
    pub confidence: u8,
    /// Every match, best first
    pub detected_frameworks: Vec<RankedFramework<'a>>,
}

impl<'a> DetectionResult<'a> {
    /// Result for a file set nothing recognised
    pub fn empty() -> Self {
        Self {
            framework: None,
            confidence: 0,
            detected_frameworks: Vec::new(),
        }
    }

    pub fn is_detected(&self) -> bool {
        self.framework.is_some()
    }

    /// Serializable view for JSON output
    pub fn summary(&self) -> DetectionSummary {
        DetectionSummary {
            framework: self.framework.map(|d| d.name().to_string()),
            confidence: self.confidence,
            detected_frameworks: self
                .detected_frameworks
                .iter()
                .map(|r| DetectedFramework {
                    name: r.descriptor.name().to_string(),
                    display_name: r.descriptor.display_name().to_string(),
                    icon: r.descriptor.icon().to_string(),
                    route: r.descriptor.framework().route().to_string(),
                    confidence: r.confidence,
                })
                .collect(),
        }
    }
}

/// Owned, serializable detection outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionSummary {
    pub framework: Option<String>,
    pub confidence: u8,
    pub detected_frameworks: Vec<DetectedFramework>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFramework {
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub route: String,
    pub confidence: u8,
}

/// Detect the best-matching framework with a confidence score.
///
/// A detector that fails is logged and skipped; the others still run.
pub fn detect_with_confidence<'a>(
    registry: &'a FrameworkRegistry,
    files: &[FileRecord],
) -> DetectionResult<'a> {
    let mut ranked: Vec<RankedFramework<'a>> = Vec::new();

    for descriptor in registry.descriptors() {
        match descriptor.detect(files) {
            Ok(true) => {
                let confidence = calculate_confidence(descriptor, files);
                tracing::debug!("Detected {} with confidence {}", descriptor.name(), confidence);
                ranked.push(RankedFramework {
                    descriptor,
                    confidence,
                });
            }
            Ok(false) => {}
            Err(e) => tracing::warn!("Error detecting {}: {}", descriptor.name(), e),
        }
    }

    // Stable sort keeps registry order for equal scores
    ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    match ranked.first().copied() {
        Some(best) => DetectionResult {
            framework: Some(best.descriptor),
            confidence: best.confidence,
            detected_frameworks: ranked,
        },
        None => DetectionResult::empty(),
    }
}

/// Confidence that `files` belongs to `descriptor`'s framework, in 0..=100
pub fn calculate_confidence(descriptor: &dyn FrameworkDescriptor, files: &[FileRecord]) -> u8 {
    let found = descriptor
        .priority_files()
        .iter()
        .filter(|pf| files.iter().any(|f| f.name == **pf || f.path.contains(**pf)))
        .count() as u32;

    let score = BASE_CONFIDENCE + found * PRIORITY_FILE_WEIGHT + descriptor.confidence_bonus(files);
    score.min(MAX_CONFIDENCE) as u8
}
