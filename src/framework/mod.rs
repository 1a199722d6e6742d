//! Framework registry
//!
//! Every supported framework is described by a `FrameworkDescriptor`. The
//! registry keeps them in a fixed order, which decides precedence when more
//! than one framework could match:
//!
//! 1. Django
//! 2. Flask
//! 3. Next.js
//! 4. Expo
//!
//! `detect` is a first-match check. Ranked detection with confidence scores
//! lives in [`crate::detect`].

pub mod descriptor;
pub mod descriptors;
pub mod kind;
pub mod manifest;

use std::sync::OnceLock;

pub use descriptor::FrameworkDescriptor;
pub use kind::Framework;

use crate::files::FileRecord;
use descriptors::*;

/// Ordered collection of framework descriptors
pub struct FrameworkRegistry {
    descriptors: Vec<Box<dyn FrameworkDescriptor>>,
}

impl FrameworkRegistry {
    /// Create a registry with all built-in descriptors in precedence order
    pub fn new() -> Self {
        Self::with_descriptors(vec![
            Box::new(DjangoDescriptor),
            Box::new(FlaskDescriptor),
            Box::new(NextJsDescriptor),
            Box::new(ExpoDescriptor),
        ])
    }

    /// Create a registry from an explicit, ordered descriptor list
    pub fn with_descriptors(descriptors: Vec<Box<dyn FrameworkDescriptor>>) -> Self {
        Self { descriptors }
    }

    /// Shared registry of built-in descriptors
    pub fn global() -> &'static FrameworkRegistry {
        static REGISTRY: OnceLock<FrameworkRegistry> = OnceLock::new();
        REGISTRY.get_or_init(FrameworkRegistry::new)
    }

    /// Descriptors in registry order
    pub fn descriptors(&self) -> impl Iterator<Item = &dyn FrameworkDescriptor> {
        self.descriptors.iter().map(|d| d.as_ref())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// First descriptor, in registry order, whose detector matches.
    ///
    /// A detector that fails counts as not matching.
    pub fn detect(&self, files: &[FileRecord]) -> Option<&dyn FrameworkDescriptor> {
        self.descriptors().find(|descriptor| match descriptor.detect(files) {
            Ok(detected) => detected,
            Err(e) => {
                tracing::warn!("Error detecting {}: {}", descriptor.name(), e);
                false
            }
        })
    }

    /// Descriptor registered under exactly this key
    pub fn lookup(&self, name: &str) -> Option<&dyn FrameworkDescriptor> {
        self.descriptors().find(|d| d.name() == name)
    }

    /// Descriptor for a framework identity
    pub fn get(&self, framework: Framework) -> Option<&dyn FrameworkDescriptor> {
        self.descriptors().find(|d| d.framework() == framework)
    }
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
