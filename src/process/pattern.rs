//! Exclude patterns
//!
//! Deliberately not globs. Three forms exist:
//!
//! - `dir/` matches when the path contains `dir/` or `dir`
//! - anything with `*` becomes an unanchored regex (`*` = any run), tested
//!   against the path and the base name; no other character is special
//! - anything else is a substring of the path or equal to the base name

use regex::Regex;

use crate::error::{EzcpError, Result};

#[derive(Debug, Clone)]
pub enum ExcludePattern {
    Directory { with_slash: String, bare: String },
    Wildcard(Regex),
    Literal(String),
}

impl ExcludePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        if let Some(bare) = pattern.strip_suffix('/') {
            return Ok(ExcludePattern::Directory {
                with_slash: pattern.to_string(),
                bare: bare.to_string(),
            });
        }

        if pattern.contains('*') {
            let source = pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            let regex = Regex::new(&source).map_err(|source| EzcpError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            return Ok(ExcludePattern::Wildcard(regex));
        }

        Ok(ExcludePattern::Literal(pattern.to_string()))
    }

    /// Test a relative path and its base name
    pub fn matches(&self, path: &str, name: &str) -> bool {
        match self {
            ExcludePattern::Directory { with_slash, bare } => {
                path.contains(with_slash.as_str()) || path.contains(bare.as_str())
            }
            ExcludePattern::Wildcard(regex) => regex.is_match(path) || regex.is_match(name),
            ExcludePattern::Literal(literal) => path.contains(literal.as_str()) || name == literal,
        }
    }
}

/// Compiled, ordered set of exclude patterns
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<ExcludePattern>,
}

impl ExcludeSet {
    /// Compile patterns, dropping (and logging) any that fail to compile
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let patterns = patterns
            .into_iter()
            .filter_map(|p| match ExcludePattern::parse(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_excluded(&self, path: &str, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path, name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
