//! Supported framework identities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frameworks ezcp knows how to detect and pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Django,
    Flask,
    NextJs,
    Expo,
}

impl Framework {
    /// All frameworks in registry order
    pub fn all() -> &'static [Framework] {
        &[
            Framework::Django,
            Framework::Flask,
            Framework::NextJs,
            Framework::Expo,
        ]
    }

    /// Stable lookup key
    pub fn name(&self) -> &'static str {
        match self {
            Framework::Django => "django",
            Framework::Flask => "flask",
            Framework::NextJs => "nextjs",
            Framework::Expo => "expo",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Django => "Django",
            Framework::Flask => "Flask",
            Framework::NextJs => "Next.js",
            Framework::Expo => "Expo",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Framework::Django => "🎯",
            Framework::Flask => "🌶️",
            Framework::NextJs => "⚡",
            Framework::Expo => "📱",
        }
    }

    /// UI route a front end navigates to once this framework is chosen
    pub fn route(&self) -> &'static str {
        match self {
            Framework::Django => "/python/django",
            Framework::Flask => "/python/flask",
            Framework::NextJs => "/javascript/nextjs",
            Framework::Expo => "/javascript/expo",
        }
    }

    /// Parse framework name from string
    pub fn from_name(name: &str) -> Option<Framework> {
        match name.to_lowercase().as_str() {
            "django" => Some(Framework::Django),
            "flask" => Some(Framework::Flask),
            "nextjs" | "next" | "next.js" => Some(Framework::NextJs),
            "expo" => Some(Framework::Expo),
            _ => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
