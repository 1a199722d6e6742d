//! Next.js descriptor
//!
//! Detected from a `next.config.*` file, or from a `package.json` listing
//! `next` next to an `app/` or `pages/` router directory.

use crate::error::Result;
use crate::files::{any_path_contains, has_file_named, FileRecord};
use crate::framework::descriptor::{push_unique, strip_script_extension, FrameworkDescriptor};
use crate::framework::kind::Framework;
use crate::framework::manifest::read_package_manifest;
use crate::output::Bucket;
use crate::process::ClassifiedFile;

/// Next.js descriptor - sub-units are app router, pages router and API routes
pub struct NextJsDescriptor;

const EXCLUDE_PATTERNS: &[&str] = &[
    ".next/",
    "node_modules/",
    ".git/",
    "dist/",
    "out/",
    "*.log",
    ".env*",
    "coverage/",
    ".nyc_output/",
    ".cache/",
    "build/",
    ".vercel/",
    ".netlify/",
    "*.tsbuildinfo",
    ".DS_Store",
    "Thumbs.db",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    // Test files
    "*.test.js",
    "*.test.ts",
    "*.test.tsx",
    "*.spec.js",
    "*.spec.ts",
    "*.spec.tsx",
    "__tests__/",
    // Tooling config
    "*.config.js",
    "*.config.ts",
    ".eslintrc*",
    ".prettierrc*",
    "babel.config.js",
    "jest.config.js",
    "jest.config.ts",
    // Generated
    "*.d.ts",
    // Lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    // Docs and meta
    "*.md",
    "README.md",
    "LICENSE",
    ".gitignore",
    ".dockerignore",
    // Storybook
    ".storybook/",
    "*.stories.*",
];

const PRIORITY_FILES: &[&str] = &[
    "next.config.js",
    "next.config.ts",
    "next.config.mjs",
    "package.json",
    "tailwind.config.js",
    "tailwind.config.ts",
    "tsconfig.json",
    "app/layout.tsx",
    "app/layout.js",
    "pages/_app.tsx",
    "pages/_app.js",
    "app/page.tsx",
    "app/page.js",
    "pages/index.tsx",
    "pages/index.js",
    "middleware.ts",
    "middleware.js",
];

const NEXT_CONFIG_FILES: &[&str] = &["next.config.js", "next.config.ts", "next.config.mjs"];

/// Pages router entries that are not routes of their own
const PAGES_NON_ROUTES: &[&str] = &["index.tsx", "index.js", "_app.tsx", "_app.js"];

const CONFIG: usize = 0;
const APP_ROUTER: usize = 1;
const PAGES_ROUTER: usize = 2;
const API_ROUTES: usize = 3;
const COMPONENTS: usize = 4;
const UTILITIES: usize = 5;
const STYLES: usize = 6;

fn lists_next(files: &[FileRecord]) -> bool {
    read_package_manifest(files)
        .map(|m| m.has_dependency("next") || m.has_dev_dependency("next"))
        .unwrap_or(false)
}

/// Text after the first occurrence of `marker`, up to the next occurrence
fn segment_after<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    path.split(marker).nth(1)
}

impl FrameworkDescriptor for NextJsDescriptor {
    fn framework(&self) -> Framework {
        Framework::NextJs
    }

    fn detect(&self, files: &[FileRecord]) -> Result<bool> {
        if NEXT_CONFIG_FILES.iter().any(|name| has_file_named(files, name)) {
            return Ok(true);
        }

        let has_router_dir = any_path_contains(files, "app/") || any_path_contains(files, "pages/");
        Ok(has_file_named(files, "package.json") && lists_next(files) && has_router_dir)
    }

    fn exclude_patterns(&self) -> &'static [&'static str] {
        EXCLUDE_PATTERNS
    }

    fn priority_files(&self) -> &'static [&'static str] {
        PRIORITY_FILES
    }

    fn confidence_bonus(&self, files: &[FileRecord]) -> u32 {
        let mut bonus = 0;
        if files.iter().any(|f| f.name.starts_with("next.config")) {
            bonus += 25;
        }
        if any_path_contains(files, "/app/") || any_path_contains(files, "/pages/") {
            bonus += 15;
        }
        if any_path_contains(files, "/api/") {
            bonus += 10;
        }
        if has_file_named(files, "package.json") && lists_next(files) {
            bonus += 20;
        }
        bonus
    }

    fn detect_sub_units(&self, files: &[FileRecord]) -> Vec<String> {
        let mut routes = Vec::new();

        for file in files {
            let path = file.path.as_str();

            if path.contains("/app/") && (path.ends_with("/page.tsx") || path.ends_with("/page.js")) {
                if let Some(rest) = segment_after(path, "/app/") {
                    let parts: Vec<&str> = rest.split('/').collect();
                    if parts.len() > 1 {
                        let route = parts[..parts.len() - 1].join("/");
                        push_unique(&mut routes, format!("app/{}", route));
                    }
                }
            }

            if path.contains("/pages/") && !path.contains("/api/") {
                if let Some(rest) = segment_after(path, "/pages/") {
                    if !rest.is_empty() && !PAGES_NON_ROUTES.contains(&rest) {
                        push_unique(&mut routes, format!("pages/{}", strip_script_extension(rest)));
                    }
                }
            }

            if path.contains("/api/") {
                if let Some(rest) = segment_after(path, "/api/") {
                    if !rest.is_empty() {
                        push_unique(&mut routes, format!("api/{}", strip_script_extension(rest)));
                    }
                }
            }
        }

        routes
    }

    fn sub_unit_label(&self) -> &'static str {
        "Routes"
    }

    fn buckets(&self, _sub_units: &[String]) -> Vec<Bucket> {
        vec![
            Bucket::titled("CONFIGURATION FILES"),
            Bucket::titled("APP ROUTER"),
            Bucket::titled("PAGES ROUTER"),
            Bucket::titled("API ROUTES"),
            Bucket::titled("COMPONENTS"),
            Bucket::titled("UTILITIES & LIBRARIES"),
            Bucket::titled("STYLES"),
        ]
    }

    fn classify(&self, file: &ClassifiedFile, _sub_units: &[String]) -> usize {
        let path = file.relative_path.to_lowercase();

        if ["next.config", "package.json", "tsconfig.json", "tailwind.config", ".env", "middleware"]
            .iter()
            .any(|marker| path.contains(marker))
        {
            CONFIG
        } else if path.contains("/app/") && !path.contains("/api/") {
            APP_ROUTER
        } else if path.contains("/pages/") && !path.contains("/api/") {
            PAGES_ROUTER
        } else if path.contains("/api/") {
            API_ROUTES
        } else if path.contains("component") || path.contains("/ui/") || path.contains("/shared/") {
            COMPONENTS
        } else if path.ends_with(".css")
            || path.ends_with(".scss")
            || path.ends_with(".sass")
            || path.contains("style")
        {
            STYLES
        } else {
            UTILITIES
        }
    }
}
