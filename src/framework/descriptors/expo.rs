//! Expo descriptor
//!
//! `expo.json` is conclusive on its own. Otherwise an `app.json` carrying an
//! `expo` or `name` key counts, as does an `App.*` entry whose `package.json`
//! depends on `expo` or an `@expo/` package.

use crate::error::Result;
use crate::files::{any_path_contains, has_file_named, FileRecord};
use crate::framework::descriptor::{
    is_script_file, push_unique, strip_script_extension, FrameworkDescriptor,
};
use crate::framework::kind::Framework;
use crate::framework::manifest::{app_json_has_expo_config, read_package_manifest};
use crate::output::Bucket;
use crate::process::ClassifiedFile;

/// Expo descriptor - sub-units are screens, navigators and components
pub struct ExpoDescriptor;

const EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules/",
    ".expo/",
    "dist/",
    "web-build/",
    ".git/",
    "*.log",
    ".env*",
    "coverage/",
    "ios/",
    "android/",
    ".DS_Store",
    "Thumbs.db",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    ".vscode/",
    ".idea/",
    "*.tsbuildinfo",
    ".expo-shared/",
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
    "tsconfig.json",
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
    "expo.json",
    "app.json",
    "App.js",
    "App.tsx",
    "App.jsx",
    "package.json",
    "babel.config.js",
    "metro.config.js",
    "eas.json",
];

const APP_ENTRIES: &[&str] = &["App.js", "App.tsx", "App.jsx"];

const CONFIG_NAMES: &[&str] = &[
    "expo.json",
    "app.json",
    "package.json",
    "babel.config.js",
    "metro.config.js",
];

impl FrameworkDescriptor for ExpoDescriptor {
    fn framework(&self) -> Framework {
        Framework::Expo
    }

    fn detect(&self, files: &[FileRecord]) -> Result<bool> {
        if has_file_named(files, "expo.json") {
            return Ok(true);
        }
        if has_file_named(files, "app.json") && app_json_has_expo_config(files) {
            return Ok(true);
        }

        let has_entry = APP_ENTRIES.iter().any(|name| has_file_named(files, name));
        if !has_entry || !has_file_named(files, "package.json") {
            return Ok(false);
        }

        let depends_on_expo = read_package_manifest(files)
            .map(|m| {
                m.has_dependency("expo")
                    || m.has_dev_dependency("expo")
                    || m.has_dependency_prefix("@expo/")
                    || m.has_dev_dependency_prefix("@expo/")
            })
            .unwrap_or(false);
        Ok(depends_on_expo)
    }

    fn exclude_patterns(&self) -> &'static [&'static str] {
        EXCLUDE_PATTERNS
    }

    fn priority_files(&self) -> &'static [&'static str] {
        PRIORITY_FILES
    }

    fn confidence_bonus(&self, files: &[FileRecord]) -> u32 {
        let mut bonus = 0;
        if has_file_named(files, "expo.json") {
            bonus += 25;
        }
        if has_file_named(files, "app.json") {
            bonus += 15;
        }
        if has_file_named(files, "App.js") || has_file_named(files, "App.tsx") {
            bonus += 20;
        }
        if any_path_contains(files, "/screens/") {
            bonus += 10;
        }
        if has_file_named(files, "package.json") {
            let runtime_dep = read_package_manifest(files)
                .map(|m| m.has_dependency("expo") || m.has_dependency_prefix("@expo/"))
                .unwrap_or(false);
            if runtime_dep {
                bonus += 20;
            }
        }
        bonus
    }

    fn detect_sub_units(&self, files: &[FileRecord]) -> Vec<String> {
        let mut screens = Vec::new();

        for file in files.iter().filter(|f| is_script_file(&f.name)) {
            let path = file.path.as_str();
            let stem = strip_script_extension(&file.name);

            if path.contains("/screens/") || path.contains("/Screens/") {
                push_unique(&mut screens, format!("screens/{}", stem));
            }
            if path.contains("navigation") || path.contains("Navigation") {
                push_unique(&mut screens, format!("navigation/{}", stem));
            }
            if path.contains("/components/") || path.contains("/Components/") {
                push_unique(&mut screens, format!("components/{}", stem));
            }
        }

        screens
    }

    fn sub_unit_label(&self) -> &'static str {
        "Screens"
    }

    fn buckets(&self, _sub_units: &[String]) -> Vec<Bucket> {
        vec![
            Bucket::titled("CONFIGURATION FILES"),
            Bucket::titled("MAIN APP ENTRY"),
            Bucket::titled("SCREENS"),
            Bucket::titled("NAVIGATION"),
            Bucket::titled("COMPONENTS"),
            Bucket::titled("ASSETS & CONSTANTS"),
            Bucket::titled("SERVICES & API"),
            Bucket::titled("UTILITIES"),
        ]
    }

    fn classify(&self, file: &ClassifiedFile, _sub_units: &[String]) -> usize {
        let path = file.relative_path.to_lowercase();
        let name = file.name.to_lowercase();
        let path_has = |needles: &[&str]| needles.iter().any(|n| path.contains(n));
        let name_has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

        if CONFIG_NAMES.contains(&name.as_str()) || path.contains("eas.json") {
            0
        } else if ["app.js", "app.tsx", "app.jsx"].contains(&name.as_str()) {
            1
        } else if path_has(&["/screens/", "/screen/"]) {
            2
        } else if path_has(&["navigation", "navigator"]) {
            3
        } else if path_has(&["/components/", "/component/"]) {
            4
        } else if path_has(&["/assets/", "/constants/", "/constant/"])
            || name_has(&["constant", "theme", "color"])
        {
            5
        } else if path_has(&["/services/", "/service/", "/api/", "/apis/"])
            || name_has(&["api", "service"])
        {
            6
        } else {
            7
        }
    }
}
