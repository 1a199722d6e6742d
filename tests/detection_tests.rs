//! Integration tests for ranked framework detection

use ezcp::framework::descriptors::{DjangoDescriptor, ExpoDescriptor, NextJsDescriptor};
use ezcp::output::Bucket;
use ezcp::{
    detect_with_confidence, scan_directory, ClassifiedFile, EzcpError, FileRecord, Framework,
    FrameworkDescriptor, FrameworkRegistry,
};
use pretty_assertions::assert_eq;

fn records(paths: &[&str]) -> Vec<FileRecord> {
    paths.iter().map(|p| FileRecord::from_text(*p, "")).collect()
}

/// Descriptor with a canned detection outcome
struct Canned {
    framework: Framework,
    fails: bool,
    bonus: u32,
}

impl FrameworkDescriptor for Canned {
    fn framework(&self) -> Framework {
        self.framework
    }

    fn detect(&self, _files: &[FileRecord]) -> ezcp::Result<bool> {
        if self.fails {
            return Err(EzcpError::Other("detector blew up".to_string()));
        }
        Ok(true)
    }

    fn exclude_patterns(&self) -> &'static [&'static str] {
        &[]
    }

    fn priority_files(&self) -> &'static [&'static str] {
        &[]
    }

    fn confidence_bonus(&self, _files: &[FileRecord]) -> u32 {
        self.bonus
    }

    fn buckets(&self, _sub_units: &[String]) -> Vec<Bucket> {
        vec![Bucket::untitled()]
    }

    fn classify(&self, _file: &ClassifiedFile, _sub_units: &[String]) -> usize {
        0
    }
}

#[test]
fn test_django_project_scores_high() {
    let registry = FrameworkRegistry::with_descriptors(vec![Box::new(DjangoDescriptor)]);
    let files = records(&["proj/manage.py", "proj/app/settings.py"]);

    let result = detect_with_confidence(&registry, &files);

    assert_eq!(result.framework.map(|d| d.name()), Some("django"));
    assert!(result.confidence >= 80);
    // 30 base + 2 priority files + manage.py and settings.py bonuses
    assert_eq!(result.confidence, 95);
    assert_eq!(result.detected_frameworks.len(), 1);
}

#[test]
fn test_no_markers_detects_nothing() {
    let files = records(&["notes/todo.txt", "notes/ideas.md"]);
    let result = detect_with_confidence(FrameworkRegistry::global(), &files);

    assert!(result.framework.is_none());
    assert_eq!(result.confidence, 0);
    assert!(result.detected_frameworks.is_empty());
    assert_eq!(
        serde_json::to_value(result.summary()).unwrap(),
        serde_json::json!({
            "framework": null,
            "confidence": 0,
            "detectedFrameworks": []
        })
    );
}

#[test]
fn test_failing_detector_is_skipped() {
    let registry = FrameworkRegistry::with_descriptors(vec![
        Box::new(Canned {
            framework: Framework::Django,
            fails: true,
            bonus: 50,
        }),
        Box::new(Canned {
            framework: Framework::Flask,
            fails: false,
            bonus: 10,
        }),
    ]);

    let result = detect_with_confidence(&registry, &records(&["x/app.py"]));

    assert_eq!(result.framework.map(|d| d.name()), Some("flask"));
    assert_eq!(result.confidence, 40);
    assert_eq!(result.detected_frameworks.len(), 1);
}

#[test]
fn test_ties_keep_registry_order() {
    let registry = FrameworkRegistry::with_descriptors(vec![
        Box::new(Canned {
            framework: Framework::Expo,
            fails: false,
            bonus: 0,
        }),
        Box::new(Canned {
            framework: Framework::Flask,
            fails: false,
            bonus: 0,
        }),
    ]);

    let result = detect_with_confidence(&registry, &[]);
    let names: Vec<&str> = result
        .detected_frameworks
        .iter()
        .map(|r| r.descriptor.name())
        .collect();

    assert_eq!(names, vec!["expo", "flask"]);
    assert_eq!(result.framework.map(|d| d.name()), Some("expo"));
    assert_eq!(result.confidence, 30);
}

#[test]
fn test_ranking_is_descending() {
    let registry = FrameworkRegistry::with_descriptors(vec![
        Box::new(Canned {
            framework: Framework::Django,
            fails: false,
            bonus: 5,
        }),
        Box::new(Canned {
            framework: Framework::Expo,
            fails: false,
            bonus: 40,
        }),
    ]);

    let result = detect_with_confidence(&registry, &[]);
    let scores: Vec<u8> = result.detected_frameworks.iter().map(|r| r.confidence).collect();

    assert_eq!(scores, vec![70, 35]);
    assert_eq!(result.framework.map(|d| d.name()), Some("expo"));
}

#[test]
fn test_nextjs_manifest_bonus_applied() {
    let registry = FrameworkRegistry::with_descriptors(vec![Box::new(NextJsDescriptor)]);
    let files = vec![
        FileRecord::from_text("web/package.json", r#"{"dependencies": {"next": "14.1.0"}}"#),
        FileRecord::from_text("web/pages/index.tsx", "export default function Home() {}"),
    ];

    let result = detect_with_confidence(&registry, &files);

    // 30 base + package.json + pages/index.tsx, +15 router dir, +20 manifest
    assert_eq!(result.framework.map(|d| d.name()), Some("nextjs"));
    assert_eq!(result.confidence, 95);
}

#[test]
fn test_malformed_manifest_is_tolerated() {
    let registry = FrameworkRegistry::with_descriptors(vec![Box::new(NextJsDescriptor)]);
    let files = vec![
        FileRecord::from_text("web/next.config.js", "module.exports = {}"),
        FileRecord::from_text("web/package.json", "{ not json"),
    ];

    let result = detect_with_confidence(&registry, &files);

    // Detected through next.config.js; the manifest bonus is simply absent
    assert_eq!(result.framework.map(|d| d.name()), Some("nextjs"));
    assert_eq!(result.confidence, 85);
}

#[test]
fn test_manifest_without_next_is_not_nextjs() {
    let files = vec![
        FileRecord::from_text("web/package.json", r#"{"dependencies": {"react": "18"}}"#),
        FileRecord::from_text("web/pages/index.tsx", ""),
    ];
    let result = detect_with_confidence(FrameworkRegistry::global(), &files);
    assert!(!result.is_detected());
}

#[test]
fn test_global_registry_prefers_django() {
    let files = vec![
        FileRecord::from_text("proj/manage.py", ""),
        FileRecord::from_text("proj/proj/settings.py", ""),
        FileRecord::from_text("proj/blog/models.py", ""),
        FileRecord::from_text("proj/blog/views.py", ""),
        FileRecord::from_text("proj/requirements.txt", "django"),
    ];

    let result = detect_with_confidence(FrameworkRegistry::global(), &files);
    assert_eq!(result.framework.map(|d| d.framework()), Some(Framework::Django));
    assert_eq!(result.confidence, 100);
}

#[test]
fn test_scanned_project_manifest_wins_over_node_modules() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path().join("web");
    std::fs::create_dir_all(root.join("node_modules/react")).unwrap();
    std::fs::create_dir_all(root.join("pages")).unwrap();
    std::fs::write(
        root.join("node_modules/react/package.json"),
        r#"{"name": "react", "dependencies": {"loose-envify": "^1.1.0"}}"#,
    )
    .unwrap();
    std::fs::write(root.join("package.json"), r#"{"dependencies": {"next": "14.1.0"}}"#).unwrap();
    std::fs::write(root.join("pages/index.tsx"), "export default function Home() {}").unwrap();

    let files = scan_directory(&root).unwrap();
    assert_eq!(files[0].path, "web/node_modules/react/package.json");

    let result = detect_with_confidence(FrameworkRegistry::global(), &files);
    assert_eq!(result.framework.map(|d| d.name()), Some("nextjs"));
    assert_eq!(result.confidence, 95);
}

#[test]
fn test_expo_manifest_bonus_applied() {
    let registry = FrameworkRegistry::with_descriptors(vec![Box::new(ExpoDescriptor)]);
    let vendored = FileRecord::from_text(
        "mobile/node_modules/expo/package.json",
        r#"{"dependencies": {"react": "18.2.0"}}"#,
    );
    let entry = FileRecord::from_text("mobile/App.jsx", "export default function App() {}");

    let runtime = vec![
        vendored.clone(),
        FileRecord::from_text("mobile/package.json", r#"{"dependencies": {"expo": "~50.0.0"}}"#),
        entry.clone(),
    ];
    let result = detect_with_confidence(&registry, &runtime);

    // 30 base + App.jsx + package.json, +20 runtime expo dependency
    assert_eq!(result.framework.map(|d| d.name()), Some("expo"));
    assert_eq!(result.confidence, 80);

    let dev_only = vec![
        vendored,
        FileRecord::from_text("mobile/package.json", r#"{"devDependencies": {"expo": "~50.0.0"}}"#),
        entry,
    ];
    let result = detect_with_confidence(&registry, &dev_only);

    // Detected through devDependencies, but the bonus needs a runtime dependency
    assert_eq!(result.framework.map(|d| d.name()), Some("expo"));
    assert_eq!(result.confidence, 60);
}

#[test]
fn test_expo_app_json_bonus() {
    let registry = FrameworkRegistry::with_descriptors(vec![Box::new(ExpoDescriptor)]);
    let files = vec![
        FileRecord::from_text("mobile/app.json", r#"{"expo": {"name": "demo"}}"#),
        FileRecord::from_text("mobile/App.tsx", ""),
        FileRecord::from_text("mobile/src/screens/Home.tsx", ""),
    ];

    let result = detect_with_confidence(&registry, &files);

    // 30 base + app.json + App.tsx, +15 app.json, +20 App.tsx, +10 screens/
    assert_eq!(result.confidence, 100);
    assert_eq!(
        ezcp::detect::calculate_confidence(&ExpoDescriptor, &files[1..]),
        30 + 15 + 20 + 10
    );
}

#[test]
fn test_flask_confidence_bonus() {
    let files = vec![
        FileRecord::from_text("api/app.py", "from flask import Flask"),
        FileRecord::from_text("api/requirements.txt", "flask==3.0"),
    ];

    let result = detect_with_confidence(FrameworkRegistry::global(), &files);

    // 30 base + app.py + requirements.txt, +20 entry point, +10 requirements
    assert_eq!(result.framework.map(|d| d.name()), Some("flask"));
    assert_eq!(result.confidence, 90);
    assert_eq!(result.detected_frameworks.len(), 1);
}
