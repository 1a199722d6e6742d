//! Integration tests for file filtering, ranking and selection

use ezcp::framework::descriptors::{DjangoDescriptor, FlaskDescriptor};
use ezcp::selection::{apply_mode, carry_over_selection, toggle_directory, toggle_file};
use ezcp::{process_files, ClassifiedFile, FileRecord, Priority, ProcessingOptions, SelectionMode};
use pretty_assertions::assert_eq;

fn django_project() -> Vec<FileRecord> {
    vec![
        FileRecord::from_text("proj/manage.py", "#!/usr/bin/env python"),
        FileRecord::from_text("proj/proj/settings.py", "DEBUG = True"),
        FileRecord::from_text("proj/proj/urls.py", "urlpatterns = []"),
        FileRecord::from_text("proj/blog/models.py", "class Post: pass"),
        FileRecord::from_text("proj/blog/helpers.py", "def slug(): pass"),
        FileRecord::from_text("proj/blog/tests.py", "def test_post(): pass"),
        FileRecord::from_text("proj/blog/__pycache__/models.cpython-311.pyc", "bytes"),
        FileRecord::from_text("proj/static/banner.png", "png"),
    ]
}

fn paths(files: &[ClassifiedFile]) -> Vec<&str> {
    files.iter().map(|f| f.relative_path.as_str()).collect()
}

#[test]
fn test_django_processing_filters_and_ranks() {
    let processed = process_files(&django_project(), &DjangoDescriptor, &ProcessingOptions::default());

    assert_eq!(
        paths(&processed),
        vec![
            "proj/blog/models.py",
            "proj/manage.py",
            "proj/proj/settings.py",
            "proj/proj/urls.py",
            "proj/blog/helpers.py",
        ]
    );
    assert_eq!(processed[0].priority, Priority::High);
    assert_eq!(processed[4].priority, Priority::Medium);
    assert_eq!(processed[0].sub_unit.as_deref(), Some("blog"));
    assert_eq!(processed[1].sub_unit, None);
}

#[test]
fn test_output_is_sorted_by_priority_then_path() {
    let options = ProcessingOptions {
        include_tests: true,
        ..Default::default()
    };
    let processed = process_files(&django_project(), &DjangoDescriptor, &options);

    for pair in processed.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            (a.priority, a.relative_path.as_str()) <= (b.priority, b.relative_path.as_str()),
            "{} before {}",
            a.relative_path,
            b.relative_path
        );
    }
}

#[test]
fn test_size_limit_is_inclusive() {
    let files = vec![
        FileRecord::from_text("proj/blog/fits.py", "x").with_size(100),
        FileRecord::from_text("proj/blog/huge.py", "x").with_size(101),
    ];
    let options = ProcessingOptions {
        max_file_size: 100,
        ..Default::default()
    };

    let processed = process_files(&files, &DjangoDescriptor, &options);
    assert_eq!(paths(&processed), vec!["proj/blog/fits.py"]);
}

#[test]
fn test_tests_excluded_unless_requested() {
    let files = vec![
        FileRecord::from_text("proj/blog/helpers.py", ""),
        FileRecord::from_text("proj/blog/test_helpers.py", ""),
        FileRecord::from_text("proj/tests/test_blog.py", ""),
        FileRecord::from_text("proj/blog/api_spec.py", ""),
    ];

    let default = process_files(&files, &DjangoDescriptor, &ProcessingOptions::default());
    assert_eq!(paths(&default), vec!["proj/blog/helpers.py"]);

    let options = ProcessingOptions {
        include_tests: true,
        ..Default::default()
    };
    let with_tests = process_files(&files, &DjangoDescriptor, &options);
    assert_eq!(with_tests.len(), 4);
    assert!(with_tests
        .iter()
        .filter(|f| f.name != "helpers.py")
        .all(|f| f.priority == Priority::Low));
}

#[test]
fn test_custom_exclude_patterns() {
    let options = ProcessingOptions {
        custom_exclude_patterns: vec!["helpers.py".to_string(), "proj/proj/".to_string()],
        ..Default::default()
    };
    let processed = process_files(&django_project(), &DjangoDescriptor, &options);

    assert_eq!(paths(&processed), vec!["proj/blog/models.py", "proj/manage.py"]);
}

#[test]
fn test_processing_is_idempotent() {
    let files = django_project();
    let options = ProcessingOptions::default();

    let first = process_files(&files, &DjangoDescriptor, &options);
    let second = process_files(&files, &DjangoDescriptor, &options);
    assert_eq!(first, second);
}

#[test]
fn test_unreadable_file_is_skipped() {
    let temp = tempfile::TempDir::new().unwrap();
    let present = temp.path().join("views.py");
    std::fs::write(&present, "def index(): pass").unwrap();

    let files = vec![
        FileRecord::deferred("proj/blog/views.py", 17, &present),
        FileRecord::deferred("proj/blog/gone.py", 10, temp.path().join("gone.py")),
    ];

    let processed = process_files(&files, &DjangoDescriptor, &ProcessingOptions::default());
    assert_eq!(paths(&processed), vec!["proj/blog/views.py"]);
    assert_eq!(processed[0].content, "def index(): pass");
}

#[test]
fn test_non_text_files_dropped() {
    let files = vec![
        FileRecord::from_text("site/app.py", "from flask import Flask"),
        FileRecord::from_text("site/static/icon.png", "png"),
        FileRecord::from_text("site/Procfile", "web: gunicorn app:app"),
        FileRecord::from_text("site/static/bundle.wasm", "wasm"),
    ];

    let processed = process_files(&files, &FlaskDescriptor, &ProcessingOptions::default());
    assert_eq!(paths(&processed), vec!["site/app.py", "site/Procfile"]);
}

#[test]
fn test_initial_selection_is_high_priority_only() {
    let processed = process_files(&django_project(), &DjangoDescriptor, &ProcessingOptions::default());

    for file in &processed {
        assert_eq!(file.selected, file.priority == Priority::High, "{}", file.path);
    }
}

#[test]
fn test_selection_modes_and_toggles() {
    let mut processed =
        process_files(&django_project(), &DjangoDescriptor, &ProcessingOptions::default());

    apply_mode(&mut processed, SelectionMode::All);
    assert!(processed.iter().all(|f| f.selected));

    apply_mode(&mut processed, SelectionMode::Priority);
    assert!(!processed
        .iter()
        .find(|f| f.name == "helpers.py")
        .unwrap()
        .selected);

    assert!(toggle_file(&mut processed, "proj/blog/helpers.py"));
    assert!(!toggle_file(&mut processed, "proj/nope.py"));

    // Every file under blog/ is now selected, so the toggle clears them all
    toggle_directory(&mut processed, "proj/blog");
    assert!(processed
        .iter()
        .filter(|f| f.relative_path.starts_with("proj/blog/"))
        .all(|f| !f.selected));
}

#[test]
fn test_selection_survives_reprocessing() {
    let options = ProcessingOptions::default();
    let mut previous = process_files(&django_project(), &DjangoDescriptor, &options);
    toggle_file(&mut previous, "proj/manage.py");

    let mut files = django_project();
    files.push(FileRecord::from_text("proj/blog/forms.py", "class PostForm: pass"));

    let relaxed = ProcessingOptions {
        include_tests: true,
        ..Default::default()
    };
    let mut next = process_files(&files, &DjangoDescriptor, &relaxed);
    carry_over_selection(&previous, &mut next);

    let selected = |path: &str| next.iter().find(|f| f.relative_path == path).unwrap().selected;
    assert!(!selected("proj/manage.py"));
    assert!(selected("proj/proj/settings.py"));
    assert!(selected("proj/blog/forms.py"));
    assert!(selected("proj/blog/tests.py"));
}
