//! Selection operations
//!
//! Pure helpers a front end uses to manage which classified files go into the
//! report. Nothing here keeps state between calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::process::{ClassifiedFile, Priority};

/// Initial selection applied after processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Everything starts selected
    #[default]
    All,
    /// Only high-priority files start selected
    Priority,
}

impl std::str::FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SelectionMode::All),
            "priority" | "high" => Ok(SelectionMode::Priority),
            _ => Err(format!("Unknown selection mode: {}", s)),
        }
    }
}

/// Checkbox state of a directory in a file tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Selected,
    Indeterminate,
    Unselected,
}

/// Totals shown next to the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    pub selected_files: usize,
    pub total_files: usize,
    pub selected_chars: usize,
    pub estimated_tokens: usize,
}

/// Approximate tokens for a character count: `ceil(chars / 4)`
pub fn estimate_tokens(chars: usize) -> usize {
    chars.div_ceil(4)
}

pub fn apply_mode(files: &mut [ClassifiedFile], mode: SelectionMode) {
    match mode {
        SelectionMode::All => select_all(files),
        SelectionMode::Priority => {
            for file in files {
                file.selected = file.priority == Priority::High;
            }
        }
    }
}

pub fn select_all(files: &mut [ClassifiedFile]) {
    files.iter_mut().for_each(|f| f.selected = true);
}

pub fn select_none(files: &mut [ClassifiedFile]) {
    files.iter_mut().for_each(|f| f.selected = false);
}

/// Flip one file by path. Returns false if no file has that path.
pub fn toggle_file(files: &mut [ClassifiedFile], path: &str) -> bool {
    match files.iter_mut().find(|f| f.path == path) {
        Some(file) => {
            file.selected = !file.selected;
            true
        }
        None => false,
    }
}

/// Toggle every file under `dir`.
///
/// If all of them are selected they are all deselected; in any other state
/// (none or some selected) they are all selected. This is not a per-file
/// invert.
pub fn toggle_directory(files: &mut [ClassifiedFile], dir: &str) {
    let all_selected = files.iter().filter(|f| in_dir(f, dir)).all(|f| f.selected);
    for file in files.iter_mut().filter(|f| in_dir(f, dir)) {
        file.selected = !all_selected;
    }
}

/// Whether `file` is `dir` itself or lies below it
fn in_dir(file: &ClassifiedFile, dir: &str) -> bool {
    file.relative_path
        .strip_prefix(dir)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Aggregate checkbox state for the files below `dir`
pub fn directory_state(files: &[ClassifiedFile], dir: &str) -> DirectoryState {
    let (total, selected) = files
        .iter()
        .filter(|f| in_dir(f, dir))
        .fold((0usize, 0usize), |(total, selected), f| {
            (total + 1, selected + usize::from(f.selected))
        });

    if selected == 0 {
        DirectoryState::Unselected
    } else if selected == total {
        DirectoryState::Selected
    } else {
        DirectoryState::Indeterminate
    }
}

/// Carry selection from a previous run onto a fresh one, matching by path.
/// Files that did not exist before start selected.
pub fn carry_over_selection(previous: &[ClassifiedFile], next: &mut [ClassifiedFile]) {
    let known: HashMap<&str, bool> = previous
        .iter()
        .map(|f| (f.path.as_str(), f.selected))
        .collect();

    for file in next {
        file.selected = known.get(file.path.as_str()).copied().unwrap_or(true);
    }
}

/// Only the selected files, in list order
pub fn selected_files(files: &[ClassifiedFile]) -> impl Iterator<Item = &ClassifiedFile> {
    files.iter().filter(|f| f.selected)
}

pub fn selection_stats(files: &[ClassifiedFile]) -> SelectionStats {
    let (selected_files, selected_chars) = selected_files(files)
        .fold((0, 0), |(count, chars), f| (count + 1, chars + f.char_count()));

    SelectionStats {
        selected_files,
        total_files: files.len(),
        selected_chars,
        estimated_tokens: estimate_tokens(selected_chars),
    }
}
