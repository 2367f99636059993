//! The on-disk layout convention.
//!
//! One assignment occupies `assignment-<NN>/` with the templated document
//! at its root and fixed `source/` and `code/` subdirectories. Build and
//! bundle artifacts are collected centrally under `dist/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Configuration;
use crate::error::Error;

pub const DIST_DIR: &str = "dist";
pub const SOURCE_DIR: &str = "source";
pub const CODE_DIR: &str = "code";
pub const DOCUMENT_FILE: &str = "assignment.tex";
pub const ASSIGNMENT_PREFIX: &str = "assignment-";

/// Zero-pads numbers below 10; wider numbers render as-is.
pub fn pad(number: u32) -> String {
    if number < 10 {
        format!("0{number}")
    } else {
        number.to_string()
    }
}

pub fn dir_name(number: u32) -> String {
    format!("{ASSIGNMENT_PREFIX}{}", pad(number))
}

pub fn assignment_dir(root: &Path, number: u32) -> PathBuf {
    root.join(dir_name(number))
}

pub fn document_path(root: &Path, number: u32) -> PathBuf {
    assignment_dir(root, number).join(DOCUMENT_FILE)
}

pub fn dist_dir(root: &Path) -> PathBuf {
    root.join(DIST_DIR)
}

/// Destination of the built PDF: `dist/assignment-<NN>.pdf`.
pub fn artifact_path(root: &Path, number: u32) -> PathBuf {
    dist_dir(root).join(format!("{}.pdf", dir_name(number)))
}

/// Creates `assignment-<NN>/` with its `source/` and `code/`
/// subdirectories. An existing directory is an error unless `force` is
/// given; with `force` the directory is reused as-is, nothing is deleted.
pub fn allocate(root: &Path, number: u32, force: bool) -> Result<PathBuf, Error> {
    let dir = assignment_dir(root, number);
    if dir.is_dir() && !force {
        return Err(Error::AlreadyExists(dir));
    }
    fs::create_dir_all(&dir)?;
    fs::create_dir_all(dir.join(SOURCE_DIR))?;
    fs::create_dir_all(dir.join(CODE_DIR))?;
    debug!(dir = %dir.display(), "allocated assignment directory");
    Ok(dir)
}

/// Picks the number for the next assignment to generate.
///
/// An explicit argument always wins and leaves the stored counter untouched
/// until the caller commits the number actually used. Otherwise the stored
/// counter means "last generated", so the next number is counter plus one.
/// When the counter section is missing entirely, `prompt` supplies a
/// starting number.
pub fn resolve_number<F>(
    config: &Configuration,
    explicit: Option<u32>,
    prompt: F,
) -> Result<u32, Error>
where
    F: FnOnce() -> io::Result<u32>,
{
    if let Some(number) = explicit {
        return Ok(number);
    }
    match &config.assignments {
        Some(assignments) => Ok(assignments.number + 1),
        None => Ok(prompt()?),
    }
}

/// Snapshot of all assignment directories that contain a document file,
/// sorted by number. Directories created after the snapshot do not affect
/// an in-progress batch.
pub fn list_assignments(root: &Path) -> Result<Vec<u32>, Error> {
    let mut numbers = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(number) = parse_number(&name.to_string_lossy(), ASSIGNMENT_PREFIX, "") else {
            continue;
        };
        if entry.path().join(DOCUMENT_FILE).is_file() {
            numbers.push(number);
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

/// Snapshot of all built PDFs under `dist/`, sorted by number.
pub fn list_artifacts(root: &Path) -> Result<Vec<u32>, Error> {
    let dist = dist_dir(root);
    if !dist.is_dir() {
        return Ok(Vec::new());
    }
    let mut numbers = Vec::new();
    for entry in fs::read_dir(&dist)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        if let Some(number) = parse_number(&name.to_string_lossy(), ASSIGNMENT_PREFIX, ".pdf") {
            numbers.push(number);
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

fn parse_number(name: &str, prefix: &str, suffix: &str) -> Option<u32> {
    name.strip_prefix(prefix)?.strip_suffix(suffix)?.parse().ok()
}
