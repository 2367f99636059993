#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use assignmentctl::config::{Assignments, Configuration, General};
use assignmentctl::layout;

pub const COURSE: &str = "Analysis II";

/// Writes a bootstrapped configuration with one member and the given
/// counter state.
pub fn write_config(root: &Path, number: Option<u32>) -> Configuration {
    let mut members = IndexMap::new();
    members.insert("123456".to_string(), "Max Mustermann".to_string());
    let config = Configuration {
        general: General {
            course: COURSE.to_string(),
            group: String::new(),
        },
        members,
        assignments: number.map(|number| Assignments { number }),
    };
    config.save(root).expect("write configuration");
    config
}

/// Creates `assignment-<NN>/` with a document file, like a prior
/// `generate` run would have.
pub fn seed_assignment(root: &Path, number: u32) -> PathBuf {
    let dir = layout::allocate(root, number, false).expect("allocate assignment");
    fs::write(dir.join(layout::DOCUMENT_FILE), "\\documentclass{../assignments}\n")
        .expect("write document");
    dir
}

/// Drops a fake built PDF into `dist/`.
pub fn seed_artifact(root: &Path, number: u32) -> PathBuf {
    let dist = layout::dist_dir(root);
    fs::create_dir_all(&dist).expect("create dist");
    let path = layout::artifact_path(root, number);
    fs::write(&path, "pdf").expect("write artifact");
    path
}

/// Writes an executable stub standing in for latexmk or zip.
#[cfg(unix)]
pub fn stub_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path
}
