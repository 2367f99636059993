//! Bundling built assignments into submission archives.
//!
//! The archive holds the assignment's PDF at its root and the `code/`
//! subtree of that same assignment. Assembly happens in a staging
//! directory under `dist/` that is removed on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use console::style;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::error::Error;
use crate::layout;
use crate::zip::ZipTool;

pub struct BundleOptions {
    /// Overwrite an existing archive under `dist/`.
    pub force: bool,
    /// Silence the archive tool's output.
    pub quiet: bool,
    /// Archive program; tests substitute a stub here.
    pub archiver: PathBuf,
}

impl Default for BundleOptions {
    fn default() -> Self {
        BundleOptions {
            force: false,
            quiet: false,
            archiver: PathBuf::from("zip"),
        }
    }
}

#[derive(Debug)]
pub enum BundleOutcome {
    Created(PathBuf),
    /// Archive already present and `force` not given.
    Skipped(PathBuf),
}

/// `sheet_<NN>_<id1>_<id2>...zip`, member ids joined in configuration-file
/// order. With an empty roster the name carries no id suffix.
pub fn archive_name(number: u32, config: &Configuration) -> String {
    let ids: Vec<&str> = config.members.keys().map(String::as_str).collect();
    if ids.is_empty() {
        format!("sheet_{}.zip", layout::pad(number))
    } else {
        format!("sheet_{}_{}.zip", layout::pad(number), ids.join("_"))
    }
}

/// Staging directory that is removed when dropped, so the archive-tool
/// failure paths cannot leave it behind.
struct Staging {
    path: PathBuf,
}

impl Staging {
    fn create(path: PathBuf) -> io::Result<Self> {
        if path.exists() {
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        Ok(Staging { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), error = %err, "failed to remove staging directory");
        }
    }
}

/// Bundles one assignment's PDF and code into `dist/`.
pub fn bundle(
    root: &Path,
    config: &Configuration,
    number: u32,
    opts: &BundleOptions,
) -> Result<BundleOutcome, Error> {
    let name = archive_name(number, config);
    let dist = layout::dist_dir(root);
    fs::create_dir_all(&dist)?;
    let dest = dist.join(&name);
    if dest.is_file() {
        if opts.force {
            fs::remove_file(&dest)?;
        } else {
            println!(
                "{} {} already exists, skipping (pass --force to override)",
                style("skip").yellow(),
                dest.display()
            );
            return Ok(BundleOutcome::Skipped(dest));
        }
    }

    let artifact = layout::artifact_path(root, number);
    if !artifact.is_file() {
        return Err(Error::ArtifactMissing(artifact));
    }

    let staging = Staging::create(dist.join(layout::dir_name(number)))?;
    let pdf_name = format!("{}.pdf", layout::dir_name(number));
    fs::copy(&artifact, staging.path().join(&pdf_name))?;
    let mut entries = vec![pdf_name];

    let code_dir = layout::assignment_dir(root, number).join(layout::CODE_DIR);
    if code_dir.is_dir() {
        copy_tree(&code_dir, &staging.path().join(layout::CODE_DIR))?;
        for entry in fs::read_dir(&code_dir)? {
            let entry = entry?;
            entries.push(format!(
                "{}/{}",
                layout::CODE_DIR,
                entry.file_name().to_string_lossy()
            ));
        }
    }

    ZipTool::new(staging.path())
        .program(&opts.archiver)
        .quiet(opts.quiet)
        .create(&name, &entries)?;
    fs::rename(staging.path().join(&name), &dest)?;
    debug!(archive = %dest.display(), entries = entries.len(), "archive assembled");
    println!("{} compiled archive at {}", style("ok").green(), dest.display());
    Ok(BundleOutcome::Created(dest))
}

/// Bundles every built PDF found under `dist/`, continue-on-failure like
/// the batch build.
pub fn bundle_all(
    root: &Path,
    config: &Configuration,
    opts: &BundleOptions,
) -> Result<(), Error> {
    let numbers = layout::list_artifacts(root)?;
    if numbers.is_empty() {
        println!("no built assignments found under {}", layout::dist_dir(root).display());
        return Ok(());
    }
    let mut failed = Vec::new();
    for number in numbers {
        println!("compiling assignment {}...", layout::pad(number));
        if let Err(err) = bundle(root, config, number, opts) {
            eprintln!(
                "{} assignment {}: {err}",
                style("error").red(),
                layout::pad(number)
            );
            failed.push(number);
        }
    }
    if failed.is_empty() {
        Ok(())
    } else {
        Err(Error::Batch {
            action: "bundle",
            numbers: failed,
        })
    }
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
