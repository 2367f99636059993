//! Build orchestration: run the compiler over an assignment and collect
//! the PDF under `dist/`.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::warn;

use crate::error::Error;
use crate::latexmk::{self, Latexmk};
use crate::layout;

pub struct BuildOptions {
    /// Compiler passes per assignment; cross-reference resolution
    /// conventionally needs more than one.
    pub runs: u32,
    /// Skip the `latexmk -C` cleanup after building.
    pub keep: bool,
    /// Overwrite an existing artifact under `dist/`.
    pub force: bool,
    /// Silence the compiler's own output.
    pub quiet: bool,
    /// Compiler program; tests substitute a stub here.
    pub compiler: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            runs: 3,
            keep: false,
            force: false,
            quiet: false,
            compiler: PathBuf::from("latexmk"),
        }
    }
}

#[derive(Debug)]
pub enum BuildOutcome {
    /// Artifact copied to `dist/`.
    Built(PathBuf),
    /// Artifact already present and `force` not given; nothing was copied.
    Skipped(PathBuf),
}

/// Builds one assignment: exactly `runs` compiler passes, then the PDF is
/// copied to `dist/assignment-<NN>.pdf`. Cleanup of intermediates runs
/// regardless of the build outcome unless `keep` is set.
pub fn build(root: &Path, number: u32, opts: &BuildOptions) -> Result<BuildOutcome, Error> {
    let dir = layout::assignment_dir(root, number);
    let document = dir.join(layout::DOCUMENT_FILE);
    if !document.is_file() {
        return Err(Error::NoSuchAssignment(document));
    }

    let compiler = Latexmk::new(&dir)
        .program(&opts.compiler)
        .quiet(opts.quiet);
    let result = run_passes(root, number, &document, &compiler, opts);
    if !opts.keep {
        if let Err(err) = compiler.clean() {
            warn!(error = %err, "failed to clean intermediates");
        }
    }
    result
}

fn run_passes(
    root: &Path,
    number: u32,
    document: &Path,
    compiler: &Latexmk,
    opts: &BuildOptions,
) -> Result<BuildOutcome, Error> {
    let runs = opts.runs.max(1);
    for run in 1..=runs {
        println!("  running latexmk [{run}/{runs}]");
        compiler.build(layout::DOCUMENT_FILE)?;
    }

    let produced = latexmk::output_path(document);
    if !produced.is_file() {
        return Err(Error::ArtifactMissing(produced));
    }

    fs::create_dir_all(layout::dist_dir(root))?;
    let dest = layout::artifact_path(root, number);
    if dest.is_file() {
        if opts.force {
            fs::remove_file(&dest)?;
        } else {
            println!(
                "{} {} already exists, skipping (pass --force to override)",
                style("skip").yellow(),
                dest.display()
            );
            return Ok(BuildOutcome::Skipped(dest));
        }
    }
    fs::copy(&produced, &dest)?;
    println!(
        "{} built {} to {}",
        style("ok").green(),
        document.display(),
        dest.display()
    );
    Ok(BuildOutcome::Built(dest))
}

/// Builds every assignment directory found in `root`. The list is a
/// snapshot taken up front; one assignment's failure is reported and does
/// not abort the batch. If anything failed, the batch as a whole errors
/// after all assignments have been attempted.
pub fn build_all(root: &Path, opts: &BuildOptions) -> Result<(), Error> {
    let numbers = layout::list_assignments(root)?;
    if numbers.is_empty() {
        println!("no assignments found in {}", root.display());
        return Ok(());
    }
    let mut failed = Vec::new();
    for number in numbers {
        println!("building assignment {}...", layout::pad(number));
        if let Err(err) = build(root, number, opts) {
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
            action: "build",
            numbers: failed,
        })
    }
}
