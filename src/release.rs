//! Release metadata export for the CI pipeline.
//!
//! Locates the artifact and archive for the tagged assignment by naming
//! convention and appends a flat `key=value` env-file consumed by the
//! release job.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use console::style;

use crate::error::Error;
use crate::layout;

pub const ENV_FILE: &str = "artifacts.env";
pub const TAG_VAR: &str = "CI_COMMIT_TAG";
pub const JOB_ID_VAR: &str = "CI_JOB_ID";

pub fn release(root: &Path) -> anyhow::Result<()> {
    let tag = env::var(TAG_VAR).with_context(|| format!("{TAG_VAR} is not set"))?;
    let job_id = env::var(JOB_ID_VAR).with_context(|| format!("{JOB_ID_VAR} is not set"))?;
    let assignment = tag
        .strip_prefix(layout::ASSIGNMENT_PREFIX)
        .unwrap_or(&tag)
        .to_string();

    let pdf_name = format!("{}{}.pdf", layout::ASSIGNMENT_PREFIX, assignment);
    let artifact = layout::dist_dir(root).join(&pdf_name);
    if !artifact.is_file() {
        return Err(Error::ArtifactMissing(artifact).into());
    }
    let archive_name = find_archive(root, &assignment)?;

    println!(
        "{} tag is {tag}, releasing assignment {assignment} with {archive_name}",
        style("ok").green()
    );
    let mut envfile = OpenOptions::new()
        .create(true)
        .append(true)
        .open(root.join(ENV_FILE))?;
    writeln!(envfile, "ASSIGNMENT={assignment}")?;
    writeln!(envfile, "TAG={tag}")?;
    writeln!(envfile, "ARTIFACTS_ID={job_id}")?;
    writeln!(envfile, "ARCHIVE_NAME={archive_name}")?;
    writeln!(envfile, "PDF_NAME={pdf_name}")?;
    Ok(())
}

fn find_archive(root: &Path, assignment: &str) -> anyhow::Result<String> {
    let prefix = format!("sheet_{assignment}_");
    let bare = format!("sheet_{assignment}.zip");
    let dist = layout::dist_dir(root);
    for entry in fs::read_dir(&dist)
        .with_context(|| format!("cannot read {}", dist.display()))?
    {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(".zip") && (name.starts_with(&prefix) || name == bare) {
            return Ok(name);
        }
    }
    anyhow::bail!(
        "no archive matching sheet_{assignment}_*.zip under {}, run `assignmentctl compile {assignment}` first",
        dist.display()
    )
}
