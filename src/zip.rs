//! Wrapper around the external `zip` archive tool.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;

pub struct ZipTool {
    program: PathBuf,
    workdir: PathBuf,
    quiet: bool,
}

impl ZipTool {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        ZipTool {
            program: PathBuf::from("zip"),
            workdir: workdir.into(),
            quiet: false,
        }
    }

    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Creates `archive` inside the working directory from the given
    /// relative paths, recursing into directories. A non-zero exit is an
    /// [`Error::ToolFailure`].
    pub fn create(&self, archive: &str, entries: &[String]) -> Result<(), Error> {
        let tool = self.program.display().to_string();
        debug!(
            program = %tool,
            workdir = %self.workdir.display(),
            archive,
            entries = entries.len(),
            "creating archive"
        );
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(&self.workdir)
            .arg("-r")
            .arg(archive)
            .args(entries);
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        let status = cmd.status().map_err(|source| Error::ToolLaunch {
            tool: tool.clone(),
            source,
        })?;
        if !status.success() {
            return Err(Error::ToolFailure { tool, status });
        }
        Ok(())
    }
}
