//! Wrapper around the external `latexmk` compiler driver.
//!
//! Invocations use argument vectors with an explicit working directory and
//! awaited exit status; no shell is involved. The program name is
//! overridable so tests can substitute a stub.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::Error;

const BUILD_ARGS: &[&str] = &[
    "-pdf",
    "-interaction=nonstopmode",
    "-file-line-error",
    "-shell-escape",
    "-f",
];

pub struct Latexmk {
    program: PathBuf,
    workdir: PathBuf,
    quiet: bool,
}

impl Latexmk {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Latexmk {
            program: PathBuf::from("latexmk"),
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

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(&self.workdir);
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        cmd
    }

    fn tool(&self) -> String {
        self.program.display().to_string()
    }

    /// One compiler pass over `document`, relative to the working
    /// directory. `-f` keeps latexmk going on TeX errors and cross-reference
    /// resolution needs several passes, so individual exit codes are logged
    /// but not inspected; the orchestrator checks for the PDF afterwards.
    pub fn build(&self, document: &str) -> Result<(), Error> {
        debug!(
            program = %self.tool(),
            workdir = %self.workdir.display(),
            document,
            "running compiler pass"
        );
        let status = self
            .command()
            .args(BUILD_ARGS)
            .arg(document)
            .status()
            .map_err(|source| Error::ToolLaunch {
                tool: self.tool(),
                source,
            })?;
        if !status.success() {
            debug!(%status, "compiler pass exited non-zero");
        }
        Ok(())
    }

    /// `latexmk -C`: removes the compiler's own intermediate files. A
    /// failed cleanup is logged, never fatal.
    pub fn clean(&self) -> Result<(), Error> {
        let status = self
            .command()
            .arg("-C")
            .status()
            .map_err(|source| Error::ToolLaunch {
                tool: self.tool(),
                source,
            })?;
        if !status.success() {
            warn!(%status, workdir = %self.workdir.display(), "cleanup exited non-zero");
        }
        Ok(())
    }
}

/// Path of the PDF that a successful compiler run leaves next to the
/// document.
pub fn output_path(document: &Path) -> PathBuf {
    document.with_extension("pdf")
}
