use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure modes shared across all commands.
///
/// Skip outcomes ("artifact already exists, not overwriting") are not
/// errors; they are reported as outcome values by the build and bundle
/// modules and the command still exits successfully.
#[derive(Debug, Error)]
pub enum Error {
    #[error("directory is not bootstrapped, run `assignmentctl bootstrap` first")]
    NotBootstrapped,

    #[error("configuration file is invalid: {0}")]
    InvalidConfiguration(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("no assignment document at {}", .0.display())]
    NoSuchAssignment(PathBuf),

    #[error("expected artifact at {}, but it was not produced", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("failed to launch `{tool}`")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailure { tool: String, status: ExitStatus },

    #[error("failed to fetch {url}")]
    RemoteFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{action} failed for assignments {numbers:?}")]
    Batch {
        action: &'static str,
        numbers: Vec<u32>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
