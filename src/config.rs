//! The `.assignments.rc` configuration store.
//!
//! A directory counts as bootstrapped iff this file exists at the directory
//! root. The file keeps the INI-style section layout of the original tool
//! (`[general]`, `[members]`, `[assignments]`) and is parsed as TOML.
//! Member order is preserved; the bundler derives archive names from it.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// Well-known configuration file name, relative to the course directory.
pub const CONFIG_FILE: &str = ".assignments.rc";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Existence check only; does not look at the file's contents.
pub fn is_bootstrapped(root: &Path) -> bool {
    config_path(root).is_file()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub general: General,
    /// Member id (e.g. matriculation number) to display name.
    #[serde(default)]
    pub members: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Assignments>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct General {
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignments {
    /// Sequence number of the most recently generated assignment.
    pub number: u32,
}

impl Configuration {
    /// Reads the configuration from `root`. An absent file surfaces as
    /// [`Error::NotBootstrapped`], an unparseable one as
    /// [`Error::InvalidConfiguration`]; callers can tell the two apart.
    pub fn load(root: &Path) -> Result<Configuration, Error> {
        let path = config_path(root);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotBootstrapped)
            }
            Err(err) => return Err(err.into()),
        };
        let config: Configuration =
            toml::from_str(&raw).map_err(|err| Error::InvalidConfiguration(err.to_string()))?;
        debug!(
            path = %path.display(),
            members = config.members.len(),
            "read configuration"
        );
        Ok(config)
    }

    /// Checks the minimally required shape: a course name and the
    /// assignment counter section. A file that parses but misses either is
    /// present-but-invalid, distinct from absent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.general.course.is_empty() {
            return Err(Error::InvalidConfiguration(
                "general.course is missing".into(),
            ));
        }
        if self.assignments.is_none() {
            return Err(Error::InvalidConfiguration(
                "assignments.number is missing".into(),
            ));
        }
        Ok(())
    }

    /// Rewrites the whole file. Single-writer by assumption; no locking.
    pub fn save(&self, root: &Path) -> Result<(), Error> {
        let path = config_path(root);
        let raw = toml::to_string(self)
            .map_err(|err| Error::InvalidConfiguration(err.to_string()))?;
        fs::write(&path, raw)?;
        debug!(path = %path.display(), "wrote configuration");
        Ok(())
    }
}
