//! One-time initialization of a course directory: shared class file plus
//! the `.assignments.rc` configuration.

use std::fs;
use std::path::Path;

use anyhow::Context;
use console::style;
use dialoguer::Input;
use indexmap::IndexMap;
use tracing::debug;

use crate::config::{self, Assignments, Configuration, General};
use crate::error::Error;

/// Pinned revision of the shared `assignments` LaTeX class.
pub const CLASS_URL: &str = "https://gist.githubusercontent.com/zoomoid/df2f5687c59f83d32f5169927321ebfb/raw/88496bd0f8fd6d19a7063581bd0c3c255b307e12/assignments.cls";

pub const CLASS_FILE: &str = "assignments.cls";

pub struct BootstrapOptions {
    pub course: Option<String>,
    pub group: Option<String>,
    /// `"<name>,<id>"` entries, e.g. `"Max Mustermann,123456"`.
    pub members: Vec<String>,
    pub noninteractive: bool,
}

pub async fn bootstrap(root: &Path, opts: &BootstrapOptions) -> anyhow::Result<()> {
    if config::is_bootstrapped(root) {
        return Err(Error::AlreadyExists(config::config_path(root)).into());
    }

    fetch_class_file(root).await?;

    let course = match &opts.course {
        Some(course) => course.clone(),
        None if opts.noninteractive => {
            anyhow::bail!("--course is required with --noninteractive")
        }
        None => Input::<String>::new()
            .with_prompt("Course name")
            .interact_text()?,
    };
    let group = match &opts.group {
        Some(group) => group.clone(),
        None if opts.noninteractive => String::new(),
        None => Input::<String>::new()
            .with_prompt("Group name (leave empty to omit)")
            .allow_empty(true)
            .interact_text()?,
    };
    let members = if !opts.members.is_empty() {
        let mut members = IndexMap::new();
        for raw in &opts.members {
            let (id, name) = parse_member(raw)?;
            members.insert(id, name);
        }
        members
    } else if opts.noninteractive {
        IndexMap::new()
    } else {
        prompt_members()?
    };

    let config = Configuration {
        general: General {
            course: course.clone(),
            group,
        },
        members,
        assignments: Some(Assignments { number: 0 }),
    };
    config.save(root)?;
    println!("{} bootstrapped {course}", style("ok").green());
    Ok(())
}

async fn fetch_class_file(root: &Path) -> Result<(), Error> {
    let path = root.join(CLASS_FILE);
    if path.is_file() {
        debug!(path = %path.display(), "class file present, skipping download");
        return Ok(());
    }
    println!("downloading assignments class from {CLASS_URL}");
    let response = reqwest::get(CLASS_URL)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| Error::RemoteFetch {
            url: CLASS_URL.to_string(),
            source,
        })?;
    let body = response.text().await.map_err(|source| Error::RemoteFetch {
        url: CLASS_URL.to_string(),
        source,
    })?;
    fs::write(&path, body)?;
    Ok(())
}

/// Splits `"Max Mustermann,123456"` into `(id, name)`. The last comma
/// separates, so names containing commas are not supported.
pub fn parse_member(raw: &str) -> anyhow::Result<(String, String)> {
    let (name, id) = raw
        .rsplit_once(',')
        .with_context(|| format!("member {raw:?} must have the form '<name>,<id>'"))?;
    Ok((id.trim().to_string(), name.trim().to_string()))
}

fn prompt_members() -> anyhow::Result<IndexMap<String, String>> {
    let mut members = IndexMap::new();
    loop {
        let entry: String = Input::new()
            .with_prompt("Group member as '<name>,<id>' (empty or 'q' to finish)")
            .allow_empty(true)
            .interact_text()?;
        if entry.is_empty() || entry == "q" {
            break;
        }
        match parse_member(&entry) {
            Ok((id, name)) => {
                members.insert(id, name);
            }
            Err(err) => eprintln!("{} {err}", style("error").red()),
        }
    }
    Ok(members)
}
