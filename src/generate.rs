//! Generating a numbered assignment directory from the template.

use std::fs;
use std::path::Path;

use console::style;
use dialoguer::Input;

use crate::config::{Assignments, Configuration};
use crate::error::Error;
use crate::layout;
use crate::template;

pub struct GenerateOptions {
    /// Explicit assignment number; otherwise derived from the stored
    /// counter.
    pub number: Option<u32>,
    /// Free-form due date, embedded verbatim in the document header.
    pub due: Option<String>,
    pub force: bool,
    /// Leave the stored counter untouched.
    pub no_increment: bool,
    pub noninteractive: bool,
}

pub fn generate(root: &Path, opts: &GenerateOptions) -> anyhow::Result<()> {
    let mut config = Configuration::load(root)?;
    if config.general.course.is_empty() {
        return Err(Error::InvalidConfiguration("general.course is missing".into()).into());
    }

    let noninteractive = opts.noninteractive;
    let number = layout::resolve_number(&config, opts.number, || {
        if noninteractive {
            return Ok(1);
        }
        Input::<u32>::new()
            .with_prompt("Starting assignment number")
            .default(1)
            .interact_text()
            .map_err(std::io::Error::other)
    })?;

    let due = match &opts.due {
        Some(due) => due.clone(),
        None if noninteractive => String::new(),
        None => Input::<String>::new()
            .with_prompt("Due date (e.g. 'April 20, 2021', empty to omit)")
            .allow_empty(true)
            .interact_text()?,
    };

    let dir = layout::allocate(root, number, opts.force)?;
    let document = template::render(
        &config.general.course,
        &config.general.group,
        &config.members,
        number,
        &due,
    );
    let path = dir.join(layout::DOCUMENT_FILE);
    fs::write(&path, document)?;
    println!("{} templated {}", style("ok").green(), path.display());

    // the counter records the number actually used
    if !opts.no_increment {
        config.assignments = Some(Assignments { number });
        config.save(root)?;
    }
    Ok(())
}
