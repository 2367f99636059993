use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::bootstrap::{self, BootstrapOptions};
use crate::build::{self, BuildOptions};
use crate::bundle::{self, BundleOptions};
use crate::config::{self, Configuration};
use crate::error::Error;
use crate::generate::{self, GenerateOptions};
use crate::release;

/// CLI for conveniently templating, building, and bundling LaTeX course
/// assignments.
#[derive(Parser)]
#[clap(
    name = "assignmentctl",
    version,
    about = "Template, build, and bundle LaTeX course assignments"
)]
pub struct Cli {
    /// Skip any interactive prompts
    #[clap(long, global = true)]
    pub noninteractive: bool,

    /// Verbose diagnostic logging
    #[clap(long, short = 'v', global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the directory with the assignments class and a
    /// configuration file
    Bootstrap {
        /// Course name
        #[clap(long)]
        course: Option<String>,
        /// Group name, leave empty to omit
        #[clap(long)]
        group: Option<String>,
        /// Group member as '<name>,<id>', repeatable
        #[clap(long = "member")]
        members: Vec<String>,
    },
    /// Generate a new assignment from the template
    Generate {
        /// Assignment number; omit to continue from the stored counter
        number: Option<u32>,
        /// Due date, embedded verbatim in the header
        #[clap(long)]
        due: Option<String>,
        /// Skip updating the stored assignment counter
        #[clap(long)]
        no_increment: bool,
        /// Override an existing assignment directory
        #[clap(long, short = 'F')]
        force: bool,
    },
    /// Build assignments with latexmk and collect the PDFs in dist/
    Build {
        /// Assignment number; omit to build all assignments
        number: Option<u32>,
        /// Build all assignments in assignment-*/
        #[clap(long, short = 'A')]
        all: bool,
        /// Compiler passes per assignment
        #[clap(long, short = 'r', default_value_t = 3)]
        runs: u32,
        /// Keep intermediate files (skip latexmk -C)
        #[clap(long)]
        keep: bool,
        /// Override existing artifacts in dist/
        #[clap(long, short = 'F')]
        force: bool,
        /// Suppress compiler output
        #[clap(long, short = 'q')]
        quiet: bool,
    },
    /// Bundle built assignments into submittable zip archives
    Compile {
        /// Assignment number; omit to bundle all built assignments
        number: Option<u32>,
        /// Bundle all built assignments found in dist/
        #[clap(long, short = 'A')]
        all: bool,
        /// Override existing archives in dist/
        #[clap(long, short = 'F')]
        force: bool,
        /// Suppress archive tool output
        #[clap(long, short = 'q')]
        quiet: bool,
    },
    /// Write the env-file consumed by the CI release job
    Release,
}

/// Command dispatch, extracted from `main` so integration tests can drive
/// it directly.
pub async fn run(cli: Cli) -> Result<()> {
    let root = std::env::current_dir()?;

    match cli.command {
        Commands::Bootstrap {
            course,
            group,
            members,
        } => {
            let opts = BootstrapOptions {
                course,
                group,
                members,
                noninteractive: cli.noninteractive,
            };
            bootstrap::bootstrap(&root, &opts).await
        }
        Commands::Generate {
            number,
            due,
            no_increment,
            force,
        } => {
            let opts = GenerateOptions {
                number,
                due,
                force,
                no_increment,
                noninteractive: cli.noninteractive,
            };
            generate::generate(&root, &opts)
        }
        Commands::Build {
            number,
            all,
            runs,
            keep,
            force,
            quiet,
        } => {
            if all && number.is_some() {
                anyhow::bail!("cannot use --all with a specific assignment");
            }
            if !config::is_bootstrapped(&root) {
                return Err(Error::NotBootstrapped.into());
            }
            let opts = BuildOptions {
                runs,
                keep,
                force,
                quiet,
                compiler: PathBuf::from("latexmk"),
            };
            match number {
                Some(number) => build::build(&root, number, &opts).map(|_| ())?,
                None => build::build_all(&root, &opts)?,
            }
            Ok(())
        }
        Commands::Compile {
            number,
            all,
            force,
            quiet,
        } => {
            if all && number.is_some() {
                anyhow::bail!("cannot use --all with a specific assignment");
            }
            let config = Configuration::load(&root)?;
            config.validate()?;
            let opts = BundleOptions {
                force,
                quiet,
                archiver: PathBuf::from("zip"),
            };
            match number {
                Some(number) => bundle::bundle(&root, &config, number, &opts).map(|_| ())?,
                None => bundle::bundle_all(&root, &config, &opts)?,
            }
            Ok(())
        }
        Commands::Release => {
            if !config::is_bootstrapped(&root) {
                return Err(Error::NotBootstrapped.into());
            }
            release::release(&root)
        }
    }
}
