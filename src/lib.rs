//! Management CLI for LaTeX course assignments built around the
//! `assignments` document class: bootstrap a course directory with a shared
//! class file and configuration, template numbered assignment directories,
//! build them with latexmk, and bundle the artifacts into submission
//! archives.

pub mod bootstrap;
pub mod build;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod latexmk;
pub mod layout;
pub mod release;
pub mod template;
pub mod zip;
