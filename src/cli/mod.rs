//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument
//! types:
//! - add: Add command arguments
//! - update: Update command arguments
//! - remove: Remove command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod list;
pub mod remove;
pub mod update;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use update::UpdateArgs;

/// Shipwright - docker-compose assembly from versioned templates
#[derive(Parser, Debug)]
#[command(
    name = "shipwright",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Assemble docker-compose projects from versioned service templates",
    long_about = "Shipwright pulls parameterized service templates from a remote catalog, \
                  collects their variables, and merges each rendered fragment into the \
                  project's shared docker-compose.yml without clobbering sibling services.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shipwright add redis                  \x1b[90m# Add a service template\x1b[0m\n   \
                  shipwright add php --version 7.4      \x1b[90m# Pin a template version\x1b[0m\n   \
                  shipwright add --package lamp         \x1b[90m# Expand a package of templates\x1b[0m\n   \
                  shipwright update                     \x1b[90m# Re-render all installed templates\x1b[0m\n   \
                  shipwright remove redis --dir         \x1b[90m# Drop the block and local files\x1b[0m\n   \
                  shipwright list                       \x1b[90m# List available templates\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to the nearest shipwright.yml above
    /// the current directory)
    #[arg(long, short = 'p', global = true, env = "SHIPWRIGHT_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add templates to the project's docker-compose.yml
    Add(AddArgs),

    /// Re-render installed templates into docker-compose.yml
    Update(UpdateArgs),

    /// Remove a template's block from docker-compose.yml
    Remove(RemoveArgs),

    /// List available or installed templates
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
