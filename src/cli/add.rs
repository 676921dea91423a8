use std::path::PathBuf;

use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add a template:\n    shipwright add redis\n\n\
                   Pin a version:\n    shipwright add php --version 7.4\n\n\
                   Expand a package:\n    shipwright add --package lamp\n\n\
                   Non-interactive install:\n    shipwright add redis --answers answers.yml")]
pub struct AddArgs {
    /// Template ids to add
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Template version to use (e.g. 7.4)
    #[arg(long, short = 'v', value_name = "VERSION")]
    pub version: Option<String>,

    /// Treat the ids as package templates and expand their references
    #[arg(long)]
    pub package: bool,

    /// Read namespaced answers from a YAML file instead of prompting
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Install template files without rendering into docker-compose.yml
    #[arg(long, short = 'y')]
    pub yes: bool,
}
