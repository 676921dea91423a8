use std::path::PathBuf;

use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Template ids to re-render (all installed templates if omitted)
    pub ids: Vec<String>,

    /// Read namespaced answers from a YAML file instead of prompting
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,
}
