use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// List package templates instead of composes
    #[arg(long)]
    pub packages: bool,

    /// List templates installed in the current project
    #[arg(long)]
    pub installed: bool,
}
