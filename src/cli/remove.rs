use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Template id to remove
    pub id: String,

    /// Also delete the template's local directory
    #[arg(long)]
    pub dir: bool,
}
