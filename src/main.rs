//! Shipwright - docker-compose assembly from versioned templates
//!
//! Pulls parameterized service templates from a remote catalog, collects
//! their variables, and merges each rendered fragment into the project's
//! shared docker-compose.yml as a sentinel-delimited block.

use clap::Parser;

mod catalog;
mod cli;
mod collect;
mod commands;
mod common;
mod error;
mod merge;
mod ops;
mod progress;
mod project;
mod render;
mod resolve;
mod store;
mod template;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.project, args),
        Commands::Update(args) => commands::update::run(cli.project, args),
        Commands::Remove(args) => commands::remove::run(cli.project, args),
        Commands::List(args) => commands::list::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
