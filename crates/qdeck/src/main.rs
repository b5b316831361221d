mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod model;
mod navigator;
mod parser;
mod store;
mod theme;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
