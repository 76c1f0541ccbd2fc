mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod content;
mod controller;
mod deck;
mod input;
mod modal;
mod render;
mod sequencer;
mod theme;

use clap::Parser;
use colored::Colorize;

fn init_logging(level: log::LevelFilter) {
    // RUST_LOG wins when set; otherwise the -v/-q flags decide.
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.log_level());

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
