mod cli;
mod cli_utils;
mod commands;
mod display;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("highscores=warn,highscores_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::store_config(&args);

    match args.command {
        Command::Add {
            name,
            score,
            level,
            date,
            json,
        } => commands::add::run(&config, name, score, level, date.as_deref(), json.as_deref()),
        Command::List { format } => commands::list::run(&config, None, format),
        Command::Top { count, format } => commands::list::run(&config, Some(count), format),
        Command::Clear => commands::clear::run(&config),
        Command::Path => commands::path::run(&config),
        Command::Export { format, output } => {
            commands::export::run(&config, format, output.as_deref())
        }
    }
}
