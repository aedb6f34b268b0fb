use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::*;

const DEFAULT_LOG_FILTER: &str = "coursecraft_cli=info,coursecraft_core=warn";

fn log_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new(DEFAULT_LOG_FILTER),
        1 => EnvFilter::new("coursecraft_cli=debug,coursecraft_core=debug"),
        _ => EnvFilter::new("debug"),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(log_filter(cli.verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .init();

    let result = match &cli.command {
        Commands::Video { topic } => video::run(&cli, topic).await,
        Commands::Videos { topics } => video::run_many(&cli, topics).await,
        Commands::Lesson { topic, audience } => lesson::run(&cli, topic, audience).await,
        Commands::Config { action } => config::run(&cli, action.clone()).await,
    };

    if let Err(e) = result {
        if cli.no_color {
            eprintln!("Error: {}", e.format_error());
        } else {
            eprintln!("{}: {}", "Error".red().bold(), e.format_error());
        }
        process::exit(1);
    }
}
