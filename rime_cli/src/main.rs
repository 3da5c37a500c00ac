mod cli;
mod commands;
mod config;
mod deploy;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // --quiet: off；--verbose: RUST_LOG 或 info；默认只显示 warn 以上（例如被容忍的坏行）
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    let config = Config::from_cli(&cli)?;

    match cli.command {
        Commands::Add {
            word,
            code,
            weight,
            group,
        } => commands::add::run(&word, code.as_deref(), weight, &group, &config),
        Commands::Delete { word } => commands::delete::run(&word, &config),
        Commands::SetWeight { word, weight } => commands::set_weight::run(&word, weight, &config),
        Commands::Query { word } => commands::query::run(&word, &config),
        Commands::List => commands::list::run(&config),
    }
}
