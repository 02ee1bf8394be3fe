use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use dolah::cli::args::{Cli, Commands};
use dolah::cli::commands;
use dolah::command::CommandParser;
use dolah::config::{Config, Paths};
use dolah::core::{Clock, FixedClock, ReferenceMoment, SystemClock};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Paths::new()
            .map(|paths| paths.config_file)
            .unwrap_or_else(|_| PathBuf::from(".dolah").join("config.yaml")),
    };
    let config = Config::load_from_path(&config_path).context("Failed to load configuration")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock(ReferenceMoment::from_naive(today))),
        None => Box::new(SystemClock),
    };
    let parser = CommandParser::from_config(&config.commands);

    let output = match cli.command {
        Commands::Parse { words } => commands::parse(&parser, &words, &clock.now(), format)?,
        Commands::Date { words } => commands::date(&words, &clock.now(), format)?,
        Commands::Repl => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            commands::repl(&parser, clock.as_ref(), stdin.lock(), &mut stdout, format)?;
            return Ok(());
        },
        Commands::Config(args) => commands::config(&config, &config_path, args.command)?,
    };

    println!("{output}");
    Ok(())
}

/// Install a stderr subscriber when `-v` is given.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level == LevelFilter::OFF {
        return;
    }

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
