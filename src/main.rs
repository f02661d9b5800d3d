mod cli;
mod error;
mod parse;
mod settings;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::CliError;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let config = settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            file,
            limit,
            version,
            blocks,
        } => parse::execute(&file, settings::merge(config, limit, version), blocks),
        Commands::Latest { file } => parse::latest(&file, config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        ui::error_message(&err.user_message());
        if let Some(label) = unrecognized_label(&err) {
            ui::hint_message(&format!(
                "rename the '### {label}' header to a known category or remove it"
            ));
        }
        process::exit(1);
    }
}

fn unrecognized_label(err: &CliError) -> Option<&str> {
    match err {
        CliError::Changelog(inner) => inner.unrecognized_label(),
        CliError::WithContext(_, inner) => unrecognized_label(inner),
        _ => None,
    }
}
