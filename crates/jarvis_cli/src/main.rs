use clap::Parser;
use jarvis_cli::app::execute;
use jarvis_cli::cli::{Cli, parse_command};
use jarvis_cli::logging;
use jarvis_core::error::AppError;
use jarvis_core::model::Document;
use jarvis_core::storage::json_store;
use std::io::{self, Write};

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let command = parse_command(&cli.args)?;
    tracing::debug!(?command, "dispatching");

    let mut rng = rand::rng();
    let mut buffer = Vec::new();

    if command.needs_store() {
        let path = match cli.store {
            Some(path) => path,
            None => json_store::store_path()?,
        };
        let mut document = json_store::load_document(&path)?;
        let dirty = execute(&command, &mut document, &mut rng, &mut buffer)?;
        if dirty {
            json_store::save_document(&path, &document)?;
        }
    } else {
        let mut scratch = Document::default();
        execute(&command, &mut scratch, &mut rng, &mut buffer)?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
