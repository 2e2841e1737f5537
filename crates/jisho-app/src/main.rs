use std::process::ExitCode;

use clap::Parser;
use jisho_client::JishoClient;
use jisho_config::Config;

mod cli;
mod commands;
mod logging;
mod note_file;


use crate::cli::{Cli, Command};
use crate::commands::{FillOutcome, run_fill, run_lookup, run_match};
use crate::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Optional: .env is only for local overrides
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level, cli.log_format) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Lookup { word, json } => {
            let client = JishoClient::new(&config.network)?;
            match run_lookup(&client, &word).await {
                Some(record) if json => {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                    Ok(ExitCode::SUCCESS)
                }
                Some(record) => {
                    println!("Found result:\n\n{record}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("No results found or error occurred.");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Fill { note, word } => {
            let client = JishoClient::new(&config.network)?;
            match run_fill(&client, &config, &note, word).await? {
                FillOutcome::NoWord { field } => {
                    println!("No word given and the note's '{field}' field is empty.");
                    Ok(ExitCode::FAILURE)
                }
                FillOutcome::NoResult { word } => {
                    println!("No results found on Jisho.org for '{word}'");
                    Ok(ExitCode::FAILURE)
                }
                FillOutcome::Filled { imported, .. } if imported.is_empty() => {
                    println!("No matching fields found in your note.");
                    println!("Check the field_mappings in your config.");
                    Ok(ExitCode::FAILURE)
                }
                FillOutcome::Filled { imported, .. } => {
                    println!("Updated: {}", imported.join(", "));
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
        Command::Match { logical, fields } => match run_match(&logical, &fields) {
            Some(field) => {
                println!("{field}");
                Ok(ExitCode::SUCCESS)
            }
            None => {
                println!("No matching field for '{logical}'");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
