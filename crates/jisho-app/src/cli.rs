use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "jisho-fill",
    version,
    about = "Look up Japanese words on Jisho.org and fill note fields"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Log level, ignored when RUST_LOG is set
    #[arg(long = "log-level", value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevelArg,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a word and print the extracted record
    Lookup {
        word: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a word and write the record into a JSON note file
    Fill {
        /// Note file: a JSON object of field name to text
        #[arg(long, value_name = "FILE")]
        note: PathBuf,

        /// Word to look up; defaults to the note's current headword
        word: Option<String>,
    },

    /// Show which field a logical name would be written to
    Match {
        logical: String,

        #[arg(required = true)]
        fields: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
