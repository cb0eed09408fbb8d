use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use wordcount_core::Query;

/// Count word frequency in text
#[derive(Parser, Debug)]
#[command(name = "wordcount", version, about, long_about = None)]
pub struct Args {
    /// Text to analyze. If omitted, reads from stdin.
    #[arg(short, long, conflicts_with = "request")]
    pub text: Option<String>,

    /// Run a JSON request file instead of a subcommand
    #[arg(short, long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show how often WORD occurs, ignoring case
    Frequency { word: String },
    /// Show the N most frequent words
    Top {
        #[arg(default_value_t = 10, allow_negative_numbers = true)]
        n: i64,
    },
    /// Show every word sharing the highest count
    Highest,
}

impl Command {
    pub fn to_query(&self) -> Query {
        match self {
            Command::Frequency { word } => Query::Frequency { word: word.clone() },
            Command::Top { n } => Query::MostFrequent { n: Value::from(*n) },
            Command::Highest => Query::Highest,
        }
    }
}
