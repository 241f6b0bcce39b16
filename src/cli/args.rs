use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-summary")]
#[command(about = "Summarise daily weather observations (date, low °F, high °F)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the multi-day overview for a weather table
    Overview {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,
    },

    /// Print one block per day for a weather table
    Daily {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,
    },

    /// Print the overview followed by the daily breakdown
    Report {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,
    },

    /// Minimum, maximum and mean of a single column
    Column {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,

        #[arg(long, default_value = "1", help = "Zero-based column index")]
        index: usize,
    },

    /// Report on every CSV file in a directory
    Batch {
        #[arg(short, long, help = "Directory containing CSV files")]
        input_dir: PathBuf,

        #[arg(long, help = "Worker threads [default: from settings]")]
        max_workers: Option<usize>,

        #[arg(long, default_value = "false", help = "Hide the progress bar")]
        quiet: bool,
    },
}
