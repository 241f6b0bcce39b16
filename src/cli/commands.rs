use crate::analyzers::{generate_daily_summary, generate_summary, ColumnStatistics};
use crate::cli::args::{Cli, Commands};
use crate::processors::BatchProcessor;
use crate::readers::CsvReader;
use crate::settings::Settings;
use anyhow::{anyhow, Context};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, Level};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    debug!(?settings, "loaded settings");
    let reader = CsvReader::from_settings(&settings)?;

    match cli.command {
        Commands::Overview { input } => {
            let series = reader
                .read_series(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            print!("{}", generate_summary(&series)?);
        }

        Commands::Daily { input } => {
            let series = reader
                .read_series(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            print!("{}", generate_daily_summary(&series)?);
        }

        Commands::Report { input } => {
            let series = reader
                .read_series(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            println!("{}", generate_summary(&series)?);
            print!("{}", generate_daily_summary(&series)?);
        }

        Commands::Column { input, index } => {
            let column = reader
                .read_column(&input, index)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let stats = ColumnStatistics::from_values(&column)?;
            println!("{}", stats.summary());
        }

        Commands::Batch {
            input_dir,
            max_workers,
            quiet,
        } => {
            let processor = BatchProcessor::new(max_workers.unwrap_or(settings.max_workers))
                .with_reader(reader)
                .with_progress(!quiet);

            let summaries = processor.process_directory(&input_dir)?;
            if summaries.is_empty() {
                println!("No CSV files found in {}", input_dir.display());
                return Ok(());
            }

            for summary in &summaries {
                println!("{}", summary.report());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
