use crate::analyzers::{generate_daily_summary, generate_summary};
use crate::error::{Result, WeatherError};
use crate::readers::CsvReader;
use crate::utils::constants::INPUT_EXTENSION;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overview and daily breakdown for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub days: usize,
    pub overview: String,
    pub daily: String,
}

impl FileSummary {
    pub fn report(&self) -> String {
        format!(
            "==== {} ====\n{}\n{}",
            self.path.display(),
            self.overview,
            self.daily
        )
    }
}

/// Summarises many weather files at once. Each file is independent, so
/// they are spread across a rayon pool.
pub struct BatchProcessor {
    max_workers: usize,
    reader: CsvReader,
    silent: bool,
}

impl BatchProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            reader: CsvReader::new(),
            silent: true,
        }
    }

    pub fn with_reader(mut self, reader: CsvReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.silent = !show_progress;
        self
    }

    /// List the `.csv` files directly inside `dir`, sorted by name.
    pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_input = path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));

            if is_input {
                inputs.push(path);
            }
        }

        inputs.sort();
        debug!(dir = %dir.display(), files = inputs.len(), "collected input files");
        Ok(inputs)
    }

    /// Summarise a single file.
    pub fn summarise_file(&self, path: &Path) -> Result<FileSummary> {
        let summarise = || -> Result<FileSummary> {
            let series = self.reader.read_series(path)?;
            Ok(FileSummary {
                path: path.to_path_buf(),
                days: series.len(),
                overview: generate_summary(&series)?,
                daily: generate_daily_summary(&series)?,
            })
        };

        summarise().map_err(|e| e.in_file(path))
    }

    /// Summarise every file, returning results in the order of `paths`.
    /// The first failing file aborts the batch.
    pub fn process_files(&self, paths: &[PathBuf]) -> Result<Vec<FileSummary>> {
        let progress = ProgressReporter::new(paths.len() as u64, "Summarising files...", self.silent);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| WeatherError::Config(e.to_string()))?;

        let summaries: Result<Vec<FileSummary>> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = self.summarise_file(path);
                    progress.increment(1);
                    result
                })
                .collect()
        });
        let summaries = summaries?;

        progress.finish_with_message(&format!("Summarised {} files", summaries.len()));
        info!(files = summaries.len(), workers = self.max_workers, "batch complete");

        Ok(summaries)
    }

    /// Collect and summarise every weather file in `dir`.
    pub fn process_directory(&self, dir: &Path) -> Result<Vec<FileSummary>> {
        let inputs = Self::collect_inputs(dir)?;
        self.process_files(&inputs)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_collect_inputs_filters_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        write_file(dir.path(), "b.csv", "date,min,max\n");
        write_file(dir.path(), "a.CSV", "date,min,max\n");
        write_file(dir.path(), "notes.txt", "ignored");

        let inputs = BatchProcessor::collect_inputs(dir.path())?;
        let names: Vec<_> = inputs
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();

        assert_eq!(names, vec!["a.CSV", "b.csv"]);
        Ok(())
    }

    #[test]
    fn test_process_directory_keeps_order() -> Result<()> {
        let dir = TempDir::new()?;
        write_file(
            dir.path(),
            "perth.csv",
            "date,min,max\n2021-07-05T07:00:00+08:00,59,68\n",
        );
        write_file(
            dir.path(),
            "albany.csv",
            "date,min,max\n2021-07-05T07:00:00+08:00,50,60\n2021-07-06T07:00:00+08:00,48,61\n",
        );

        let summaries = BatchProcessor::new(2).process_directory(dir.path())?;

        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].path.ends_with("albany.csv"));
        assert_eq!(summaries[0].days, 2);
        assert!(summaries[0].overview.starts_with("2 Day Overview\n"));
        assert!(summaries[1].path.ends_with("perth.csv"));
        assert!(summaries[1].daily.contains("Minimum Temperature: 15.0°C"));
        assert!(summaries[1].report().contains("perth.csv"));
        Ok(())
    }

    #[test]
    fn test_failing_file_aborts_batch() -> Result<()> {
        let dir = TempDir::new()?;
        write_file(dir.path(), "empty.csv", "date,min,max\n");

        let err = BatchProcessor::new(1)
            .process_directory(dir.path())
            .unwrap_err();

        match err {
            WeatherError::InFile { path, source } => {
                assert!(path.ends_with("empty.csv"));
                assert!(matches!(*source, WeatherError::EmptyInput(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }
}
