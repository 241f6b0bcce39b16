use crate::error::{Result, WeatherError};
use crate::models::{Cell, WeatherSeries};
use crate::settings::Settings;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Reads delimited weather tables laid out as `date, low_f, high_f, ...`.
pub struct CsvReader {
    skip_header: bool,
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            skip_header: true,
            delimiter: b',',
        }
    }

    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new()
            .with_skip_header(settings.skip_header)
            .with_delimiter(settings.delimiter_byte()?))
    }

    /// Read every data row as typed cells. Blank rows are dropped.
    pub fn read_rows(&self, path: &Path) -> Result<Vec<Vec<Cell>>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(self.skip_header)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        let mut skipped = 0;

        for result in reader.records() {
            let record = result?;
            let row: Vec<Cell> = record.iter().map(Cell::parse).collect();

            if row.iter().all(Cell::is_blank) {
                skipped += 1;
                continue;
            }

            rows.push(row);
        }

        debug!(
            path = %path.display(),
            rows = rows.len(),
            skipped,
            "read weather table"
        );

        Ok(rows)
    }

    /// Read a file straight into a typed weather series.
    pub fn read_series(&self, path: &Path) -> Result<WeatherSeries> {
        let rows = self.read_rows(path)?;
        WeatherSeries::from_rows(&rows)
    }

    /// Extract a single column, e.g. all the lows, for standalone statistics.
    pub fn read_column(&self, path: &Path, index: usize) -> Result<Vec<Cell>> {
        let rows = self.read_rows(path)?;
        let mut column = Vec::with_capacity(rows.len());

        for (row_number, row) in rows.into_iter().enumerate() {
            match row.into_iter().nth(index) {
                Some(cell) => column.push(cell),
                None => warn!(row = row_number, index, "row has no such column, skipping"),
            }
        }

        if column.is_empty() {
            return Err(WeatherError::MissingColumn {
                index,
                path: path.display().to_string(),
            });
        }

        Ok(column)
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
