use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};
use crate::models::cell::{Cell, Numeric};
use crate::utils::constants::{DATE_COLUMN, HIGH_COLUMN, LOW_COLUMN};

/// One day of observations: an ISO-8601 timestamp plus the low and high
/// temperatures in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub low_f: f64,
    pub high_f: f64,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, low_f: f64, high_f: f64) -> Self {
        Self {
            date: date.into(),
            low_f,
            high_f,
        }
    }

    /// Build a record from a row laid out as `[date, low_f, high_f, ...]`.
    /// Columns past the third are ignored.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        if cells.len() <= HIGH_COLUMN {
            return Err(WeatherError::InvalidFormat(format!(
                "Expected at least 3 columns (date, low, high), found {}",
                cells.len()
            )));
        }

        Ok(Self {
            date: cells[DATE_COLUMN].as_text(),
            low_f: cells[LOW_COLUMN].to_f64()?,
            high_f: cells[HIGH_COLUMN].to_f64()?,
        })
    }
}

/// Daily records in the order they appear in the source table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    records: Vec<DailyRecord>,
}

impl WeatherSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let records = rows
            .iter()
            .map(|row| DailyRecord::from_cells(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.low_f).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.high_f).collect()
    }
}

impl<'a> IntoIterator for &'a WeatherSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
