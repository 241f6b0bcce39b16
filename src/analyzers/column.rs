use serde::{Deserialize, Serialize};

use crate::analyzers::extremes::{find_max, find_min, Extremum};
use crate::analyzers::mean::calculate_mean;
use crate::error::{Result, WeatherError};
use crate::models::Numeric;

/// Standalone statistics over one raw numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub count: usize,
    pub min: Extremum,
    pub max: Extremum,
    pub mean: f64,
}

impl ColumnStatistics {
    pub fn from_values<T: Numeric>(values: &[T]) -> Result<Self> {
        let empty = || WeatherError::EmptyInput("column has no values".to_string());
        let min = find_min(values)?.ok_or_else(empty)?;
        let max = find_max(values)?.ok_or_else(empty)?;
        let mean = calculate_mean(values)?;

        Ok(Self {
            count: values.len(),
            min,
            max,
            mean,
        })
    }

    pub fn summary(&self) -> String {
        let (min, min_row) = self.min.as_tuple();
        let (max, max_row) = self.max.as_tuple();
        format!(
            "Values: {}\n\
            Minimum: {} (row {})\n\
            Maximum: {} (row {})\n\
            Mean: {:.2}",
            self.count, min, min_row, max, max_row, self.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_statistics() {
        let stats = ColumnStatistics::from_values(&[49, 57, 49, 71, 71]).unwrap();

        assert_eq!(stats.count, 5);
        assert_eq!(stats.min.as_tuple(), (49.0, 2));
        assert_eq!(stats.max.as_tuple(), (71.0, 4));
        assert!((stats.mean - 59.4).abs() < 1e-9);
        assert_eq!(
            stats.summary(),
            "Values: 5\nMinimum: 49 (row 2)\nMaximum: 71 (row 4)\nMean: 59.40"
        );
    }

    #[test]
    fn test_empty_column_fails() {
        let empty: Vec<f64> = Vec::new();
        assert!(matches!(
            ColumnStatistics::from_values(&empty),
            Err(WeatherError::EmptyInput(_))
        ));
    }
}
