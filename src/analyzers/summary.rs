use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};
use crate::models::WeatherSeries;
use crate::utils::{convert_date, fahrenheit_to_celsius, format_celsius};

/// Aggregates behind the multi-day overview, in Celsius and unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStatistics {
    pub days: usize,
    pub min_temp: f64,
    pub min_temp_date: String,
    pub max_temp: f64,
    pub max_temp_date: String,
    pub avg_low: f64,
    pub avg_high: f64,
}

impl OverviewStatistics {
    /// Fold a series into its overview figures.
    ///
    /// Ties on the coldest low or hottest high keep the earliest day, since
    /// only a strictly lower or higher reading replaces the running value.
    pub fn from_series(series: &WeatherSeries) -> Result<Self> {
        if series.is_empty() {
            return Err(WeatherError::EmptyInput(
                "cannot summarise an empty weather series".to_string(),
            ));
        }

        let mut min_temp = f64::INFINITY;
        let mut min_temp_date = String::new();
        let mut max_temp = f64::NEG_INFINITY;
        let mut max_temp_date = String::new();
        let mut total_low = 0.0;
        let mut total_high = 0.0;

        for record in series {
            let day = convert_date(&record.date)?;
            let low = fahrenheit_to_celsius(record.low_f);
            let high = fahrenheit_to_celsius(record.high_f);

            if low < min_temp {
                min_temp = low;
                min_temp_date = day.clone();
            }

            if high > max_temp {
                max_temp = high;
                max_temp_date = day;
            }

            total_low += low;
            total_high += high;
        }

        let days = series.len();

        Ok(Self {
            days,
            min_temp,
            min_temp_date,
            max_temp,
            max_temp_date,
            avg_low: total_low / days as f64,
            avg_high: total_high / days as f64,
        })
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("{} Day Overview\n", self.days);
        summary += &format!(
            "  The lowest temperature will be {}, and will occur on {}.\n",
            format_celsius(self.min_temp),
            self.min_temp_date
        );
        summary += &format!(
            "  The highest temperature will be {}, and will occur on {}.\n",
            format_celsius(self.max_temp),
            self.max_temp_date
        );
        summary += &format!(
            "  The average low this week is {}.\n",
            format_celsius(self.avg_low)
        );
        summary += &format!(
            "  The average high this week is {}.\n",
            format_celsius(self.avg_high)
        );
        summary
    }
}

/// Overview of the whole series: coldest low, hottest high, and the
/// average low and high. Fails with `EmptyInput` on an empty series.
pub fn generate_summary(series: &WeatherSeries) -> Result<String> {
    Ok(OverviewStatistics::from_series(series)?.summary())
}

/// One block per day, in series order. An empty series yields an empty
/// string.
pub fn generate_daily_summary(series: &WeatherSeries) -> Result<String> {
    let mut summary = String::new();

    for record in series {
        let day = convert_date(&record.date)?;
        let low = fahrenheit_to_celsius(record.low_f);
        let high = fahrenheit_to_celsius(record.high_f);

        summary += &format!("---- {} ----\n", day);
        summary += &format!("  Minimum Temperature: {}\n", format_celsius(low));
        summary += &format!("  Maximum Temperature: {}\n\n", format_celsius(high));
    }

    Ok(summary)
}
