use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, WeatherError};
use crate::utils::constants::{
    DISPLAY_DATE_FORMAT, ISO_DATETIME_FORMATS, ISO_DATE_FORMAT, ISO_OFFSET_DATETIME_FORMATS,
};

/// Parse an ISO-8601 date or date-time, with or without a UTC offset.
///
/// When an offset is present the calendar date is taken in that offset,
/// not converted to UTC.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    for format in ISO_OFFSET_DATETIME_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date_naive());
        }
    }

    for format in ISO_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|source| {
        WeatherError::DateParse {
            input: input.to_string(),
            source,
        }
    })
}

/// Render an ISO-8601 timestamp as "Weekday DD Month YYYY".
///
/// Weekday and month names are always English.
pub fn convert_date(iso_timestamp: &str) -> Result<String> {
    let date = parse_iso_date(iso_timestamp)?;
    Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
}
