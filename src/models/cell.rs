use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, WeatherError};

/// A single cell read from a delimited file.
///
/// Cells that look like integers after trimming are stored as `Integer`,
/// everything else is kept verbatim (trimmed) as `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Integer(i64),
    Text(String),
}

impl Cell {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Cell::Integer(value),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(text) if text.trim().is_empty())
    }

    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Anything that can be coerced to a floating point value: numbers,
/// numeric strings, and numeric cells.
pub trait Numeric {
    fn to_f64(&self) -> Result<f64>;
}

fn parse_numeric_str(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| WeatherError::TypeMismatch {
            value: value.to_string(),
        })
}

impl Numeric for f64 {
    fn to_f64(&self) -> Result<f64> {
        Ok(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl Numeric for i32 {
    fn to_f64(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl Numeric for u32 {
    fn to_f64(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl Numeric for i64 {
    fn to_f64(&self) -> Result<f64> {
        Ok(*self as f64)
    }
}

impl Numeric for &str {
    fn to_f64(&self) -> Result<f64> {
        parse_numeric_str(self)
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Result<f64> {
        parse_numeric_str(self)
    }
}

impl Numeric for Cell {
    fn to_f64(&self) -> Result<f64> {
        match self {
            Cell::Integer(value) => Ok(*value as f64),
            Cell::Text(text) => parse_numeric_str(text),
        }
    }
}
