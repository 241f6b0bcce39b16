use std::fmt::Display;

use crate::utils::constants::DEGREE_SYMBOL;

/// Convert Fahrenheit to Celsius without rounding.
///
/// Rounding is left to the display site so that sums and averages are
/// computed on exact values.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round to one decimal place.
///
/// Rounds on the exact binary value, so the result always agrees with the
/// `{:.1}` display used by [`format_celsius`].
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Convert Fahrenheit to Celsius rounded to one decimal place, for callers
/// that display a single converted value.
pub fn fahrenheit_to_celsius_rounded(fahrenheit: f64) -> f64 {
    round_one_decimal(fahrenheit_to_celsius(fahrenheit))
}

/// Append the degree Celsius suffix. No conversion is applied.
pub fn format_temperature<T: Display>(value: T) -> String {
    format!("{}{}", value, DEGREE_SYMBOL)
}

/// Format a Celsius value to exactly one decimal place with the suffix.
pub fn format_celsius(celsius: f64) -> String {
    format_temperature(format!("{:.1}", celsius))
}
