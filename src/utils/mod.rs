pub mod constants;
pub mod conversion;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use conversion::{
    fahrenheit_to_celsius, fahrenheit_to_celsius_rounded, format_celsius, format_temperature,
    round_one_decimal,
};
pub use dates::{convert_date, parse_iso_date};
pub use progress::ProgressReporter;
