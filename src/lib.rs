pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;

pub use analyzers::{
    calculate_mean, find_max, find_min, generate_daily_summary, generate_summary, Extremum,
};
pub use error::{Result, WeatherError};
pub use models::{Cell, DailyRecord, Numeric, WeatherSeries};
pub use utils::{convert_date, fahrenheit_to_celsius, format_temperature};
