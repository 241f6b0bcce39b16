pub mod cell;
pub mod daily;

pub use cell::{Cell, Numeric};
pub use daily::{DailyRecord, WeatherSeries};
