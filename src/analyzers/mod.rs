pub mod column;
pub mod extremes;
pub mod mean;
pub mod summary;

pub use column::ColumnStatistics;
pub use extremes::{find_max, find_min, Extremum};
pub use mean::calculate_mean;
pub use summary::{generate_daily_summary, generate_summary, OverviewStatistics};
