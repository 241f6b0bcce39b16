/// Suffix appended to every displayed temperature
pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

/// Human readable date layout, e.g. "Tuesday 06 July 2021"
pub const DISPLAY_DATE_FORMAT: &str = "%A %d %B %Y";

/// Accepted ISO-8601 layouts carrying a UTC offset, tried after RFC 3339
pub const ISO_OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];

/// Accepted ISO-8601 layouts without an offset, tried in order
pub const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Column layout of a weather table
pub const DATE_COLUMN: usize = 0;
pub const LOW_COLUMN: usize = 1;
pub const HIGH_COLUMN: usize = 2;

/// Processing defaults
pub const DEFAULT_DELIMITER: &str = ",";
pub const INPUT_EXTENSION: &str = "csv";
