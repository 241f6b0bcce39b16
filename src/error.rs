use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error for '{input}': {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Type mismatch: '{value}' is not numeric")]
    TypeMismatch { value: String },

    #[error("Column {index} not found in {path}")]
    MissingColumn { index: usize, path: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("{path}: {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<WeatherError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl From<config::ConfigError> for WeatherError {
    fn from(err: config::ConfigError) -> Self {
        WeatherError::Config(err.to_string())
    }
}

impl WeatherError {
    /// Attach the input file a failure came from.
    pub fn in_file(self, path: &std::path::Path) -> Self {
        WeatherError::InFile {
            path: path.display().to_string(),
            source: Box::new(self),
        }
    }
}
