use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{Result, WeatherError};
use crate::utils::constants::DEFAULT_DELIMITER;

/// Reader and batch settings, optionally loaded from a TOML/YAML/JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(equal = 1))]
    pub delimiter: String,

    pub skip_header: bool,

    #[validate(range(min = 1, max = 256))]
    pub max_workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            skip_header: true,
            max_workers: num_cpus::get(),
        }
    }
}

impl Settings {
    /// Load settings, layering `path` (if any) over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("delimiter", defaults.delimiter)?
            .set_default("skip_header", defaults.skip_header)?
            .set_default("max_workers", defaults.max_workers as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(WeatherError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }
}
