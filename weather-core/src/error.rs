use std::path::PathBuf;

/// The only way a lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("City not found")]
    CityNotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Humidity for '{city}' must be within 0..=100, got {value}")]
    Humidity { city: String, value: u8 },

    #[error("Wind speed for '{city}' must be a finite non-negative number, got {value}")]
    WindSpeed { city: String, value: f64 },
}
