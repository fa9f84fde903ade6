use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::{
    error::CatalogError,
    model::{Condition, WeatherRecord},
};

/// Immutable mapping from city name to weather record.
///
/// Keys are matched exactly: no case folding, no trimming.
#[derive(Debug, Clone, Default)]
pub struct WeatherCatalog {
    records: HashMap<String, WeatherRecord>,
}

/// On-disk shape of a catalog extension file:
///
/// ```toml
/// [[city]]
/// city = "Berlin"
/// country = "Germany"
/// temperature_c = 12
/// condition = "Rainy"
/// humidity_pct = 80
/// wind_speed_kph = 14
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    city: Vec<WeatherRecord>,
}

impl WeatherCatalog {
    /// Build a catalog from records, keyed by each record's `city`.
    /// Later records replace earlier ones with the same key.
    pub fn from_records(
        records: impl IntoIterator<Item = WeatherRecord>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for record in records {
            validate(&record)?;
            map.insert(record.city.clone(), record);
        }
        Ok(Self { records: map })
    }

    /// The seven cities the widget ships with.
    pub fn builtin() -> Self {
        let records = builtin_records()
            .map(|record| (record.city.clone(), record))
            .collect();

        Self { records }
    }

    /// Built-in cities extended (and overridden) by the entries of a TOML file.
    pub fn builtin_with_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&contents)?;

        let catalog = Self::from_records(builtin_records().chain(file.city))?;

        tracing::debug!(path = %path.display(), cities = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn lookup(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.get(city)
    }

    /// City names in alphabetical order.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &WeatherRecord) -> Result<(), CatalogError> {
    if record.humidity_pct > 100 {
        return Err(CatalogError::Humidity {
            city: record.city.clone(),
            value: record.humidity_pct,
        });
    }
    if !record.wind_speed_kph.is_finite() || record.wind_speed_kph < 0.0 {
        return Err(CatalogError::WindSpeed {
            city: record.city.clone(),
            value: record.wind_speed_kph,
        });
    }
    Ok(())
}

fn builtin_records() -> impl Iterator<Item = WeatherRecord> {
    BUILTIN.iter().map(
        |&(city, country, temperature_c, condition, humidity_pct, wind_speed_kph)| WeatherRecord {
            city: city.to_string(),
            country: country.to_string(),
            temperature_c,
            condition: Condition::from(condition),
            humidity_pct,
            wind_speed_kph,
        },
    )
}

// city, country, temperature (C), condition, humidity (%), wind (km/h)
type BuiltinRow = (&'static str, &'static str, i32, &'static str, u8, f64);

const BUILTIN: &[BuiltinRow] = &[
    ("London", "UK", 18, "Cloudy", 72, 12.0),
    ("New York", "USA", 22, "Clear", 58, 8.0),
    ("Tokyo", "Japan", 25, "Rainy", 85, 15.0),
    ("Paris", "France", 16, "Cloudy", 68, 10.0),
    ("Sydney", "Australia", 28, "Clear", 45, 18.0),
    ("Moscow", "Russia", -5, "Snowy", 90, 20.0),
    ("Mumbai", "India", 32, "Clear", 78, 12.0),
];
