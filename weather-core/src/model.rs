use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::units;

/// Categorical weather state driving icon and theme selection.
///
/// Serialized as its plain name. Text outside the four known names is kept
/// verbatim in `Unknown`, so it displays and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
    Unknown(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Unknown(text) => text,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Clear => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Snowy => "❄️",
            Condition::Unknown(_) => "🌤️",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            Condition::Clear => Theme::Clear,
            Condition::Cloudy => Theme::Cloudy,
            Condition::Rainy => Theme::Rainy,
            Condition::Snowy => Theme::Snowy,
            Condition::Unknown(_) => Theme::FALLBACK,
        }
    }
}

impl From<&str> for Condition {
    fn from(text: &str) -> Self {
        match text {
            "Clear" => Condition::Clear,
            "Cloudy" => Condition::Cloudy,
            "Rainy" => Condition::Rainy,
            "Snowy" => Condition::Snowy,
            other => Condition::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Condition {
    fn from(text: String) -> Self {
        Condition::from(text.as_str())
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Unknown(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutually exclusive style markers applied to the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
}

impl Theme {
    pub const FALLBACK: Theme = Theme::Clear;

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Clear => "theme-clear",
            Theme::Cloudy => "theme-cloudy",
            Theme::Rainy => "theme-rainy",
            Theme::Snowy => "theme-snowy",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Temperature unit used for display. Storage is always Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// Render a Celsius reading in this unit, e.g. `"77°F"`.
    pub fn format(&self, celsius: i32) -> String {
        let value = match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => units::to_fahrenheit(celsius),
        };
        format!("{value}{}", self.symbol())
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempUnit::Celsius => f.write_str("Celsius"),
            TempUnit::Fahrenheit => f.write_str("Fahrenheit"),
        }
    }
}

impl FromStr for TempUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TempUnit::Celsius),
            "f" | "fahrenheit" => Ok(TempUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

/// A single city's weather snapshot. Never mutated after it enters the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    pub temperature_c: i32,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_speed_kph: f64,
}

impl WeatherRecord {
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed_kph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        condition: Condition,
    }

    #[test]
    fn unknown_condition_falls_back_to_clear_theme() {
        let foggy = Condition::from("Foggy");

        assert_eq!(foggy.theme(), Theme::Clear);
        assert_eq!(foggy.icon(), "🌤️");
        assert_eq!(foggy.as_str(), "Foggy");
        assert_eq!(Condition::Snowy.theme().id(), "theme-snowy");
    }

    #[test]
    fn condition_names_are_case_sensitive() {
        assert_eq!(Condition::from("Rainy"), Condition::Rainy);
        assert_eq!(Condition::from("rainy"), Condition::Unknown("rainy".into()));
    }

    #[test]
    fn unrecognized_condition_text_is_kept() {
        let w: Wrapper = toml::from_str(r#"condition = "Foggy""#).unwrap();
        assert_eq!(w.condition, Condition::Unknown("Foggy".into()));
        assert_eq!(toml::to_string(&w).unwrap(), "condition = \"Foggy\"\n");

        let w: Wrapper = toml::from_str(r#"condition = "Rainy""#).unwrap();
        assert_eq!(w.condition, Condition::Rainy);
        assert_eq!(toml::to_string(&w).unwrap(), "condition = \"Rainy\"\n");
    }

    #[test]
    fn unit_format_converts_only_for_fahrenheit() {
        assert_eq!(TempUnit::Celsius.format(25), "25°C");
        assert_eq!(TempUnit::Fahrenheit.format(25), "77°F");
        assert_eq!(TempUnit::Fahrenheit.format(-5), "23°F");
    }

    #[test]
    fn unit_toggle_and_parse() {
        assert_eq!(TempUnit::Celsius.toggle(), TempUnit::Fahrenheit);
        assert_eq!(TempUnit::Fahrenheit.toggle(), TempUnit::Celsius);
        assert_eq!("F".parse::<TempUnit>().unwrap(), TempUnit::Fahrenheit);
        assert!("kelvin".parse::<TempUnit>().is_err());
    }

    #[test]
    fn record_labels() {
        let record = WeatherRecord {
            city: "Paris".into(),
            country: "France".into(),
            temperature_c: 16,
            condition: Condition::Cloudy,
            humidity_pct: 68,
            wind_speed_kph: 10.0,
        };

        assert_eq!(record.location_label(), "Paris, France");
        assert_eq!(record.humidity_label(), "68%");
        assert_eq!(record.wind_label(), "10 km/h");
    }
}
