use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const INVALID_LOCATION_MESSAGE: &str = "Please enter a valid location.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter a valid location.")]
pub struct ValidationError;

/// A trimmed, non-empty location name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TemperatureUnit {
    Celsius,
    /// Placeholder for units nothing upstream produces yet, e.g. "F".
    Other(String),
}

impl TemperatureUnit {
    pub fn code(&self) -> &str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Other(code) => code,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for TemperatureUnit {
    fn from(value: String) -> Self {
        if value == "C" { TemperatureUnit::Celsius } else { TemperatureUnit::Other(value) }
    }
}

impl From<TemperatureUnit> for String {
    fn from(value: TemperatureUnit) -> Self {
        value.code().to_string()
    }
}

/// Normalized current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: f64,
    pub condition: String,
    /// Name as resolved by the remote service, which may differ from the query.
    pub location: String,
    pub unit: TemperatureUnit,
}
