//! Human-readable commentary for a [`WeatherRecord`].
//!
//! All functions here are pure; the time of day is passed in rather than read
//! from the system clock.

use chrono::Timelike;
use std::fmt;

use crate::{TemperatureUnit, WeatherRecord};

pub fn temperature_message(temperature: f64, unit: &TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => {
            if temperature < 0.0 {
                format!("It's freezing at {temperature}°C! Bundle up!")
            } else if temperature < 10.0 {
                format!("It's quite cold at {temperature}°C! Wear warm clothes!")
            } else if temperature < 20.0 {
                format!("The temperature is {temperature}°C. Comfortable for a light jacket!")
            } else if temperature < 30.0 {
                format!("It's a pleasant {temperature}°C. Enjoy the nice weather!")
            } else {
                format!("It's hot at {temperature}°C. Stay hydrated!")
            }
        }
        TemperatureUnit::Other(code) => format!("{temperature}° {code}"),
    }
}

// NOTE: "Sunny" is compared against lowercased input and therefore never
// matches; sunny conditions fall through to the raw text.
// TODO: lowercase the key once the canned sunny sentence is confirmed as wanted.
const CONDITION_MESSAGES: &[(&str, &str)] = &[
    ("Sunny", "It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's cloudy today."),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstorms", "Thunderstorms are expected today."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful! It's foggy outside."),
];

/// Canned sentence for a known condition, or the text unchanged.
pub fn condition_message(condition: &str) -> String {
    let key = condition.to_lowercase();

    CONDITION_MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, msg)| (*msg).to_string())
        .unwrap_or_else(|| condition.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// Night runs from 18:00 up to (not including) 06:00.
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 18 || hour < 6 { DayPeriod::Night } else { DayPeriod::Day }
    }

    pub fn at(now: &impl Timelike) -> Self {
        Self::from_hour(now.hour())
    }

    pub fn phrase(self) -> &'static str {
        match self {
            DayPeriod::Day => "During the day",
            DayPeriod::Night => "At Night",
        }
    }
}

pub fn location_message(location: &str, now: &impl Timelike) -> String {
    format!("{location} {}", DayPeriod::at(now).phrase())
}

pub const TEMPERATURE_ICON: &str = "🌡️";
pub const CONDITION_ICON: &str = "☁️";
pub const LOCATION_ICON: &str = "📍";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub icon: &'static str,
    pub text: String,
}

/// The three result rows shown for a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSummary {
    pub temperature: SummaryRow,
    pub condition: SummaryRow,
    pub location: SummaryRow,
}

impl WeatherSummary {
    pub fn new(record: &WeatherRecord, now: &impl Timelike) -> Self {
        Self {
            temperature: SummaryRow {
                icon: TEMPERATURE_ICON,
                text: temperature_message(record.temperature, &record.unit),
            },
            condition: SummaryRow {
                icon: CONDITION_ICON,
                text: condition_message(&record.condition),
            },
            location: SummaryRow {
                icon: LOCATION_ICON,
                text: location_message(&record.location, now),
            },
        }
    }

    pub fn rows(&self) -> [&SummaryRow; 3] {
        [&self.temperature, &self.condition, &self.location]
    }
}

impl fmt::Display for WeatherSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}  {}", row.icon, row.text)?;
        }
        Ok(())
    }
}
