//! Core library for the `weather-app` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client behind a provider trait
//! - Message formatters for a lookup result
//! - The search view state machine
//!
//! It is used by `weather-app`, but can also be reused by other front ends.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use format::WeatherSummary;
pub use model::{Query, TemperatureUnit, ValidationError, WeatherRecord};
pub use provider::{FetchError, WeatherApiProvider, WeatherProvider};
pub use view::{Submission, ViewState, WeatherView};
