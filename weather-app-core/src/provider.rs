use crate::{Query, WeatherRecord};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// The only message a user ever sees for a failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "City not found, please try again";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach weather service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather service responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode weather response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Every variant maps to the same message.
    pub fn user_message(&self) -> &'static str {
        NOT_FOUND_MESSAGE
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &Query) -> Result<WeatherRecord, FetchError>;
}
