use chrono::Timelike;
use tracing::{debug, info, warn};

use crate::{
    Query, WeatherRecord,
    format::WeatherSummary,
    provider::{FetchError, WeatherProvider},
};

pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Loading...";

/// What the widget is currently showing. A record and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading(Query),
    Success(WeatherRecord),
    Error(String),
}

/// Result of pressing the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The request may be dispatched; the view is now loading.
    Dispatched(Query),
    /// Blank input; the view shows the validation error and nothing is sent.
    Invalid,
    /// A request is already in flight; nothing changed.
    Busy,
}

/// Input text plus lookup state for one search form.
#[derive(Debug)]
pub struct WeatherView<P> {
    provider: P,
    input: String,
    state: ViewState,
}

impl<P: WeatherProvider> WeatherView<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, input: String::new(), state: ViewState::Idle }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading(_))
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() { LOADING_LABEL } else { SEARCH_LABEL }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match &self.state {
            ViewState::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn summary(&self, now: &impl Timelike) -> Option<WeatherSummary> {
        self.record().map(|record| WeatherSummary::new(record, now))
    }

    /// Validate the current input and, if acceptable, enter the loading state.
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_loading() {
            debug!("submit ignored while a request is pending");
            return Submission::Busy;
        }

        match Query::parse(&self.input) {
            Ok(query) => {
                self.state = ViewState::Loading(query.clone());
                Submission::Dispatched(query)
            }
            Err(err) => {
                self.state = ViewState::Error(err.to_string());
                Submission::Invalid
            }
        }
    }

    /// Record the outcome of the in-flight request. Ignored unless loading.
    pub fn settle(&mut self, outcome: Result<WeatherRecord, FetchError>) {
        let ViewState::Loading(query) = &self.state else {
            warn!("settle called with no request in flight");
            return;
        };

        self.state = match outcome {
            Ok(record) => {
                info!(query = %query, location = %record.location, "weather lookup succeeded");
                ViewState::Success(record)
            }
            Err(err) => {
                warn!(query = %query, error = %err, "weather lookup failed");
                ViewState::Error(err.user_message().to_string())
            }
        };
    }

    /// Validate, fetch, and settle in one step.
    pub async fn submit(&mut self) -> &ViewState {
        if let Submission::Dispatched(query) = self.begin_submit() {
            let outcome = self.provider.current(&query).await;
            self.settle(outcome);
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TemperatureUnit, provider::NOT_FOUND_MESSAGE};
    use async_trait::async_trait;
    use chrono::NaiveTime;
    use reqwest::StatusCode;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Default)]
    struct StubProvider {
        calls: AtomicUsize,
        last_query: Mutex<Option<String>>,
        fail: bool,
    }

    impl StubProvider {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, query: &Query) -> Result<WeatherRecord, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.to_string());

            if self.fail {
                return Err(FetchError::Status {
                    status: StatusCode::BAD_REQUEST,
                    body: "No matching location found.".into(),
                });
            }

            Ok(reykjavik())
        }
    }

    fn reykjavik() -> WeatherRecord {
        WeatherRecord {
            temperature: -5.0,
            condition: "Fog".into(),
            location: "Reykjavik".into(),
            unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn starts_idle() {
        let view = WeatherView::new(StubProvider::default());
        assert_eq!(view.state(), &ViewState::Idle);
        assert_eq!(view.submit_label(), "Search");
        assert!(view.can_submit());
    }

    #[tokio::test]
    async fn successful_submit_stores_trimmed_query_result() {
        let mut view = WeatherView::new(StubProvider::default());
        view.set_input("  reykjavik  ");

        let state = view.submit().await.clone();

        assert_eq!(state, ViewState::Success(reykjavik()));
        assert_eq!(view.error(), None);
        assert_eq!(view.provider.last_query.lock().unwrap().as_deref(), Some("reykjavik"));
        assert_eq!(view.submit_label(), "Search");
    }

    #[tokio::test]
    async fn blank_input_never_reaches_provider() {
        let mut view = WeatherView::new(StubProvider::default());
        view.set_input("Reykjavik");
        view.submit().await;
        assert!(view.record().is_some());

        for blank in ["", "   ", "\t"] {
            view.set_input(blank);
            view.submit().await;

            assert_eq!(view.error(), Some("Please enter a valid location."));
            assert_eq!(view.record(), None);
        }
        assert_eq!(view.provider.calls(), 1);
    }

    #[tokio::test]
    async fn failure_clears_previous_record() {
        let mut view = WeatherView::new(StubProvider::default());
        view.set_input("Reykjavik");
        view.submit().await;
        assert!(view.record().is_some());

        view.provider = StubProvider::failing();
        view.submit().await;

        assert_eq!(view.error(), Some(NOT_FOUND_MESSAGE));
        assert_eq!(view.record(), None);
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let mut view = WeatherView::new(StubProvider::failing());
        view.set_input("Atlantis");
        view.submit().await;
        assert_eq!(view.error(), Some("City not found, please try again"));

        view.provider = StubProvider::default();
        view.submit().await;

        assert_eq!(view.error(), None);
        assert_eq!(view.record(), Some(&reykjavik()));
    }

    #[test]
    fn loading_window_blocks_resubmission() {
        let mut view = WeatherView::new(StubProvider::default());
        view.set_input("Reykjavik");

        let query = match view.begin_submit() {
            Submission::Dispatched(query) => query,
            other => panic!("unexpected submission: {other:?}"),
        };
        assert_eq!(query.as_str(), "Reykjavik");
        assert!(view.is_loading());
        assert!(!view.can_submit());
        assert_eq!(view.submit_label(), "Loading...");

        for input in ["Oslo", "", "  "] {
            view.set_input(input);
            assert_eq!(view.begin_submit(), Submission::Busy);
            assert_eq!(view.state(), &ViewState::Loading(query.clone()));
        }

        view.settle(Ok(reykjavik()));
        assert!(!view.is_loading());
        assert!(view.can_submit());
        assert_eq!(view.submit_label(), "Search");
    }

    #[test]
    fn settle_without_request_is_ignored() {
        let mut view = WeatherView::new(StubProvider::default());
        view.settle(Ok(reykjavik()));
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn summary_only_for_success() {
        let night = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let day = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        let mut view = WeatherView::new(StubProvider::default());
        assert!(view.summary(&night).is_none());

        view.set_input("Reykjavik");
        view.submit().await;

        let summary = view.summary(&night).unwrap();
        assert!(summary.temperature.text.contains("freezing at -5°C"));
        assert_eq!(summary.condition.text, "Be careful! It's foggy outside.");
        assert_eq!(summary.location.text, "Reykjavik At Night");
        assert_eq!(view.summary(&day).unwrap().location.text, "Reykjavik During the day");
    }
}
