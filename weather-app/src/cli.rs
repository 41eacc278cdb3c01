use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_app_core::{Config, ViewState, WeatherProvider, WeatherView};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-app", version, about = "Look up the current weather for a city")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show the current weather for a location and exit.
    Show {
        /// City or location name.
        location: String,

        /// Print the raw lookup result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search interactively until cancelled (default).
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure(),
            Command::Show { location, json } => {
                let provider = Config::load()?.provider()?;
                show(WeatherView::new(provider), location, json).await
            }
            Command::Search => {
                let provider = Config::load()?.provider()?;
                search(WeatherView::new(provider)).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show<P: WeatherProvider>(
    mut view: WeatherView<P>,
    location: String,
    json: bool,
) -> anyhow::Result<()> {
    view.set_input(location);
    view.submit().await;

    if let Some(message) = view.error() {
        bail!("{message}");
    }

    match view.state() {
        ViewState::Success(record) if json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        _ => print_result(&view),
    }

    Ok(())
}

async fn search<P: WeatherProvider>(mut view: WeatherView<P>) -> anyhow::Result<()> {
    println!("Welcome to Weather App.");
    println!("Search the current weather according to your city! (Esc to quit)\n");

    loop {
        let input = match Text::new(&format!("[{}]", view.submit_label()))
            .with_placeholder("Enter a city name")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("search cancelled");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read location"),
        };

        view.set_input(input);
        if view.can_submit() {
            println!("{}", weather_app_core::view::LOADING_LABEL);
            view.submit().await;
        }

        print_result(&view);
        println!();
    }
}

fn print_result<P: WeatherProvider>(view: &WeatherView<P>) {
    if let Some(message) = view.error() {
        eprintln!("{message}");
    }

    if let Some(summary) = view.summary(&chrono::Local::now()) {
        println!("{summary}");
    }
}
