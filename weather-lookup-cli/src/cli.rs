use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{InquireError, Password, Select, Text};
use weather_lookup_core::{
    Config, Coordinates, DeviceLocation, Labels, Locale, Phase, StartupMode, WeatherLookup,
};

use crate::{location::PromptLocation, table::format_table};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Multi-day forecast for a city")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Per-run overrides on top of the saved config.
#[derive(Debug, Args)]
pub struct Overrides {
    /// CollectAPI key to use instead of the configured one.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true)]
    pub weather_url: Option<String>,

    #[arg(long, global = true)]
    pub geocode_url: Option<String>,

    /// Message language: "tr" or "en".
    #[arg(long, global = true, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Translate weekdays and descriptions to English.
    #[arg(long, global = true)]
    pub english: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, message language and response language.
    Configure,

    /// Show the forecast for a city.
    Show {
        /// City name.
        city: String,
    },

    /// Ask for city names until an empty line is entered.
    Prompt,

    /// Show the forecast for the city at your location.
    Locate {
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::try_from(value).map_err(|err| err.to_string())
}

impl Overrides {
    /// Saved config with the overrides applied.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load()?;

        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.weather_url {
            config.weather_url = url.clone();
        }
        if let Some(url) = &self.geocode_url {
            config.geocode_url = url.clone();
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        tracing::debug!(
            weather_url = %config.weather_url,
            geocode_url = %config.geocode_url,
            locale = %config.locale,
            "configuration resolved"
        );
        Ok(config)
    }

    fn labels(&self) -> Labels {
        if self.english { Labels::English } else { Labels::Source }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { overrides, command } = self;
        let labels = overrides.labels();

        match command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let config = overrides.config()?;
                let mut weather = WeatherLookup::from_config(&config, StartupMode::Manual)?;
                weather.mount(&DeviceLocation::Unsupported).await;
                weather.submit(&city).await;
                report(&weather, labels)
            }
            Command::Prompt => {
                let config = overrides.config()?;
                let mut weather = WeatherLookup::from_config(&config, StartupMode::Manual)?;
                weather.mount(&DeviceLocation::Unsupported).await;

                while let Some(city) = ask_city()? {
                    weather.submit(&city).await;
                    if let Err(err) = report(&weather, labels) {
                        eprintln!("{err}");
                    }
                }
                Ok(())
            }
            Command::Locate { lat, lon } => {
                let config = overrides.config()?;
                let mut weather = WeatherLookup::from_config(&config, StartupMode::Geolocate)?;
                match lat.zip(lon) {
                    Some((latitude, longitude)) => {
                        let position = Coordinates { latitude, longitude };
                        weather.mount(&DeviceLocation::Granted(position)).await;
                    }
                    None => weather.mount(&PromptLocation).await,
                }
                report(&weather, labels)
            }
        }
    }
}

/// Print the table, or fail with the lookup's message.
fn report(weather: &WeatherLookup, labels: Labels) -> anyhow::Result<()> {
    if let Some(message) = weather.error_message() {
        anyhow::bail!("{message}");
    }

    if weather.state().phase() == Phase::Loaded {
        println!("{}", weather.state().city);
        print!("{}", format_table(&weather.rows(labels)));
    }

    Ok(())
}

fn ask_city() -> anyhow::Result<Option<String>> {
    match Text::new("City:").with_help_message("Empty line to quit").prompt() {
        Ok(city) if city.trim().is_empty() => Ok(None),
        Ok(city) => Ok(Some(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read city"),
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("CollectAPI key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let locale = Select::new("Message language:", Locale::all().to_vec())
        .prompt()
        .context("Failed to read message language")?;

    let lang = Text::new("Response language for weather and geocoding:")
        .with_default(&config.lang)
        .with_help_message("Weekday and description translation expects \"tr\"")
        .prompt()
        .context("Failed to read response language")?;

    store_answers(&mut config, &api_key, locale, &lang);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Apply `configure` answers; a blank language keeps the current one.
fn store_answers(config: &mut Config, api_key: &str, locale: Locale, lang: &str) {
    config.api_key = Some(api_key.trim().to_string());
    config.locale = locale;

    let lang = lang.trim();
    if !lang.is_empty() {
        config.lang = lang.to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_overrides() {
        let cli = Cli::try_parse_from([
            "weather-lookup",
            "show",
            "Ankara",
            "--english",
            "--locale",
            "en",
        ])
        .expect("valid arguments");

        assert!(matches!(cli.command, Command::Show { ref city } if city == "Ankara"));
        assert_eq!(cli.overrides.labels(), Labels::English);
        assert_eq!(cli.overrides.locale, Some(Locale::English));
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["weather-lookup", "locate", "--lat", "-33.92", "--lon", "18.42"])
            .expect("valid arguments");

        match cli.command {
            Command::Locate { lat, lon } => {
                assert_eq!(lat, Some(-33.92));
                assert_eq!(lon, Some(18.42));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn latitude_requires_longitude() {
        let err = Cli::try_parse_from(["weather-lookup", "locate", "--lat", "39.9"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn configure_answers_update_key_locale_and_lang() {
        let mut config = Config::default();
        store_answers(&mut config, "  KEY \n", Locale::English, " EN ");

        assert_eq!(config.api_key(), Some("KEY"));
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn blank_lang_answer_keeps_current_lang() {
        let mut config = Config { lang: "de".into(), ..Config::default() };
        store_answers(&mut config, "KEY", Locale::Turkish, "   ");

        assert_eq!(config.lang, "de");
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["weather-lookup", "prompt", "--locale", "de"]).is_err());
    }
}
