//! The weather lookup controller: resolve a city, fetch its forecast,
//! and keep the result in a [`LookupState`].

use crate::{
    Config,
    error::LookupError,
    geocode::{HttpReverseGeocoder, ReverseGeocoder},
    i18n::{Labels, Locale},
    location::LocationSource,
    model::ForecastEntry,
    provider::{WeatherProvider, provider_from_config},
    render::{ForecastRow, render},
    state::{LookupState, validate_city},
};

/// What happens when the controller is first mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupMode {
    /// Wait for the user to submit a city.
    #[default]
    Manual,
    /// Look up the city at the device location straight away.
    Geolocate,
}

#[derive(Debug)]
pub struct WeatherLookup {
    provider: Box<dyn WeatherProvider>,
    geocoder: Box<dyn ReverseGeocoder>,
    mode: StartupMode,
    locale: Locale,
    state: LookupState,
}

impl WeatherLookup {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        geocoder: Box<dyn ReverseGeocoder>,
        mode: StartupMode,
        locale: Locale,
    ) -> Self {
        Self {
            provider,
            geocoder,
            mode,
            locale,
            state: LookupState::default(),
        }
    }

    pub fn from_config(config: &Config, mode: StartupMode) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;
        let geocoder = Box::new(HttpReverseGeocoder::from_config(config));

        Ok(Self::new(provider, geocoder, mode, config.locale))
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// The message to show for the current error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.state.error.as_ref().map(|err| self.locale.message(err))
    }

    pub fn rows(&self, labels: Labels) -> Vec<ForecastRow> {
        render(&self.state, labels)
    }

    /// First render pass. Runs at most once.
    pub async fn mount(&mut self, location: &dyn LocationSource) {
        if !self.state.first_load {
            return;
        }
        self.state.mounted();

        match self.mode {
            StartupMode::Manual => tracing::debug!("mounted, waiting for input"),
            StartupMode::Geolocate => self.locate(location).await,
        }
    }

    /// Handle a submission of the city form.
    pub async fn submit(&mut self, input: &str) {
        self.state.mounted();

        match validate_city(input) {
            Ok(city) => self.fetch(city).await,
            Err(err) => {
                tracing::info!(input, "rejected city input");
                self.state.rejected(err);
            }
        }
    }

    /// Resolve the city at the device position, then fetch its forecast.
    pub async fn locate(&mut self, location: &dyn LocationSource) {
        let position = match location.current_position().await {
            Ok(position) => position,
            Err(err) => {
                tracing::info!(error = %err, "device location unavailable");
                self.state.failed(err.into());
                return;
            }
        };

        match self.geocoder.city_at(position).await {
            Ok(city) => self.fetch(city).await,
            Err(err) => self.settle(Err(err)),
        }
    }

    async fn fetch(&mut self, city: String) {
        tracing::info!(%city, "looking up forecast");
        self.state.begin(city);

        let result = self.provider.get_forecast(&self.state.city).await;
        self.settle(result);
    }

    fn settle(&mut self, result: Result<Vec<ForecastEntry>, LookupError>) {
        match result {
            Ok(entries) => {
                if entries.is_empty() {
                    tracing::info!(city = %self.state.city, "city not found");
                }
                self.state.loaded(entries);
            }
            Err(LookupError::NotFound) => self.state.not_found(),
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed");
                self.state.failed(err);
            }
        }
    }
}
