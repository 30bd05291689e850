use crate::{Config, ForecastEntry, error::LookupError, provider::collectapi::CollectApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod collectapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Multi-day forecast for `city`, in forecast day order.
    ///
    /// An empty list means the provider answered but knows no such city.
    async fn get_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, LookupError>;
}

/// Construct the weather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for the weather provider.\n\
             Hint: run `weather-lookup configure` and enter your CollectAPI key."
        )
    })?;

    Ok(Box::new(CollectApiProvider::new(
        config.weather_url.clone(),
        api_key.to_owned(),
        config.lang.clone(),
    )))
}
