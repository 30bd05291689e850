//! Reverse geocoding: turn device coordinates into a city name.

use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config,
    error::LookupError,
    model::{Coordinates, GeocodeResponse},
    provider::collectapi::truncate_body,
};

#[async_trait]
pub trait ReverseGeocoder: Send + Sync + Debug {
    async fn city_at(&self, position: Coordinates) -> Result<String, LookupError>;
}

/// Client for a BigDataCloud-style `reverse-geocode-client` endpoint.
#[derive(Debug, Clone)]
pub struct HttpReverseGeocoder {
    url: String,
    lang: String,
    http: Client,
}

impl HttpReverseGeocoder {
    pub fn new(url: String, lang: String) -> Self {
        Self { url, lang, http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.geocode_url.clone(), config.lang.clone())
    }
}

#[async_trait]
impl ReverseGeocoder for HttpReverseGeocoder {
    async fn city_at(&self, position: Coordinates) -> Result<String, LookupError> {
        let latitude = position.latitude.to_string();
        let longitude = position.longitude.to_string();

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("localityLanguage", self.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "reverse geocode request failed");
                LookupError::from(err)
            })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "reverse geocode rejected");
            return Err(LookupError::Transport(format!(
                "geocoder returned status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: GeocodeResponse = serde_json::from_str(&body)?;

        let city = parsed
            .city
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(LookupError::NotFound)?;

        tracing::info!(%city, "reverse geocoded");
        Ok(city)
    }
}
