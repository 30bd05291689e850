use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    error::LookupError,
    model::{ForecastEntry, ForecastResponse},
};

use super::WeatherProvider;

/// CollectAPI `weather/getWeather` client.
#[derive(Debug, Clone)]
pub struct CollectApiProvider {
    base_url: String,
    api_key: String,
    lang: String,
    http: Client,
}

impl CollectApiProvider {
    pub fn new(base_url: String, api_key: String, lang: String) -> Self {
        Self {
            base_url,
            api_key,
            lang,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for CollectApiProvider {
    async fn get_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, LookupError> {
        tracing::debug!(city, url = %self.base_url, "requesting forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("data.lang", self.lang.as_str()), ("data.city", city)])
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("apikey {}", self.api_key))
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "forecast request failed");
                LookupError::from(err)
            })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "forecast request rejected");
            return Err(LookupError::Transport(format!(
                "weather provider returned status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(error = %err, "malformed forecast response");
            LookupError::from(err)
        })?;

        let entries = parsed.into_entries();
        tracing::debug!(city, entries = entries.len(), "forecast received");
        Ok(entries)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("not json"), "not json");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "ş".repeat(300);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
