use serde::{Deserialize, Serialize};

/// One day's forecast record, as delivered by the provider.
///
/// All values are kept as the provider's text; temperatures are degrees
/// Celsius and humidity is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: String,
    pub day: String,
    pub icon: String,
    pub description: String,
    pub status: String,
    pub degree: String,
    pub min: String,
    pub max: String,
    pub night: String,
    pub humidity: String,
}

/// Body of a `weather/getWeather` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<ForecastEntry>>,
}

impl ForecastResponse {
    /// Entries in forecast day order; a missing `result` counts as empty.
    pub fn into_entries(self) -> Vec<ForecastEntry> {
        self.result.unwrap_or_default()
    }
}

/// Body of a reverse geocoding response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_result_is_empty() {
        let parsed: ForecastResponse =
            serde_json::from_str(r#"{"success": false}"#).expect("valid json");
        assert!(parsed.into_entries().is_empty());
    }

    #[test]
    fn parses_provider_payload() {
        let body = r#"{
            "success": true,
            "city": "ankara",
            "result": [{
                "date": "24.09.2018",
                "day": "Pazartesi",
                "icon": "https://image.flaticon.com/icons/svg/143/143769.svg",
                "description": "açık",
                "status": "Clear",
                "degree": "21.6",
                "min": "11.6",
                "max": "21.6",
                "night": "11.6",
                "humidity": "22"
            }]
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(body).expect("valid json");
        assert_eq!(parsed.city.as_deref(), Some("ankara"));

        let entries = parsed.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].day, "Pazartesi");
        assert_eq!(entries[0].humidity, "22");
    }
}
