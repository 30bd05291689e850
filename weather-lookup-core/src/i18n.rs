//! Label translation and user-facing messages.
//!
//! The provider is queried in Turkish, so its `day` and `description`
//! values come from a small Turkish vocabulary. [`Labels::English`] maps
//! that vocabulary onto English for display.

use serde::{Deserialize, Serialize};

use crate::error::{LocationError, LookupError};

/// Language of the fixed messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Turkish => "tr",
            Locale::English => "en",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::Turkish, Locale::English]
    }

    /// The single message displayed for a failed lookup.
    pub fn message(&self, error: &LookupError) -> &'static str {
        match (self, error) {
            (Locale::Turkish, LookupError::InvalidCity(_) | LookupError::NotFound) => {
                "Şehir bulunamadı. Lütfen geçerli bir şehir adı girin."
            }
            (Locale::English, LookupError::InvalidCity(_) | LookupError::NotFound) => {
                "City not found. Please enter a valid city name."
            }
            (Locale::Turkish, LookupError::Transport(_)) => {
                "Bir hata oluştu. Lütfen daha sonra tekrar deneyin."
            }
            (Locale::English, LookupError::Transport(_)) => {
                "An error occurred. Please try again later."
            }
            (Locale::Turkish, LookupError::Location(LocationError::PermissionDenied)) => {
                "Konum izni reddedildi."
            }
            (Locale::English, LookupError::Location(LocationError::PermissionDenied)) => {
                "Location permission denied."
            }
            (Locale::Turkish, LookupError::Location(LocationError::Unsupported)) => {
                "Konum servisi bu cihazda desteklenmiyor."
            }
            (Locale::English, LookupError::Location(LocationError::Unsupported)) => {
                "Geolocation is not supported on this device."
            }
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Locale {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "tr" | "turkish" => Ok(Locale::Turkish),
            "en" | "english" => Ok(Locale::English),
            _ => Err(anyhow::anyhow!("Unknown locale '{value}'. Supported locales: tr, en.")),
        }
    }
}

/// How forecast labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labels {
    /// Provider vocabulary, untouched.
    #[default]
    Source,
    /// Weekday and condition description translated to English.
    English,
}

impl Labels {
    pub fn day(&self, day: &str) -> String {
        match self {
            Labels::Source => day.to_string(),
            Labels::English => translate_day(day).to_string(),
        }
    }

    pub fn description(&self, description: &str) -> String {
        match self {
            Labels::Source => description.to_string(),
            Labels::English => translate_description(description).to_string(),
        }
    }
}

/// Turkish weekday to English. Unrecognized values pass through unchanged.
pub fn translate_day(day: &str) -> &str {
    match day {
        "Pazartesi" => "Monday",
        "Salı" => "Tuesday",
        "Çarşamba" => "Wednesday",
        "Perşembe" => "Thursday",
        "Cuma" => "Friday",
        "Cumartesi" => "Saturday",
        "Pazar" => "Sunday",
        other => other,
    }
}

/// Turkish condition description to English, `"Unknown"` when unrecognized.
pub fn translate_description(description: &str) -> &'static str {
    match description {
        "açık" => "Clear",
        "yağmurlu" => "Rainy",
        "kapalı" => "Cloudy",
        "karlı" => "Snowy",
        "sisli" => "Foggy",
        "rüzgarlı" => "Windy",
        "az bulutlu" | "parçalı az bulutlu" | "parçalı bulutlu" => "Partly Cloudy",
        "hafif yağmur" => "Light Rain",
        "orta şiddetli yağmur" => "Moderate Rain",
        "şiddetli yağmur" => "Heavy Rain",
        _ => "Unknown",
    }
}
