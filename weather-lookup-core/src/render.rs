//! Projection of [`LookupState`] into table rows.

use crate::{i18n::Labels, model::ForecastEntry, state::LookupState};

pub const HEADERS: [&str; 10] = [
    "Day",
    "Date",
    "Degree (°C)",
    "Description",
    "Humidity (%)",
    "Max Temperature (°C)",
    "Min Temperature (°C)",
    "Night Temperature (°C)",
    "Status",
    "Icon",
];

/// One displayed forecast row, columns in [`HEADERS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub day: String,
    pub date: String,
    pub degree: String,
    pub description: String,
    pub humidity: String,
    pub max: String,
    pub min: String,
    pub night: String,
    pub status: String,
    pub icon: String,
}

impl ForecastRow {
    pub fn from_entry(entry: &ForecastEntry, labels: Labels) -> Self {
        Self {
            day: labels.day(&entry.day),
            date: entry.date.clone(),
            degree: celsius(&entry.degree),
            description: labels.description(&entry.description),
            humidity: format!("{}%", entry.humidity),
            max: celsius(&entry.max),
            min: celsius(&entry.min),
            night: celsius(&entry.night),
            status: entry.status.clone(),
            icon: entry.icon.clone(),
        }
    }

    pub fn cells(&self) -> [&str; 10] {
        [
            self.day.as_str(),
            self.date.as_str(),
            self.degree.as_str(),
            self.description.as_str(),
            self.humidity.as_str(),
            self.max.as_str(),
            self.min.as_str(),
            self.night.as_str(),
            self.status.as_str(),
            self.icon.as_str(),
        ]
    }
}

fn celsius(value: &str) -> String {
    format!("{value}°C")
}

/// Rows to display, or nothing while loading, before the first mount,
/// or when an error is showing.
pub fn render(state: &LookupState, labels: Labels) -> Vec<ForecastRow> {
    if state.first_load || state.is_loading || state.error.is_some() {
        return Vec::new();
    }

    state.forecast.iter().map(|entry| ForecastRow::from_entry(entry, labels)).collect()
}
