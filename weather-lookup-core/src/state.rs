//! Lookup state and the pure transitions applied to it.

use crate::{error::LookupError, model::ForecastEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Loaded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupState {
    pub city: String,
    pub forecast: Vec<ForecastEntry>,
    pub is_loading: bool,
    pub error: Option<LookupError>,
    /// Set until the first mount pass has run.
    pub first_load: bool,
}

impl Default for LookupState {
    fn default() -> Self {
        Self {
            city: String::new(),
            forecast: Vec::new(),
            is_loading: false,
            error: None,
            first_load: true,
        }
    }
}

impl LookupState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if !self.first_load && !self.forecast.is_empty() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    pub fn mounted(&mut self) {
        self.first_load = false;
    }

    /// A request for `city` is now in flight.
    pub fn begin(&mut self, city: impl Into<String>) {
        self.city = city.into();
        self.is_loading = true;
    }

    /// The provider returned entries. An empty list is a not-found.
    pub fn loaded(&mut self, entries: Vec<ForecastEntry>) {
        if entries.is_empty() {
            self.not_found();
            return;
        }
        self.forecast = entries;
        self.error = None;
        self.is_loading = false;
    }

    pub fn not_found(&mut self) {
        self.forecast.clear();
        self.error = Some(LookupError::NotFound);
        self.is_loading = false;
    }

    /// The input never reached the network.
    pub fn rejected(&mut self, error: LookupError) {
        self.forecast.clear();
        self.error = Some(error);
        self.is_loading = false;
    }

    /// Transport, parse or location failure. The previous forecast is kept.
    pub fn failed(&mut self, error: LookupError) {
        self.error = Some(error);
        self.is_loading = false;
    }
}

/// Trim and validate a submitted city name.
///
/// Blank input and anything that reads as a number are rejected.
pub fn validate_city(input: &str) -> Result<String, LookupError> {
    let trimmed = input.trim();

    if is_numeric(trimmed) {
        return Err(LookupError::InvalidCity(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Whether `s` reads as a number: empty, decimal or exponent notation,
/// `Infinity`, or an unsigned `0x`/`0o`/`0b` integer literal.
fn is_numeric(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return true;
    }

    const RADIX_PREFIXES: [(&str, u32); 6] =
        [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = s.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    // Rules out `inf`, `nan` and friends; only the exponent marker may be a letter.
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return false;
    }

    unsigned.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str) -> ForecastEntry {
        ForecastEntry {
            date: "24.09.2018".into(),
            day: day.into(),
            icon: "https://example.com/icon.svg".into(),
            description: "açık".into(),
            status: "Clear".into(),
            degree: "21.6".into(),
            min: "11.6".into(),
            max: "21.6".into(),
            night: "11.6".into(),
            humidity: "22".into(),
        }
    }

    #[test]
    fn numeric_input_is_rejected() {
        for input in [
            "12345", " 42 ", "-4.5", "+7", ".5", "1e3", "", "   ", "Infinity", "-Infinity", "0x10",
            "0XfF", "0o17", "0b101",
        ] {
            let err = validate_city(input).unwrap_err();
            assert!(matches!(err, LookupError::InvalidCity(_)), "input {input:?}");
        }
    }

    #[test]
    fn city_names_are_trimmed() {
        assert_eq!(validate_city("  Ankara ").unwrap(), "Ankara");
        assert_eq!(validate_city("İzmir 35").unwrap(), "İzmir 35");
        assert_eq!(validate_city("NaN").unwrap(), "NaN");
    }

    #[test]
    fn number_like_names_are_accepted() {
        for input in ["inf", "infinity", "1_000", "0x", "0xZZ", "-0x10", "e5", "0b102", "€x"] {
            assert_eq!(validate_city(input).unwrap(), input, "input {input:?}");
        }
    }

    #[test]
    fn starts_idle_with_first_load_guard() {
        let state = LookupState::default();
        assert!(state.first_load);
        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn loading_then_loaded() {
        let mut state = LookupState::default();
        state.mounted();

        state.begin("Ankara");
        assert_eq!(state.phase(), Phase::Loading);

        state.loaded(vec![entry("Pazartesi"), entry("Salı")]);
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.city, "Ankara");
        assert_eq!(state.forecast.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn empty_result_clears_previous_forecast() {
        let mut state = LookupState::default();
        state.mounted();
        state.begin("Ankara");
        state.loaded(vec![entry("Pazartesi")]);

        state.begin("Atlantis");
        state.loaded(Vec::new());

        assert!(state.forecast.is_empty());
        assert_eq!(state.error, Some(LookupError::NotFound));
        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn failure_keeps_previous_forecast() {
        let mut state = LookupState::default();
        state.mounted();
        state.begin("Ankara");
        state.loaded(vec![entry("Pazartesi")]);

        state.begin("Ankara");
        state.failed(LookupError::Transport("connection refused".into()));

        assert_eq!(state.forecast.len(), 1);
        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = LookupState::default();
        state.mounted();
        state.rejected(LookupError::InvalidCity("1".into()));
        assert_eq!(state.phase(), Phase::Error);

        state.begin("Ankara");
        state.loaded(vec![entry("Cuma")]);
        assert_eq!(state.phase(), Phase::Loaded);
    }
}
