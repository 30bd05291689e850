//! Core library for the `weather-lookup` tool.
//!
//! This crate defines:
//! - Configuration handling
//! - The lookup controller and its state transitions
//! - The weather provider and reverse geocoding clients
//! - Label translation and the table projection
//!
//! It is used by `weather-lookup-cli`, but can also be driven by other front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod geocode;
pub mod i18n;
pub mod location;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;

pub use config::Config;
pub use controller::{StartupMode, WeatherLookup};
pub use error::{LocationError, LookupError};
pub use geocode::{HttpReverseGeocoder, ReverseGeocoder};
pub use i18n::{Labels, Locale};
pub use location::{DeviceLocation, LocationSource};
pub use model::{Coordinates, ForecastEntry};
pub use provider::{WeatherProvider, provider_from_config};
pub use render::{ForecastRow, HEADERS};
pub use state::{LookupState, Phase};
