use async_trait::async_trait;
use inquire::{Confirm, CustomType, CustomUserError, InquireError, validator::Validation};
use weather_lookup_core::{Coordinates, LocationError, LocationSource};

/// Asks the user for permission, then for their coordinates.
///
/// A terminal that cannot prompt counts as having no location capability.
#[derive(Debug, Default)]
pub struct PromptLocation;

#[async_trait]
impl LocationSource for PromptLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        tokio::task::spawn_blocking(prompt_position)
            .await
            .map_err(|_| LocationError::Unsupported)?
    }
}

fn prompt_position() -> Result<Coordinates, LocationError> {
    let allowed = Confirm::new("Allow weather-lookup to use your location?")
        .with_default(false)
        .prompt()
        .map_err(map_prompt_error)?;

    if !allowed {
        return Err(LocationError::PermissionDenied);
    }

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_validator(within("Latitude", 90.0))
        .prompt()
        .map_err(map_prompt_error)?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_validator(within("Longitude", 180.0))
        .prompt()
        .map_err(map_prompt_error)?;

    Ok(Coordinates { latitude, longitude })
}

fn within(
    name: &'static str,
    limit: f64,
) -> impl Fn(&f64) -> Result<Validation, CustomUserError> + Clone {
    move |value: &f64| {
        if (-limit..=limit).contains(value) {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid(format!("{name} must be within ±{limit}").into()))
        }
    }
}

fn map_prompt_error(err: InquireError) -> LocationError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            LocationError::PermissionDenied
        }
        _ => LocationError::Unsupported,
    }
}
