use async_trait::async_trait;

use crate::{error::LocationError, model::Coordinates};

/// One-shot source of the device position.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// A location answer decided up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceLocation {
    Granted(Coordinates),
    Denied,
    Unsupported,
}

#[async_trait]
impl LocationSource for DeviceLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        match self {
            DeviceLocation::Granted(position) => Ok(*position),
            DeviceLocation::Denied => Err(LocationError::PermissionDenied),
            DeviceLocation::Unsupported => Err(LocationError::Unsupported),
        }
    }
}
