//! Seam over the device location service.
//!
//! The permission prompt and the platform positioning stack live behind
//! [`LocationProvider`]; implementors own the permission interaction and
//! trigger at most one prompt per resolution attempt.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::Coordinate;

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    /// One best-effort position reading.
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Provider backed by an explicit coordinate, e.g. CLI flags or a saved
/// default location.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Coordinate);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_returns_its_coordinate() {
        let provider = FixedLocation(Coordinate {
            latitude: 4.6,
            longitude: -74.08,
        });

        let position = provider
            .current_position()
            .await
            .expect("fixed provider never fails");

        assert_eq!(position.latitude, 4.6);
        assert_eq!(position.longitude, -74.08);
    }

    #[test]
    fn location_error_display() {
        assert!(LocationError::PermissionDenied.to_string().contains("denied"));
        assert!(
            LocationError::ServiceUnavailable
                .to_string()
                .contains("unavailable")
        );
        assert!(LocationError::Other("gps off".into()).to_string().contains("gps off"));
    }
}
