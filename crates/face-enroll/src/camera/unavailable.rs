use face_enroll_core::{CoreResult, EnrollError, MediaDevices, VideoConstraints, VideoStream};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tracing::debug;

/// Camera backend that refuses every request, leaving upload as the only path.
#[derive(Debug, Clone)]
pub(crate) struct UnavailableCamera {
    reason: String,
}

impl UnavailableCamera {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MediaDevices for UnavailableCamera {
    async fn open_video(&self, _constraints: &VideoConstraints) -> CoreResult<Box<dyn VideoStream>> {
        debug!(reason = %self.reason, "Camera request refused");
        Err(EnrollError::CameraUnavailable {
            reason: self.reason.clone(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
