//! Camera backends for the workflow's [`MediaDevices`] seam.

#[cfg(any(target_os = "linux", test))]
pub(crate) mod frame;
mod unavailable;
#[cfg(target_os = "linux")]
pub(crate) mod v4l2;

use crate::{camera::unavailable::UnavailableCamera, config::CameraConfig};

use std::sync::Arc;

use face_enroll_core::MediaDevices;
use tracing::info;

/// Pick the camera backend for this platform and configuration.
pub(crate) fn camera_backend(config: &CameraConfig) -> Arc<dyn MediaDevices> {
    if !config.enabled {
        info!("Camera disabled in configuration, upload only");
        return Arc::new(UnavailableCamera::new("camera disabled in configuration"));
    }

    #[cfg(target_os = "linux")]
    {
        Arc::new(v4l2::V4l2Camera::new(config.device_index))
    }

    #[cfg(not(target_os = "linux"))]
    {
        info!("No camera backend on this platform, upload only");
        Arc::new(UnavailableCamera::new("no camera backend on this platform"))
    }
}
