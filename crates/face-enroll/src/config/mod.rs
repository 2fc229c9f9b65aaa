mod behaviour_config;
mod camera_config;
#[allow(clippy::module_inception)]
mod config;
mod service_config;
mod upload_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, camera_config::CameraConfig, config::Config,
    service_config::ServiceConfig, upload_config::UploadConfig,
};

use crate::{AppError, AppResult};

use std::panic::Location;

use directories::ProjectDirs;
use error_location::ErrorLocation;

/// Environment variable holding the bearer token; wins over the config file.
pub(crate) const TOKEN_ENV: &str = "FACE_ENROLL_TOKEN";

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CAMERA_ENABLED: bool = true;
pub(crate) const DEFAULT_DEVICE_INDEX: u32 = 0;
pub(crate) const DEFAULT_WIDTH: u32 = 1280;
pub(crate) const DEFAULT_HEIGHT: u32 = 720;
pub(crate) const DEFAULT_JPEG_QUALITY: u8 = face_enroll_core::DEFAULT_JPEG_QUALITY;
pub(crate) const DEFAULT_MAX_UPLOAD_BYTES: u64 = face_enroll_core::DEFAULT_MAX_UPLOAD_BYTES;
pub(crate) const DEFAULT_AUTO_CLOSE_MS: u64 = 2000;

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub(crate) fn default_camera_enabled() -> bool {
    DEFAULT_CAMERA_ENABLED
}

pub(crate) fn default_device_index() -> u32 {
    DEFAULT_DEVICE_INDEX
}

pub(crate) fn default_width() -> u32 {
    DEFAULT_WIDTH
}

pub(crate) fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

pub(crate) fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

pub(crate) fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

pub(crate) fn default_auto_close_ms() -> u64 {
    DEFAULT_AUTO_CLOSE_MS
}

/// Platform directories for config, logs and previews.
#[track_caller]
pub(crate) fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("com", "face-enroll", "Face-Enroll").ok_or_else(|| AppError::ConfigError {
        reason: "Failed to get project directories".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
