use crate::config::{
    default_camera_enabled, default_device_index, default_height, default_jpeg_quality,
    default_width,
};

use serde::{Deserialize, Serialize};

/// Camera device and still capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// When false every camera request is refused and only upload works.
    #[serde(default = "default_camera_enabled")]
    pub enabled: bool,
    /// `/dev/video{N}` index.
    #[serde(default = "default_device_index")]
    pub device_index: u32,
    /// Preferred frame width.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Preferred frame height.
    #[serde(default = "default_height")]
    pub height: u32,
    /// JPEG quality of captured stills, 1-100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            enabled: default_camera_enabled(),
            device_index: default_device_index(),
            width: default_width(),
            height: default_height(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}
