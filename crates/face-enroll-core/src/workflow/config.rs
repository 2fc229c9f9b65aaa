use crate::VideoConstraints;

use std::time::Duration;

/// Upload ceiling: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Delay between a successful submission and automatic close.
pub const DEFAULT_AUTO_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// JPEG quality for camera stills.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Tunables of a [`CaptureWorkflow`](crate::CaptureWorkflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Largest file accepted from the upload path.
    pub max_upload_bytes: u64,
    /// How long the success view stays up before the workflow closes itself.
    pub auto_close_delay: Duration,
    /// Camera request.
    pub video: VideoConstraints,
    /// JPEG quality (1-100) for camera stills.
    pub jpeg_quality: u8,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            auto_close_delay: DEFAULT_AUTO_CLOSE_DELAY,
            video: VideoConstraints::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
