use crate::{CoreResult, VideoConstraints};

use async_trait::async_trait;
use image::DynamicImage;
use tracing::debug;

/// Platform media layer: grants exclusive camera streams.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// Request a live video stream.
    ///
    /// Resolves once the platform has granted or refused access. A refusal
    /// is reported as [`EnrollError::CameraUnavailable`](crate::EnrollError::CameraUnavailable).
    async fn open_video(&self, constraints: &VideoConstraints) -> CoreResult<Box<dyn VideoStream>>;
}

/// A granted, running camera stream.
pub trait VideoStream: Send {
    /// Freeze the most recent frame at the stream's native resolution.
    fn grab_frame(&mut self) -> CoreResult<DynamicImage>;

    /// Stop every track of the stream. Called at most once.
    fn stop(&mut self);
}

/// Exclusive ownership of a live camera stream.
///
/// The stream is stopped on [`close`](DeviceStream::close) or on drop,
/// whichever comes first, and never twice.
pub struct DeviceStream {
    inner: Option<Box<dyn VideoStream>>,
}

impl DeviceStream {
    /// Take ownership of a granted stream.
    pub fn new(stream: Box<dyn VideoStream>) -> Self {
        Self {
            inner: Some(stream),
        }
    }

    /// Whether the stream is still running.
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Freeze the current frame, if the stream is still open.
    pub fn grab_frame(&mut self) -> Option<CoreResult<DynamicImage>> {
        self.inner.as_mut().map(|stream| stream.grab_frame())
    }

    /// Stop the stream. Closing an already-closed stream is a no-op.
    pub fn close(&mut self) {
        if let Some(mut stream) = self.inner.take() {
            stream.stop();
            debug!("Camera stream closed");
        }
    }
}

impl Drop for DeviceStream {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for DeviceStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceStream")
            .field("open", &self.is_open())
            .finish()
    }
}
