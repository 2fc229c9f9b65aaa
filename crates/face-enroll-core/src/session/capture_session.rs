use crate::{CoreResult, PreviewHandle, PreviewProvider};

use std::sync::Arc;

/// How the photo was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Still frame frozen from the live camera.
    Camera,
    /// File chosen by the user.
    Upload,
}

/// An acquired photo plus its live preview.
///
/// Dropping the session revokes the preview. The workflow holds at most
/// one session and drops the old one before creating the next.
#[derive(Debug)]
pub struct CaptureSession {
    mode: CaptureMode,
    media: Vec<u8>,
    media_type: String,
    preview: PreviewHandle,
}

impl CaptureSession {
    /// Publish a preview for `media` and bundle them.
    #[track_caller]
    pub fn new(
        mode: CaptureMode,
        media: Vec<u8>,
        media_type: impl Into<String>,
        previews: Arc<dyn PreviewProvider>,
    ) -> CoreResult<Self> {
        let media_type = media_type.into();
        let preview = PreviewHandle::acquire(previews, &media, &media_type)?;

        Ok(Self {
            mode,
            media,
            media_type,
            preview,
        })
    }

    /// Acquisition path.
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Encoded image bytes.
    pub fn media(&self) -> &[u8] {
        &self.media
    }

    /// Media type of [`media`](CaptureSession::media).
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Preview reference for the presentation layer.
    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }
}
