use crate::AppResult;

use face_enroll_core::SelectedFile;

use std::path::Path;

use image::ImageFormat;
use tracing::{debug, instrument};

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Read a photo file the user named, with its media type.
#[instrument]
pub(crate) async fn read_selection(path: &Path) -> AppResult<SelectedFile> {
    let bytes = tokio::fs::read(path).await?;
    let media_type = media_type_for(path, &bytes);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(bytes = bytes.len(), media_type, "File selected");

    Ok(SelectedFile::new(file_name, media_type, bytes))
}

/// Media type from the extension, falling back to the content.
pub(crate) fn media_type_for(path: &Path, bytes: &[u8]) -> &'static str {
    ImageFormat::from_path(path)
        .or_else(|_| image::guess_format(bytes))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}
