use crate::AppResult;

use face_enroll_core::{CoreResult, EnrollError, PreviewProvider};

use std::{
    collections::HashSet,
    fs,
    panic::Location,
    path::{Path, PathBuf},
    sync::Mutex,
};

use error_location::ErrorLocation;
use image::ImageFormat;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

const URL_SCHEME: &str = "file://";

/// Publishes previews as temporary files a terminal or image viewer can open.
///
/// Only files this store created are ever deleted.
#[derive(Debug)]
pub(crate) struct PreviewStore {
    dir: PathBuf,
    live: Mutex<HashSet<PathBuf>>,
}

impl PreviewStore {
    /// Store previews under `dir`, creating it if needed.
    #[track_caller]
    pub(crate) fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        debug!(dir = ?dir, "Preview store ready");

        Ok(Self {
            dir,
            live: Mutex::new(HashSet::new()),
        })
    }

    /// Number of previews not yet revoked.
    #[cfg(test)]
    pub(crate) fn live_count(&self) -> usize {
        self.live.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn extension_for(media_type: &str) -> &'static str {
        ImageFormat::from_mime_type(media_type)
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("img")
    }
}

impl PreviewProvider for PreviewStore {
    #[instrument(skip(self, media), fields(bytes = media.len()))]
    fn create(&self, media: &[u8], media_type: &str) -> CoreResult<String> {
        let path = self.dir.join(format!(
            "preview-{}.{}",
            Uuid::new_v4(),
            Self::extension_for(media_type)
        ));

        fs::write(&path, media).map_err(|e| EnrollError::CaptureFailed {
            reason: format!("Failed to write preview {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let url = format!("{}{}", URL_SCHEME, path.display());
        self.live
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path);

        Ok(url)
    }

    fn revoke(&self, url: &str) {
        let Some(path) = url.strip_prefix(URL_SCHEME).map(Path::new) else {
            warn!(url, "Not a preview URL, ignored");
            return;
        };

        if !self
            .live
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path)
        {
            warn!(url, "Unknown preview, ignored");
            return;
        }

        if let Err(e) = fs::remove_file(path) {
            warn!(path = ?path, error = %e, "Failed to delete preview file");
        }
    }
}
