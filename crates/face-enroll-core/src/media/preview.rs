use crate::CoreResult;

use std::sync::Arc;

use tracing::debug;

/// Creates and revokes short-lived display references for in-memory images.
pub trait PreviewProvider: Send + Sync {
    /// Publish `media` and return a reference the presentation layer can load.
    fn create(&self, media: &[u8], media_type: &str) -> CoreResult<String>;

    /// Invalidate a reference returned by [`create`](PreviewProvider::create).
    fn revoke(&self, url: &str);
}

/// RAII guard for one preview reference. Revoked exactly once, on drop.
pub struct PreviewHandle {
    provider: Arc<dyn PreviewProvider>,
    url: String,
}

impl PreviewHandle {
    /// Publish `media` through `provider`.
    #[track_caller]
    pub fn acquire(
        provider: Arc<dyn PreviewProvider>,
        media: &[u8],
        media_type: &str,
    ) -> CoreResult<Self> {
        let url = provider.create(media, media_type)?;
        debug!(url = %url, "Preview created");
        Ok(Self { provider, url })
    }

    /// Reference the presentation layer renders.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.provider.revoke(&self.url);
        debug!(url = %self.url, "Preview revoked");
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandle").field("url", &self.url).finish()
    }
}
