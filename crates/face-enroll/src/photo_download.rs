use crate::AppResult;

use face_enroll_core::{HttpEnrollmentClient, SessionContext};

use std::{path::Path, path::PathBuf, sync::Arc};

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Download a registered person's photo in the background.
///
/// The app loop keeps polling the workflow while the request is in flight.
pub(crate) fn spawn_photo_download(
    client: Arc<HttpEnrollmentClient>,
    session: SessionContext,
    person_id: String,
    path: PathBuf,
) -> JoinHandle<()> {
    tokio::task::spawn(async move {
        match save_photo(&client, &session, &person_id, &path).await {
            Ok(bytes) => println!("saved {} bytes to {}", bytes, path.display()),
            Err(e) => {
                error!(person_id = %person_id, error = ?e, "Failed to fetch photo");
                println!("photo download failed for {}", person_id);
            }
        }
    })
}

/// Fetch the photo and write it to `path`, returning its size.
#[instrument(skip(client, session))]
pub(crate) async fn save_photo(
    client: &HttpEnrollmentClient,
    session: &SessionContext,
    person_id: &str,
    path: &Path,
) -> AppResult<usize> {
    let bytes = client.fetch_photo(person_id, session).await?;
    tokio::fs::write(path, &bytes).await?;

    info!(bytes = bytes.len(), "Photo saved");

    Ok(bytes.len())
}
