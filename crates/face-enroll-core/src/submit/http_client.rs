use crate::{
    CoreResult, EnrollError, EnrollmentApi, PersonRecord, RegistrationRequest, SessionContext,
};

use std::{panic::Location, time::Duration};

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{
    Client, Url,
    multipart::{Form, Part},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Path of the registration endpoint, relative to the service base URL.
pub const REGISTER_PATH: &str = "/api/v1/persons/register";

/// Multipart field carrying the photo.
pub const IMAGE_FIELD_NAME: &str = "image";

/// Filename attached to the photo part.
pub const IMAGE_FILE_NAME: &str = "capture.jpg";

const PERSONS_SEGMENTS: [&str; 3] = ["api", "v1", "persons"];

/// Body of a non-2xx answer. FastAPI puts a string in `detail`, or a list
/// of `{ "msg": .. }` objects for request validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// [`EnrollmentApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEnrollmentClient {
    http: Client,
    base_url: Url,
}

impl HttpEnrollmentClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or cannot carry a path.
    #[track_caller]
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| EnrollError::InvalidEndpoint {
            url: base_url.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(EnrollError::InvalidEndpoint {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnrollError::Transport {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(base_url = %base_url, "Enrollment client initialized");

        Ok(Self { http, base_url })
    }

    /// Download the stored photo of a registered person.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollError::Rejected`] for a non-2xx answer (e.g. unknown id).
    #[instrument(skip(self, session))]
    pub async fn fetch_photo(&self, person_id: &str, session: &SessionContext) -> CoreResult<Vec<u8>> {
        let url = self.endpoint(&[person_id, "photo"])?;

        let mut request = self.http.get(url);
        if let Some(token) = session.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| EnrollError::Transport {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(EnrollError::Rejected {
                status: status.as_u16(),
                detail: parse_detail(&body),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| EnrollError::Transport {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(bytes = bytes.len(), "Photo downloaded");

        Ok(bytes.to_vec())
    }

    fn endpoint(&self, tail: &[&str]) -> CoreResult<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| EnrollError::InvalidEndpoint {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(PERSONS_SEGMENTS)
            .extend(tail);

        Ok(url)
    }
}

#[async_trait]
impl EnrollmentApi for HttpEnrollmentClient {
    #[instrument(skip(self, request, session))]
    async fn register(
        &self,
        request: RegistrationRequest,
        session: &SessionContext,
    ) -> CoreResult<PersonRecord> {
        let url = self.endpoint(&["register"])?;

        debug!(
            image_bytes = request.image().len(),
            media_type = request.image_media_type(),
            "Submitting registration"
        );

        let (image, media_type, fields) = request.into_parts();

        let image_part = Part::bytes(image)
            .file_name(IMAGE_FILE_NAME)
            .mime_str(&media_type)
            .map_err(|e| EnrollError::Transport {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let form = fields
            .into_iter()
            .fold(Form::new().part(IMAGE_FIELD_NAME, image_part), |form, (key, value)| {
                form.text(key, value)
            });

        let mut builder = self.http.post(url).multipart(form);
        if let Some(token) = session.bearer_token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| EnrollError::Transport {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let detail = parse_detail(&body);
            warn!(status = status.as_u16(), detail = ?detail, "Registration rejected");
            return Err(EnrollError::Rejected {
                status: status.as_u16(),
                detail,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let record = response
            .json::<PersonRecord>()
            .await
            .map_err(|e| EnrollError::InvalidResponse {
                reason: format!("Failed to decode person record: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            status = status.as_u16(),
            person_id = record.id().unwrap_or("<none>"),
            "Registration accepted"
        );

        Ok(record)
    }
}

/// Pull a human-readable message out of an error body, if there is one.
pub(crate) fn parse_detail(body: &[u8]) -> Option<String> {
    let detail = serde_json::from_slice::<ErrorBody>(body).ok()?.detail?;

    match detail {
        Value::String(message) if !message.trim().is_empty() => Some(message),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
