use crate::form::FormField;

use error_location::ErrorLocation;
use thiserror::Error;

/// Enrollment workflow errors with source location tracking.
#[derive(Error, Debug)]
pub enum EnrollError {
    /// Camera permission denied or no camera could be opened.
    #[error("Camera unavailable: {reason} {location}")]
    CameraUnavailable {
        /// Why the platform refused the stream.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An already-open camera stream failed.
    #[error("Camera device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Encoding a still frame or creating its preview failed.
    #[error("Capture failed: {reason} {location}")]
    CaptureFailed {
        /// Description of the capture failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The enrollment endpoint URL could not be built.
    #[error("Invalid endpoint {url}: {reason} {location}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
        /// Parser message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Network failure before a response was received.
    #[error("Transport error: {source} {location}")]
    Transport {
        /// Underlying error from reqwest.
        #[source]
        source: reqwest::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The service answered with a non-2xx status.
    #[error("Service rejected request with status {status}: {} {location}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Human-readable `detail` from the response body, if it had one.
        detail: Option<String>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A 2xx response whose body was not a JSON record.
    #[error("Invalid response: {reason} {location}")]
    InvalidResponse {
        /// Description of the decoding failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`EnrollError`].
pub type Result<T> = std::result::Result<T, EnrollError>;

/// Input problems shown inline next to the offending control.
///
/// These never move the workflow to `Failed` and never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The selected file is not an image.
    #[error("Please select an image file (got {media_type})")]
    InvalidFileType {
        /// Media type reported for the selection.
        media_type: String,
    },

    /// The selected file exceeds the upload ceiling.
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge {
        /// Size of the selection in bytes.
        size: u64,
        /// Configured ceiling in bytes.
        limit: u64,
    },

    /// Submit was pressed with one or more empty fields.
    #[error("Please fill in all fields (missing: {})", field_list(.missing))]
    IncompleteForm {
        /// Fields that are still empty, in form order.
        missing: Vec<FormField>,
    },

    /// Text that does not name one of the eight blood groups.
    #[error("Unknown blood group: {value}")]
    InvalidBloodGroup {
        /// The rejected text.
        value: String,
    },
}

fn field_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
