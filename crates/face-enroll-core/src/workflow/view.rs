use crate::{CaptureMode, InputError, RegistrationForm, WorkflowState};

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowView<'a> {
    /// Current state.
    pub state: &'a WorkflowState,
    /// Form contents.
    pub form: &'a RegistrationForm,
    /// Preview reference of the current photo.
    pub preview_url: Option<&'a str>,
    /// How the current photo was obtained.
    pub capture_mode: Option<CaptureMode>,
    /// Inline validation message.
    pub notice: Option<&'a InputError>,
    /// Whether a camera stream is open.
    pub camera_open: bool,
    /// Whether an asynchronous step is outstanding.
    pub busy: bool,
    /// Whether the workflow has torn down.
    pub closed: bool,
}
