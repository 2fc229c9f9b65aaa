use crate::{FieldEdit, SelectedFile};

/// Triggers forwarded from the presentation layer or the host.
#[derive(Debug, Clone)]
pub enum WorkflowAction {
    /// "Use camera".
    UseCamera,
    /// Shutter pressed while the camera is live.
    Capture,
    /// Leave the camera without capturing.
    CancelCamera,
    /// A file was chosen on the upload path.
    ChooseFile(SelectedFile),
    /// A form field changed.
    EditField(FieldEdit),
    /// "Retake" / "choose different": drop the photo and the form.
    Retake,
    /// Submit the registration.
    Submit,
    /// "Try again" after a failure.
    TryAgain,
    /// Dismiss the success view before the auto-close delay.
    Dismiss,
    /// Host closes the enrollment surface.
    Close,
}

impl WorkflowAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowAction::UseCamera => "use_camera",
            WorkflowAction::Capture => "capture",
            WorkflowAction::CancelCamera => "cancel_camera",
            WorkflowAction::ChooseFile(_) => "choose_file",
            WorkflowAction::EditField(_) => "edit_field",
            WorkflowAction::Retake => "retake",
            WorkflowAction::Submit => "submit",
            WorkflowAction::TryAgain => "try_again",
            WorkflowAction::Dismiss => "dismiss",
            WorkflowAction::Close => "close",
        }
    }
}

/// Whether a dispatched action did anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was valid in the current state and has been applied.
    Applied,
    /// The action is inert in the current state (or the workflow is closed).
    Ignored,
}
