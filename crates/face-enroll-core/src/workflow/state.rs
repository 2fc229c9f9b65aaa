use crate::{EnrollError, PersonRecord};

/// Progress inside [`WorkflowState::AcquiringCamera`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    /// Waiting for the platform to grant the stream.
    Requesting,
    /// Stream is live, waiting for the shutter.
    Live,
    /// Shutter pressed; the stream is already closed and the frozen frame
    /// is being encoded.
    Encoding,
}

/// Why the workflow ended up in [`WorkflowState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Camera permission denied or no device.
    CameraUnavailable,
    /// Still capture or preview creation failed.
    CaptureFailed,
    /// The service refused the registration and said why.
    Rejected {
        /// Server-provided message.
        detail: String,
    },
    /// Network failure, or a refusal without a readable message.
    Generic,
}

impl FailureReason {
    /// Message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            FailureReason::CameraUnavailable => "camera unavailable",
            FailureReason::CaptureFailed => "Failed to capture photo",
            FailureReason::Rejected { detail } => detail,
            FailureReason::Generic => "Failed to register person",
        }
    }

    pub(crate) fn from_submit_error(error: &EnrollError) -> Self {
        match error {
            EnrollError::Rejected {
                detail: Some(detail),
                ..
            } => FailureReason::Rejected {
                detail: detail.clone(),
            },
            _ => FailureReason::Generic,
        }
    }
}

/// The single source of truth for what the host renders.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// Choosing between camera and upload.
    Idle,
    /// Camera requested, live, or a frame is being encoded.
    AcquiringCamera {
        /// Sub-phase.
        phase: CameraPhase,
    },
    /// Photo acquired; collecting the form.
    FormEntry,
    /// Registration request in flight.
    Submitting,
    /// Service accepted the registration; auto-close pending.
    Succeeded {
        /// Record returned by the service.
        record: PersonRecord,
    },
    /// Camera or submission failure; "try again" resets to `Idle`.
    Failed {
        /// What went wrong.
        reason: FailureReason,
    },
}

impl WorkflowState {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::AcquiringCamera { .. } => "acquiring_camera",
            WorkflowState::FormEntry => "form_entry",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded { .. } => "succeeded",
            WorkflowState::Failed { .. } => "failed",
        }
    }
}
