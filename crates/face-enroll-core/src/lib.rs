//! Face-enroll Core Library
//!
//! Enrollment workflow: acquire a face photo from a camera or a file,
//! collect the person's details, and submit one multipart registration to
//! the enrollment service.
//!
//! # Example
//!
//! ```no_run
//! use face_enroll_core::{
//!     CaptureWorkflow, FieldEdit, SelectedFile, SessionContext, WorkflowAction,
//!     WorkflowConfig, WorkflowDeps,
//! };
//!
//! async fn enroll(deps: WorkflowDeps, photo: Vec<u8>) {
//!     let mut workflow =
//!         CaptureWorkflow::new(deps, SessionContext::anonymous(), WorkflowConfig::default());
//!
//!     workflow.dispatch(WorkflowAction::ChooseFile(SelectedFile::new(
//!         "alice.jpg",
//!         "image/jpeg",
//!         photo,
//!     )));
//!     workflow.dispatch(WorkflowAction::EditField(FieldEdit::FullName("Alice".into())));
//!     // ... remaining fields ...
//!     workflow.dispatch(WorkflowAction::Submit);
//!
//!     while workflow.has_pending() {
//!         workflow.settle().await;
//!     }
//! }
//! ```

mod error;
mod form;
mod media;
mod session;
mod submit;
mod workflow;

pub use {
    error::{EnrollError, InputError, Result as CoreResult},
    form::{BloodGroup, FieldEdit, FormField, RegistrationForm},
    media::{
        DeviceStream, FacingMode, MediaDevices, PreviewHandle, PreviewProvider, SelectedFile,
        VideoConstraints, VideoStream,
    },
    session::{CaptureMode, CaptureSession},
    submit::{
        EnrollmentApi, HttpEnrollmentClient, IMAGE_FIELD_NAME, IMAGE_FILE_NAME, PersonRecord,
        REGISTER_PATH, RegistrationRequest, SessionContext,
    },
    workflow::{
        CameraPhase, CaptureWorkflow, DEFAULT_AUTO_CLOSE_DELAY, DEFAULT_JPEG_QUALITY,
        DEFAULT_MAX_UPLOAD_BYTES, EnrollmentHost, FailureReason, Outcome, WorkflowAction,
        WorkflowConfig, WorkflowDeps, WorkflowState, WorkflowView,
    },
};

#[cfg(test)]
mod tests;
