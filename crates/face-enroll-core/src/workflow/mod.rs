mod action;
mod completion;
mod config;
mod controller;
mod host;
mod state;
mod view;

pub(crate) use completion::{Completion, PendingOp};

pub use {
    action::{Outcome, WorkflowAction},
    config::{
        DEFAULT_AUTO_CLOSE_DELAY, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_UPLOAD_BYTES, WorkflowConfig,
    },
    controller::{CaptureWorkflow, WorkflowDeps},
    host::EnrollmentHost,
    state::{CameraPhase, FailureReason, WorkflowState},
    view::WorkflowView,
};
