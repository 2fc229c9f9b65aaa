use crate::{
    CaptureMode, CaptureSession, CoreResult, DeviceStream, EnrollError, EnrollmentApi,
    EnrollmentHost, FieldEdit, InputError, MediaDevices, PersonRecord, PreviewProvider,
    RegistrationForm, RegistrationRequest, SelectedFile, SessionContext,
    media::{STILL_MEDIA_TYPE, encode_still},
    workflow::{
        CameraPhase, Completion, FailureReason, Outcome, PendingOp, WorkflowAction,
        WorkflowConfig, WorkflowState, WorkflowView,
    },
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Collaborators the workflow talks to.
#[derive(Clone)]
pub struct WorkflowDeps {
    /// Camera access.
    pub media: Arc<dyn MediaDevices>,
    /// Preview references for captured photos.
    pub previews: Arc<dyn PreviewProvider>,
    /// Enrollment service.
    pub api: Arc<dyn EnrollmentApi>,
    /// Page that opened the workflow.
    pub host: Arc<dyn EnrollmentHost>,
}

/// Finite-state controller for one enrollment.
///
/// Owns the camera stream, the captured photo, the form and the submission.
/// Transitions happen in [`dispatch`](CaptureWorkflow::dispatch) (user and
/// host triggers) and [`settle`](CaptureWorkflow::settle) (completion of the
/// single outstanding asynchronous step). Both take `&mut self`, so no two
/// transitions interleave.
///
/// # Resources
///
/// The stream and the preview are RAII guards. Resetting, closing or simply
/// dropping the workflow releases both, and drops the outstanding step so
/// its result is never applied.
pub struct CaptureWorkflow {
    id: Uuid,
    config: WorkflowConfig,
    deps: WorkflowDeps,
    session: SessionContext,
    state: WorkflowState,
    stream: Option<DeviceStream>,
    capture: Option<CaptureSession>,
    form: RegistrationForm,
    notice: Option<InputError>,
    pending: Option<PendingOp>,
    record_delivered: bool,
    closed: bool,
}

impl CaptureWorkflow {
    /// Open a workflow in `Idle`.
    #[instrument(skip(deps, session))]
    pub fn new(deps: WorkflowDeps, session: SessionContext, config: WorkflowConfig) -> Self {
        let id = Uuid::new_v4();

        info!(workflow_id = %id, "Enrollment workflow opened");

        Self {
            id,
            config,
            deps,
            session,
            state: WorkflowState::Idle,
            stream: None,
            capture: None,
            form: RegistrationForm::default(),
            notice: None,
            pending: None,
            record_delivered: false,
            closed: false,
        }
    }

    /// Identifier used to correlate this workflow's log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Whether an asynchronous step is outstanding.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the workflow has torn down.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> WorkflowView<'_> {
        WorkflowView {
            state: &self.state,
            form: &self.form,
            preview_url: self.capture.as_ref().map(CaptureSession::preview_url),
            capture_mode: self.capture.as_ref().map(CaptureSession::mode),
            notice: self.notice.as_ref(),
            camera_open: self.stream.as_ref().is_some_and(DeviceStream::is_open),
            busy: self.pending.is_some(),
            closed: self.closed,
        }
    }

    /// Apply a user or host trigger.
    ///
    /// Actions that make no sense in the current state are ignored, which
    /// is how e.g. a second submit while `Submitting` stays inert.
    #[instrument(skip(self, action), fields(workflow_id = %self.id, action = action.name(), state = self.state.name()))]
    pub fn dispatch(&mut self, action: WorkflowAction) -> Outcome {
        if self.closed {
            debug!("Workflow closed, action ignored");
            return Outcome::Ignored;
        }

        let outcome = match action {
            WorkflowAction::Close => {
                self.teardown();
                Outcome::Applied
            }
            WorkflowAction::UseCamera => self.use_camera(),
            WorkflowAction::Capture => self.capture_still(),
            WorkflowAction::CancelCamera => self.cancel_camera(),
            WorkflowAction::ChooseFile(file) => self.choose_file(file),
            WorkflowAction::EditField(edit) => self.edit_field(edit),
            WorkflowAction::Retake => self.retake(),
            WorkflowAction::Submit => self.submit(),
            WorkflowAction::TryAgain => self.try_again(),
            WorkflowAction::Dismiss => self.dismiss(),
        };

        if outcome == Outcome::Ignored {
            debug!("Action inert in current state");
        }

        outcome
    }

    /// Wait for the outstanding asynchronous step and apply its result.
    ///
    /// Returns immediately when nothing is outstanding. Cancel-safe: if the
    /// returned future is dropped early the step stays outstanding.
    pub async fn settle(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let completion = pending.await;
        self.pending = None;
        self.complete(completion);
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::CameraOpened(result) => self.on_camera_opened(result),
            Completion::StillEncoded(result) => self.on_still_encoded(result),
            Completion::Submitted(result) => self.on_submitted(result),
            Completion::AutoCloseElapsed => {
                debug!(workflow_id = %self.id, "Auto-close delay elapsed");
                self.teardown();
            }
        }
    }

    fn use_camera(&mut self) -> Outcome {
        if self.state != WorkflowState::Idle {
            return Outcome::Ignored;
        }

        self.notice = None;
        self.close_stream();

        let media = Arc::clone(&self.deps.media);
        let constraints = self.config.video;
        self.pending = Some(Box::pin(async move {
            let result = media.open_video(&constraints).await;
            Completion::CameraOpened(result.map(DeviceStream::new))
        }));

        self.set_state(WorkflowState::AcquiringCamera {
            phase: CameraPhase::Requesting,
        });

        Outcome::Applied
    }

    fn on_camera_opened(&mut self, result: CoreResult<DeviceStream>) {
        match result {
            Ok(stream) => {
                self.close_stream();
                self.stream = Some(stream);
                info!(workflow_id = %self.id, "Camera stream granted");
                self.set_state(WorkflowState::AcquiringCamera {
                    phase: CameraPhase::Live,
                });
            }
            Err(e) => {
                warn!(workflow_id = %self.id, error = %e, "Camera request refused");
                self.close_stream();
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::CameraUnavailable,
                });
            }
        }
    }

    fn capture_still(&mut self) -> Outcome {
        let live = WorkflowState::AcquiringCamera {
            phase: CameraPhase::Live,
        };
        if self.state != live {
            return Outcome::Ignored;
        }

        // The stream never outlives the capture instant, success or not.
        let frame = self.stream.as_mut().and_then(DeviceStream::grab_frame);
        self.close_stream();

        let frame = match frame {
            Some(Ok(frame)) => frame,
            Some(Err(e)) => {
                error!(workflow_id = %self.id, error = %e, "Failed to grab frame");
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::CaptureFailed,
                });
                return Outcome::Applied;
            }
            None => {
                error!(workflow_id = %self.id, "Live state without an open stream");
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::CameraUnavailable,
                });
                return Outcome::Applied;
            }
        };

        let quality = self.config.jpeg_quality;
        self.pending = Some(Box::pin(async move {
            let encoded = tokio::task::spawn_blocking(move || encode_still(&frame, quality))
                .await
                .unwrap_or_else(|e| {
                    Err(EnrollError::CaptureFailed {
                        reason: format!("Encode task failed: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })
                });
            Completion::StillEncoded(encoded)
        }));

        self.set_state(WorkflowState::AcquiringCamera {
            phase: CameraPhase::Encoding,
        });

        Outcome::Applied
    }

    fn on_still_encoded(&mut self, result: CoreResult<Vec<u8>>) {
        match result {
            Ok(bytes) => self.install_capture(CaptureMode::Camera, bytes, STILL_MEDIA_TYPE),
            Err(e) => {
                error!(workflow_id = %self.id, error = %e, "Still capture failed");
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::CaptureFailed,
                });
            }
        }
    }

    fn cancel_camera(&mut self) -> Outcome {
        if !matches!(self.state, WorkflowState::AcquiringCamera { .. }) {
            return Outcome::Ignored;
        }

        self.pending = None;
        self.close_stream();
        self.set_state(WorkflowState::Idle);

        Outcome::Applied
    }

    fn choose_file(&mut self, file: SelectedFile) -> Outcome {
        if self.state != WorkflowState::Idle {
            return Outcome::Ignored;
        }

        if let Err(problem) = file.validate(self.config.max_upload_bytes) {
            info!(
                workflow_id = %self.id,
                file_name = file.file_name(),
                size = file.size(),
                problem = %problem,
                "File selection rejected"
            );
            self.notice = Some(problem);
            return Outcome::Applied;
        }

        self.notice = None;
        let media_type = file.media_type().to_string();
        self.install_capture(CaptureMode::Upload, file.into_bytes(), &media_type);

        Outcome::Applied
    }

    fn edit_field(&mut self, edit: FieldEdit) -> Outcome {
        if self.state != WorkflowState::FormEntry {
            return Outcome::Ignored;
        }

        debug!(field = edit.field().wire_name(), "Field edited");
        self.form.apply(edit);
        self.notice = None;

        Outcome::Applied
    }

    fn retake(&mut self) -> Outcome {
        if self.state != WorkflowState::FormEntry {
            return Outcome::Ignored;
        }

        self.reset();

        Outcome::Applied
    }

    fn submit(&mut self) -> Outcome {
        if self.state != WorkflowState::FormEntry {
            return Outcome::Ignored;
        }

        let Some(capture) = self.capture.as_ref() else {
            error!(workflow_id = %self.id, "Form entry without a captured photo");
            self.reset();
            return Outcome::Applied;
        };

        let request = match RegistrationRequest::from_form(&self.form, capture) {
            Ok(request) => request,
            Err(problem) => {
                debug!(problem = %problem, "Submit blocked by validation");
                self.notice = Some(problem);
                return Outcome::Applied;
            }
        };

        self.notice = None;

        let api = Arc::clone(&self.deps.api);
        let session = self.session.clone();
        self.pending = Some(Box::pin(async move {
            Completion::Submitted(api.register(request, &session).await)
        }));

        self.set_state(WorkflowState::Submitting);

        Outcome::Applied
    }

    fn on_submitted(&mut self, result: CoreResult<PersonRecord>) {
        // Form and photo only live through FormEntry and Submitting.
        self.release_capture();
        self.form.clear();

        match result {
            Ok(record) => {
                info!(
                    workflow_id = %self.id,
                    person_id = record.id().unwrap_or("<none>"),
                    "Registration succeeded"
                );

                // Deadline fixed now, not at first poll.
                let deadline = tokio::time::Instant::now() + self.config.auto_close_delay;
                self.pending = Some(Box::pin(async move {
                    tokio::time::sleep_until(deadline).await;
                    Completion::AutoCloseElapsed
                }));

                self.set_state(WorkflowState::Succeeded { record });
            }
            Err(e) => {
                warn!(workflow_id = %self.id, error = %e, "Registration failed");
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::from_submit_error(&e),
                });
            }
        }
    }

    fn try_again(&mut self) -> Outcome {
        if !matches!(self.state, WorkflowState::Failed { .. }) {
            return Outcome::Ignored;
        }

        self.reset();

        Outcome::Applied
    }

    fn dismiss(&mut self) -> Outcome {
        if !matches!(self.state, WorkflowState::Succeeded { .. }) {
            return Outcome::Ignored;
        }

        self.teardown();

        Outcome::Applied
    }

    /// Replace the current photo. The old preview is revoked before the new
    /// one is created.
    fn install_capture(&mut self, mode: CaptureMode, media: Vec<u8>, media_type: &str) {
        self.release_capture();

        match CaptureSession::new(mode, media, media_type, Arc::clone(&self.deps.previews)) {
            Ok(session) => {
                info!(
                    workflow_id = %self.id,
                    mode = ?mode,
                    bytes = session.media().len(),
                    "Photo acquired"
                );
                self.capture = Some(session);
                self.set_state(WorkflowState::FormEntry);
            }
            Err(e) => {
                error!(workflow_id = %self.id, error = %e, "Failed to create preview");
                self.set_state(WorkflowState::Failed {
                    reason: FailureReason::CaptureFailed,
                });
            }
        }
    }

    /// Back to `Idle` with nothing held.
    fn reset(&mut self) {
        self.pending = None;
        self.close_stream();
        self.release_capture();
        self.form.clear();
        self.notice = None;
        self.set_state(WorkflowState::Idle);
    }

    /// Cancel the outstanding step first, so a timer or late response can
    /// never run teardown a second time, then release everything.
    fn teardown(&mut self) {
        if self.closed {
            return;
        }

        self.pending = None;

        if let WorkflowState::Succeeded { record } = &self.state {
            if !self.record_delivered {
                self.record_delivered = true;
                self.deps.host.on_registered(record);
            }
        }

        self.reset();
        self.closed = true;

        info!(workflow_id = %self.id, "Enrollment workflow closed");

        self.deps.host.on_closed();
    }

    fn close_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.close();
        }
    }

    fn release_capture(&mut self) {
        if self.capture.take().is_some() {
            debug!(workflow_id = %self.id, "Captured photo released");
        }
    }

    fn set_state(&mut self, next: WorkflowState) {
        if self.state != next {
            debug!(
                workflow_id = %self.id,
                from = self.state.name(),
                to = next.name(),
                "State transition"
            );
        }
        self.state = next;
    }
}

impl std::fmt::Debug for CaptureWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureWorkflow")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("camera_open", &self.stream.is_some())
            .field("has_capture", &self.capture.is_some())
            .field("pending", &self.pending.is_some())
            .field("closed", &self.closed)
            .finish()
    }
}
