use face_enroll_core::{
    CameraPhase, CaptureMode, FormField, RegistrationForm, WorkflowState, WorkflowView,
};

use std::fmt::Write;

/// Plain-text rendering of a workflow snapshot.
pub(crate) fn render(view: &WorkflowView<'_>) -> String {
    let mut out = String::new();

    let headline = match view.state {
        WorkflowState::Idle => "Add a photo: 'camera' or 'file <path>'".to_string(),
        WorkflowState::AcquiringCamera { phase } => match phase {
            CameraPhase::Requesting => "Waiting for camera access...".to_string(),
            CameraPhase::Live => "Camera live: 'shutter' to capture, 'cancel' to go back".to_string(),
            CameraPhase::Encoding => "Capturing...".to_string(),
        },
        WorkflowState::FormEntry => "Fill in the details, then 'submit' ('retake' to change the photo)".to_string(),
        WorkflowState::Submitting => "Registering...".to_string(),
        WorkflowState::Succeeded { record } => format!(
            "Registered {} ({}). Closing shortly, 'dismiss' to close now",
            record.name().unwrap_or("person"),
            record.id().unwrap_or("no id")
        ),
        WorkflowState::Failed { reason } => format!("Error: {}. 'retry' to start over", reason.message()),
    };

    let _ = writeln!(out, "[{}] {}", view.state.name(), headline);

    if let (Some(mode), Some(url)) = (view.capture_mode, view.preview_url) {
        let source = match mode {
            CaptureMode::Camera => "camera",
            CaptureMode::Upload => "upload",
        };
        let _ = writeln!(out, "  photo ({}): {}", source, url);
    }

    if matches!(view.state, WorkflowState::FormEntry | WorkflowState::Submitting) {
        render_form(&mut out, view.form);
    }

    if let Some(notice) = view.notice {
        let _ = writeln!(out, "  ! {}", notice);
    }

    if view.closed {
        let _ = writeln!(out, "  (closed)");
    }

    out
}

fn render_form(out: &mut String, form: &RegistrationForm) {
    let blood_group = form.blood_group().map(|group| group.as_str()).unwrap_or("");

    for field in FormField::ALL {
        let value = match field {
            FormField::FullName => form.full_name(),
            FormField::EmployeeId => form.employee_id(),
            FormField::Office => form.office(),
            FormField::BloodGroup => blood_group,
        };
        let shown = if value.trim().is_empty() { "-" } else { value };
        let _ = writeln!(out, "  {:<12} {}", field.label(), shown);
    }
}
