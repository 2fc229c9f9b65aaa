use crate::renderer::render;

use face_enroll_core::{
    BloodGroup, CameraPhase, CaptureMode, FailureReason, FieldEdit, FormField, InputError,
    PersonRecord, RegistrationForm, WorkflowState, WorkflowView,
};

use serde_json::json;

fn view<'a>(state: &'a WorkflowState, form: &'a RegistrationForm) -> WorkflowView<'a> {
    WorkflowView {
        state,
        form,
        preview_url: None,
        capture_mode: None,
        notice: None,
        camera_open: false,
        busy: false,
        closed: false,
    }
}

/// WHAT: Form entry shows the photo, every field and the inline notice
/// WHY: The user must see what is filled and what is missing
#[test]
fn given_form_entry_with_notice_when_rendering_then_fields_and_notice_shown() {
    // Given: A half-filled form with an incomplete-form notice
    let state = WorkflowState::FormEntry;
    let mut form = RegistrationForm::default();
    form.apply(FieldEdit::FullName("Alice".to_string()));
    form.apply(FieldEdit::BloodGroup(Some(BloodGroup::ONegative)));
    let notice = InputError::IncompleteForm {
        missing: vec![FormField::EmployeeId, FormField::Office],
    };
    let mut snapshot = view(&state, &form);
    snapshot.preview_url = Some("file:///tmp/preview-1.jpg");
    snapshot.capture_mode = Some(CaptureMode::Camera);
    snapshot.notice = Some(&notice);

    // When: Rendering
    let text = render(&snapshot);

    // Then: Photo, values, placeholders and notice present
    assert!(text.starts_with("[form_entry]"));
    assert!(text.contains("photo (camera): file:///tmp/preview-1.jpg"));
    assert!(text.contains("Alice"));
    assert!(text.contains("O-"));
    assert!(text.contains("Employee ID  -"));
    assert!(text.contains("! Please fill in all fields"));
}

/// WHAT: Failure shows the server message
/// WHY: "duplicate employee_id" tells the user what to fix
#[test]
fn given_failed_with_detail_when_rendering_then_detail_shown() {
    // Given
    let state = WorkflowState::Failed {
        reason: FailureReason::Rejected {
            detail: "duplicate employee_id".to_string(),
        },
    };
    let form = RegistrationForm::default();

    // When
    let text = render(&view(&state, &form));

    // Then
    assert!(text.contains("Error: duplicate employee_id"));
    assert!(text.contains("retry"));
}

/// WHAT: Success shows the registered name and id
/// WHY: Confirms which person the service created
#[test]
fn given_succeeded_when_rendering_then_name_and_id_shown() {
    // Given
    let state = WorkflowState::Succeeded {
        record: PersonRecord::new(json!({ "id": "p1", "name": "Alice" })),
    };
    let form = RegistrationForm::default();

    // When
    let text = render(&view(&state, &form));

    // Then
    assert!(text.contains("Registered Alice (p1)"));
    assert!(!text.contains("Full name"));
}

/// WHAT: Each camera phase has its own prompt
/// WHY: The shutter is only meaningful while live
#[test]
fn given_camera_phases_when_rendering_then_distinct_prompts() {
    // Given
    let form = RegistrationForm::default();
    let requesting = WorkflowState::AcquiringCamera {
        phase: CameraPhase::Requesting,
    };
    let live = WorkflowState::AcquiringCamera {
        phase: CameraPhase::Live,
    };

    // When
    let waiting = render(&view(&requesting, &form));
    let shutter = render(&view(&live, &form));

    // Then
    assert!(waiting.contains("Waiting for camera access"));
    assert!(shutter.contains("'shutter'"));
    assert_ne!(waiting, shutter);
}
