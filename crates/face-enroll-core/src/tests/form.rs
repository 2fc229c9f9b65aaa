use crate::{BloodGroup, FieldEdit, FormField, InputError, RegistrationForm};

/// WHAT: All eight canonical labels parse, case-insensitively
/// WHY: The host accepts typed values like "ab+" for AB+
#[test]
#[allow(clippy::unwrap_used)]
fn given_canonical_labels_when_parsing_then_every_group_round_trips() {
    // Given / When / Then: Each label and its lowercase form parse back
    for group in BloodGroup::ALL {
        assert_eq!(group.as_str().parse::<BloodGroup>().unwrap(), group);
        assert_eq!(
            group.as_str().to_lowercase().parse::<BloodGroup>().unwrap(),
            group
        );
    }
    assert_eq!(" o- ".parse::<BloodGroup>().unwrap(), BloodGroup::ONegative);
}

/// WHAT: Unknown labels are rejected with the original value
/// WHY: The user needs to see what they typed
#[test]
fn given_unknown_label_when_parsing_then_invalid_blood_group() {
    // Given: A label outside the ABO/Rh set
    let input = "C+";

    // When: Parsing
    let result = input.parse::<BloodGroup>();

    // Then: Rejected
    assert_eq!(
        result,
        Err(InputError::InvalidBloodGroup {
            value: "C+".to_string()
        })
    );
}

/// WHAT: An empty form reports all four fields missing in form order
/// WHY: The inline message lists exactly what is left to fill
#[test]
fn given_empty_form_when_checking_then_all_fields_missing() {
    // Given: A default form
    let form = RegistrationForm::default();

    // When / Then: Everything missing
    assert_eq!(form.missing_fields(), FormField::ALL.to_vec());
    assert!(form.is_empty());
    assert!(!form.is_complete());
}

/// WHAT: Whitespace-only text counts as empty
/// WHY: Blank values would be rejected by the service anyway
#[test]
fn given_whitespace_office_when_checking_then_office_missing() {
    // Given: A form with a blank office
    let mut form = RegistrationForm::default();
    form.apply(FieldEdit::FullName("Alice".to_string()));
    form.apply(FieldEdit::EmployeeId("E-1".to_string()));
    form.apply(FieldEdit::Office(" \t ".to_string()));
    form.apply(FieldEdit::BloodGroup(Some(BloodGroup::BPositive)));

    // When / Then: Only the office is missing
    assert_eq!(form.missing_fields(), vec![FormField::Office]);
    assert!(!form.is_complete());
    assert!(!form.is_empty());
}

/// WHAT: Clearing a blood group makes the form incomplete again
/// WHY: The selection can be undone like any text field
#[test]
fn given_complete_form_when_clearing_blood_group_then_incomplete() {
    // Given: A complete form
    let mut form = RegistrationForm::default();
    form.apply(FieldEdit::FullName("Alice".to_string()));
    form.apply(FieldEdit::EmployeeId("E-1".to_string()));
    form.apply(FieldEdit::Office("HQ".to_string()));
    form.apply(FieldEdit::BloodGroup(Some(BloodGroup::AbNegative)));
    assert!(form.is_complete());

    // When: Unsetting the blood group
    form.apply(FieldEdit::BloodGroup(None));

    // Then: Blood group missing
    assert_eq!(form.missing_fields(), vec![FormField::BloodGroup]);

    // When: Clearing everything
    form.clear();

    // Then: Back to default
    assert_eq!(form, RegistrationForm::default());
}

/// WHAT: The incomplete-form message names the missing fields
/// WHY: Users fix forms from the message, not from the code
#[test]
fn given_missing_fields_when_formatting_error_then_labels_listed() {
    // Given: Two missing fields
    let error = InputError::IncompleteForm {
        missing: vec![FormField::FullName, FormField::BloodGroup],
    };

    // When: Formatting
    let message = error.to_string();

    // Then: Both labels present
    assert!(message.contains(FormField::FullName.label()));
    assert!(message.contains(FormField::BloodGroup.label()));
}
