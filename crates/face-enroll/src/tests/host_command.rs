use crate::{AppError, HostCommand};

use face_enroll_core::{BloodGroup, FieldEdit};

use std::path::PathBuf;

/// WHAT: Bare verbs map to their commands
/// WHY: Each console verb drives exactly one workflow action
#[test]
#[allow(clippy::unwrap_used)]
fn given_bare_verbs_when_parsing_then_matching_commands() {
    // Given / When / Then
    let cases = [
        ("camera", HostCommand::UseCamera),
        ("shutter", HostCommand::Shutter),
        ("cancel", HostCommand::CancelCamera),
        ("retake", HostCommand::Retake),
        ("SUBMIT", HostCommand::Submit),
        ("retry", HostCommand::Retry),
        ("dismiss", HostCommand::Dismiss),
        ("status", HostCommand::Status),
        ("help", HostCommand::Help),
        ("close", HostCommand::Close),
        ("  quit  ", HostCommand::Close),
    ];
    for (line, expected) in cases {
        assert_eq!(line.parse::<HostCommand>().unwrap(), expected, "line {:?}", line);
    }
}

/// WHAT: File paths keep inner spaces
/// WHY: Photo folders often have spaces in their names
#[test]
#[allow(clippy::unwrap_used)]
fn given_path_with_spaces_when_parsing_file_then_whole_path_kept() {
    // Given: A path with spaces
    let line = "file /home/alice/My Photos/face.png";

    // When: Parsing
    let command = line.parse::<HostCommand>().unwrap();

    // Then: Whole path kept
    assert_eq!(
        command,
        HostCommand::ChooseFile {
            path: PathBuf::from("/home/alice/My Photos/face.png")
        }
    );
}

/// WHAT: Field values keep inner spaces and blood groups parse case-insensitively
/// WHY: Names have spaces; users type "ab+" as often as "AB+"
#[test]
#[allow(clippy::unwrap_used)]
fn given_set_lines_when_parsing_then_field_edits() {
    // Given / When / Then
    assert_eq!(
        "set name Alice van Dyke".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::FullName("Alice van Dyke".to_string()))
    );
    assert_eq!(
        "set employee-id E-1001".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::EmployeeId("E-1001".to_string()))
    );
    assert_eq!(
        "set office Head Office".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::Office("Head Office".to_string()))
    );
    assert_eq!(
        "set blood ab+".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::BloodGroup(Some(BloodGroup::AbPositive)))
    );
    assert_eq!(
        "set blood".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::BloodGroup(None))
    );
    assert_eq!(
        "set name".parse::<HostCommand>().unwrap(),
        HostCommand::Set(FieldEdit::FullName(String::new()))
    );
}

/// WHAT: Photo download takes an id and a path
/// WHY: Both are required to save the photo
#[test]
#[allow(clippy::unwrap_used)]
fn given_photo_line_when_parsing_then_fetch_photo() {
    // Given / When
    let command = "photo p1 /tmp/p1.jpg".parse::<HostCommand>().unwrap();

    // Then
    assert_eq!(
        command,
        HostCommand::FetchPhoto {
            person_id: "p1".to_string(),
            path: PathBuf::from("/tmp/p1.jpg"),
        }
    );
}

/// WHAT: Malformed lines are parse errors, never panics
/// WHY: Typos must leave the workflow untouched
#[test]
fn given_malformed_lines_when_parsing_then_command_parse_error() {
    // Given / When / Then
    for line in [
        "teleport",
        "file",
        "photo p1",
        "set",
        "set height 180",
        "set blood Z+",
    ] {
        assert!(
            matches!(line.parse::<HostCommand>(), Err(AppError::CommandParse { .. })),
            "line {:?}",
            line
        );
    }
}
