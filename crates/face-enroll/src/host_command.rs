use crate::AppError;

use face_enroll_core::{BloodGroup, FieldEdit};

use std::{panic::Location, path::PathBuf, str::FromStr};

use error_location::ErrorLocation;

/// Commands typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Request the camera.
    UseCamera,
    /// Capture a still from the live camera.
    Shutter,
    /// Leave the camera without capturing.
    CancelCamera,
    /// Use a photo file instead of the camera.
    ChooseFile {
        /// File to read.
        path: PathBuf,
    },
    /// Change one form field.
    Set(FieldEdit),
    /// Drop the photo and the form.
    Retake,
    /// Submit the registration.
    Submit,
    /// Reset after a failure.
    Retry,
    /// Close the success view now.
    Dismiss,
    /// Download a registered person's photo.
    FetchPhoto {
        /// Person identifier.
        person_id: String,
        /// Where to write the photo.
        path: PathBuf,
    },
    /// Print the current view.
    Status,
    /// Print the command list.
    Help,
    /// Close the workflow and exit.
    Close,
}

/// Usage text for [`HostCommand::Help`].
pub(crate) const HELP: &str = "\
commands:
  camera                        start the camera
  shutter                       capture a still from the live camera
  cancel                        leave the camera
  file <path>                   use a photo file
  set name <value>              full name
  set employee-id <value>       employee ID
  set office <value>            office
  set blood <A+|A-|B+|B-|AB+|AB-|O+|O->   blood group (empty clears)
  retake                        drop the photo and the form
  submit                        register the person
  retry                         start over after a failure
  dismiss                       close the success view now
  photo <id> <path>             download a registered person's photo
  status                        show the current state
  help                          show this list
  close | quit                  close the enrollment and exit";

impl FromStr for HostCommand {
    type Err = AppError;

    #[track_caller]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        let invalid = |reason: String| AppError::CommandParse {
            reason,
            location: ErrorLocation::from(Location::caller()),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "camera" => HostCommand::UseCamera,
            "shutter" | "capture" => HostCommand::Shutter,
            "cancel" => HostCommand::CancelCamera,
            "file" => {
                if rest.is_empty() {
                    return Err(invalid("usage: file <path>".to_string()));
                }
                HostCommand::ChooseFile {
                    path: PathBuf::from(rest),
                }
            }
            "set" => HostCommand::Set(parse_field(rest).map_err(invalid)?),
            "retake" => HostCommand::Retake,
            "submit" => HostCommand::Submit,
            "retry" => HostCommand::Retry,
            "dismiss" => HostCommand::Dismiss,
            "photo" => match rest.split_once(char::is_whitespace) {
                Some((person_id, path)) if !path.trim().is_empty() => HostCommand::FetchPhoto {
                    person_id: person_id.to_string(),
                    path: PathBuf::from(path.trim()),
                },
                _ => return Err(invalid("usage: photo <id> <path>".to_string())),
            },
            "status" | "" => HostCommand::Status,
            "help" | "?" => HostCommand::Help,
            "close" | "quit" | "exit" => HostCommand::Close,
            other => return Err(invalid(format!("unknown command '{}', try 'help'", other))),
        };

        Ok(command)
    }
}

fn parse_field(rest: &str) -> Result<FieldEdit, String> {
    let (key, value) = rest
        .split_once(char::is_whitespace)
        .map(|(key, value)| (key, value.trim()))
        .unwrap_or((rest, ""));

    match key.to_ascii_lowercase().as_str() {
        "name" => Ok(FieldEdit::FullName(value.to_string())),
        "employee-id" | "employee_id" => Ok(FieldEdit::EmployeeId(value.to_string())),
        "office" => Ok(FieldEdit::Office(value.to_string())),
        "blood" | "blood-group" | "blood_group" => {
            if value.is_empty() {
                Ok(FieldEdit::BloodGroup(None))
            } else {
                value
                    .parse::<BloodGroup>()
                    .map(|group| FieldEdit::BloodGroup(Some(group)))
                    .map_err(|e| e.to_string())
            }
        }
        "" => Err("usage: set <name|employee-id|office|blood> <value>".to_string()),
        other => Err(format!("unknown field '{}'", other)),
    }
}
