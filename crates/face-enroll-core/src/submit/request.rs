use crate::{BloodGroup, CaptureSession, FormField, InputError, RegistrationForm};

/// A complete registration, ready to be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    image: Vec<u8>,
    image_media_type: String,
    full_name: String,
    employee_id: String,
    office: String,
    blood_group: BloodGroup,
}

impl RegistrationRequest {
    /// Build a request from the captured photo and the form.
    ///
    /// Fails with [`InputError::IncompleteForm`] when any field is empty.
    pub fn from_form(form: &RegistrationForm, capture: &CaptureSession) -> Result<Self, InputError> {
        let missing = form.missing_fields();

        let Some(blood_group) = form.blood_group().filter(|_| missing.is_empty()) else {
            return Err(InputError::IncompleteForm { missing });
        };

        Ok(Self {
            image: capture.media().to_vec(),
            image_media_type: capture.media_type().to_string(),
            full_name: form.full_name().trim().to_string(),
            employee_id: form.employee_id().trim().to_string(),
            office: form.office().trim().to_string(),
            blood_group,
        })
    }

    /// Encoded photo.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// Media type of the photo.
    pub fn image_media_type(&self) -> &str {
        &self.image_media_type
    }

    /// Consume the request, returning the photo bytes and the text fields.
    pub fn into_parts(self) -> (Vec<u8>, String, [(&'static str, String); 4]) {
        let fields = [
            (FormField::FullName.wire_name(), self.full_name),
            (FormField::EmployeeId.wire_name(), self.employee_id),
            (FormField::Office.wire_name(), self.office),
            (
                FormField::BloodGroup.wire_name(),
                self.blood_group.as_str().to_string(),
            ),
        ];
        (self.image, self.image_media_type, fields)
    }
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("image_bytes", &self.image.len())
            .field("image_media_type", &self.image_media_type)
            .field("employee_id", &self.employee_id)
            .finish_non_exhaustive()
    }
}
