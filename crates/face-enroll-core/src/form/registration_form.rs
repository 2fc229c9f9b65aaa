use crate::{BloodGroup, FieldEdit, FormField};

/// Metadata collected alongside the photo.
///
/// Values are kept exactly as typed; whitespace is trimmed only when the
/// request is built. A field holding only whitespace counts as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    full_name: String,
    employee_id: String,
    office: String,
    blood_group: Option<BloodGroup>,
}

impl RegistrationForm {
    /// Apply one field edit.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::FullName(v) => self.full_name = v,
            FieldEdit::EmployeeId(v) => self.employee_id = v,
            FieldEdit::Office(v) => self.office = v,
            FieldEdit::BloodGroup(v) => self.blood_group = v,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| match field {
                FormField::FullName => self.full_name.trim().is_empty(),
                FormField::EmployeeId => self.employee_id.trim().is_empty(),
                FormField::Office => self.office.trim().is_empty(),
                FormField::BloodGroup => self.blood_group.is_none(),
            })
            .collect()
    }

    /// True when all four fields hold a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == FormField::ALL.len()
    }

    /// Full name as typed.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Employee ID as typed.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Office as typed.
    pub fn office(&self) -> &str {
        &self.office
    }

    /// Selected blood group.
    pub fn blood_group(&self) -> Option<BloodGroup> {
        self.blood_group
    }
}
