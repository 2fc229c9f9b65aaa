use crate::BloodGroup;

/// The four registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Person's full name.
    FullName,
    /// Employee identifier.
    EmployeeId,
    /// Office or site the person works from.
    Office,
    /// Blood group.
    BloodGroup,
}

impl FormField {
    /// Form order, used when reporting missing fields.
    pub const ALL: [FormField; 4] = [
        FormField::FullName,
        FormField::EmployeeId,
        FormField::Office,
        FormField::BloodGroup,
    ];

    /// Multipart key for this field.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::FullName => "name",
            FormField::EmployeeId => "employee_id",
            FormField::Office => "office",
            FormField::BloodGroup => "blood_group",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::EmployeeId => "Employee ID",
            FormField::Office => "Office",
            FormField::BloodGroup => "Blood group",
        }
    }
}

/// A single field edit forwarded from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Replace the full name.
    FullName(String),
    /// Replace the employee ID.
    EmployeeId(String),
    /// Replace the office.
    Office(String),
    /// Select or clear the blood group.
    BloodGroup(Option<BloodGroup>),
}

impl FieldEdit {
    /// Field this edit targets.
    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::FullName(_) => FormField::FullName,
            FieldEdit::EmployeeId(_) => FormField::EmployeeId,
            FieldEdit::Office(_) => FormField::Office,
            FieldEdit::BloodGroup(_) => FormField::BloodGroup,
        }
    }
}
