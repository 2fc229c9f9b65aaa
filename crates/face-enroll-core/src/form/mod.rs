mod blood_group;
mod form_field;
mod registration_form;

pub use {
    blood_group::BloodGroup,
    form_field::{FieldEdit, FormField},
    registration_form::RegistrationForm,
};
