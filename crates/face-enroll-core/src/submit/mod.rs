mod api;
mod http_client;
mod person_record;
mod request;
mod session_context;

#[cfg(test)]
pub(crate) use http_client::parse_detail;

pub use {
    api::EnrollmentApi,
    http_client::{HttpEnrollmentClient, IMAGE_FIELD_NAME, IMAGE_FILE_NAME, REGISTER_PATH},
    person_record::PersonRecord,
    request::RegistrationRequest,
    session_context::SessionContext,
};
