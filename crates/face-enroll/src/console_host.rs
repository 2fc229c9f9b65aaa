use face_enroll_core::{EnrollmentHost, PersonRecord};

use tracing::{debug, info};

/// Host callbacks printed to the console.
#[derive(Debug, Default)]
pub(crate) struct ConsoleHost;

impl EnrollmentHost for ConsoleHost {
    fn on_registered(&self, record: &PersonRecord) {
        info!(person_id = record.id().unwrap_or("<none>"), "Host notified of registration");
        debug!(record = %record.as_json(), "Registered person record");
        println!("{}", registration_summary(record));
    }

    fn on_closed(&self) {
        info!("Host notified of close");
        println!("enrollment closed");
    }
}

/// One-line confirmation for a registered person.
pub(crate) fn registration_summary(record: &PersonRecord) -> String {
    let id = record.id().unwrap_or("<no id>");
    let name = record.name().unwrap_or("<no name>");

    match record.employee_id() {
        Some(employee_id) => format!("registered: {} [{}] ({})", name, employee_id, id),
        None => format!("registered: {} ({})", name, id),
    }
}
