use crate::PersonRecord;

/// Callbacks into the page that opened the workflow.
pub trait EnrollmentHost: Send + Sync {
    /// A registration succeeded. Called at most once per workflow.
    fn on_registered(&self, record: &PersonRecord);

    /// The workflow has torn down. Called exactly once per workflow.
    fn on_closed(&self);
}
