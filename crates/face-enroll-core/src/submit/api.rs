use crate::{CoreResult, PersonRecord, RegistrationRequest, SessionContext};

use async_trait::async_trait;

/// The remote enrollment service.
#[async_trait]
pub trait EnrollmentApi: Send + Sync {
    /// Submit one registration.
    ///
    /// A non-2xx answer is [`EnrollError::Rejected`](crate::EnrollError::Rejected)
    /// carrying the body's `detail` when it had one.
    async fn register(
        &self,
        request: RegistrationRequest,
        session: &SessionContext,
    ) -> CoreResult<PersonRecord>;
}
