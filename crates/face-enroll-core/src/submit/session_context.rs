/// Ambient credentials for calls to the enrollment service.
///
/// Supplied by the host's auth/session provider and passed to the workflow
/// explicitly rather than read from global storage.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    bearer_token: Option<String>,
}

impl SessionContext {
    /// No credential; requests go out without an `Authorization` header.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attach a bearer token. Blank tokens are treated as absent.
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let bearer_token = (!token.trim().is_empty()).then_some(token);
        Self { bearer_token }
    }

    /// Token to send, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
