use crate::{CoreResult, DeviceStream, PersonRecord};

use std::{future::Future, pin::Pin};

/// Result of the one outstanding asynchronous step.
pub(crate) enum Completion {
    CameraOpened(CoreResult<DeviceStream>),
    StillEncoded(CoreResult<Vec<u8>>),
    Submitted(CoreResult<PersonRecord>),
    AutoCloseElapsed,
}

/// The outstanding step. Dropping it cancels the step and releases anything
/// it holds, so late results can never reach a reset or closed workflow.
pub(crate) type PendingOp = Pin<Box<dyn Future<Output = Completion> + Send>>;
