use endstop_viewport::ViewportError;
use thiserror::Error;

pub type Result<T, E = CorrectionError> = std::result::Result<T, E>;

/// Failure of one wheel-event handling pass.
///
/// Either the host faulted while being queried or scrolled, or the
/// corrective walk-back exhausted its pass bound without the host making
/// progress. Both are reported to the configured
/// [`DiagnosticSink`](crate::DiagnosticSink) and then suppressed; the event
/// stays consumed either way.
#[derive(Debug, Error)]
pub enum CorrectionError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error("scroll primitive made no progress after {passes} corrective passes")]
    Stalled { passes: u32 },
}

impl CorrectionError {
    /// True when the fault came from the host rather than the guard's own
    /// pass bound.
    pub fn is_host_fault(&self) -> bool {
        matches!(self, Self::Viewport(_))
    }
}
