//! Fault reporting for suppressed correction failures.
//!
//! The interceptor never lets a fault escape to the host's event dispatch;
//! it reports the fault here and consumes the event anyway. Hosts pick the
//! sink when attaching the guard: the default warns through `tracing`
//! (subscriber installation is the host application's job), and
//! [`CollectingSink`] retains faults for tests or in-editor diagnostics.

use crate::CorrectionError;
use parking_lot::Mutex;
use tracing::warn;

/// Receives faults the interceptor suppressed.
pub trait DiagnosticSink: Send + Sync {
    fn correction_fault(&self, fault: &CorrectionError);
}

/// Default sink: one `tracing` warning per suppressed fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn correction_fault(&self, fault: &CorrectionError) {
        warn!(%fault, "wheel correction suppressed a fault");
    }
}

/// Retains formatted faults for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    faults: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faults(&self) -> Vec<String> {
        self.faults.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.faults.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn correction_fault(&self, fault: &CorrectionError) {
        self.faults.lock().push(fault.to_string());
    }
}
