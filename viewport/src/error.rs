use thiserror::Error;

/// Faults the host viewport can raise while being queried or scrolled.
///
/// An out-of-range document line is *not* a fault; that case is the `None`
/// return of [`TextViewport::line_extent`](crate::TextViewport::line_extent).
#[derive(Debug, Error)]
pub enum ViewportError {
    /// The layout query returned no lines at all.
    #[error("viewport has no laid out lines")]
    EmptyLayout,

    /// Any other host-side failure, e.g. the layout was queried while the
    /// host was mid-update.
    #[error("host viewport fault: {0}")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ViewportError {
    pub fn host(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Host(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_fault_wraps_message() {
        let err = ViewportError::host("layout torn down");
        assert_eq!(err.to_string(), "host viewport fault: layout torn down");
    }
}
