//! Wheel-event gating in front of the host's default scroller.

use crate::{
    corrector, DiagnosticSink, Result, ScrollRequest, TracingSink, WheelEvent, WheelSettings,
};
use endstop_viewport::{ScrollDirection, TextViewport};
use std::sync::Arc;
use tracing::trace;

/// Owns wheel events for one text viewport.
///
/// Attach one interceptor per view; the host routes raw wheel events through
/// [`handle`](Self::handle) before its own scroller sees them. Every event
/// comes back marked handled (scrolled, corrected, or untouched after a
/// suppressed fault), so the host's unbounded default scroll never runs.
///
/// ```
/// use endstop::{WheelEvent, WheelInterceptor};
/// use viewport_fixture::FixtureViewport;
///
/// let view = FixtureViewport::new(100, 300.0, 15.0).with_top(75);
/// let mut guard = WheelInterceptor::new(view);
///
/// let mut event = WheelEvent::new(-300.0);
/// guard.handle(&mut event);
///
/// assert!(event.is_handled());
/// guard.viewport().assert_top(80);
/// ```
pub struct WheelInterceptor<V> {
    viewport: V,
    settings: WheelSettings,
    sink: Arc<dyn DiagnosticSink>,
}

impl<V: TextViewport> WheelInterceptor<V> {
    /// Attach to a viewport with default settings and the tracing sink.
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            settings: WheelSettings::default(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_settings(mut self, settings: WheelSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Handle one wheel event.
    ///
    /// Faults raised by the host mid-pass are reported to the diagnostic
    /// sink and suppressed; whatever scrolling already landed stays in
    /// effect. The event is marked handled unconditionally.
    pub fn handle(&mut self, event: &mut WheelEvent) {
        if let Err(fault) = self.preprocess(event) {
            self.sink.correction_fault(&fault);
        }
        event.mark_handled();
    }

    fn preprocess(&mut self, event: &WheelEvent) -> Result<()> {
        let request = ScrollRequest::from_event(event, &self.settings);
        match request.direction {
            // Past-start overscroll is not this guard's concern.
            ScrollDirection::Up => corrector::scroll_and_correct(&mut self.viewport, request),
            ScrollDirection::Down => self.scroll_down(request),
        }
    }

    /// Downward gating: scroll normally until the last line shows up, then
    /// only reveal its cut-off remainder, then stop consuming motion.
    fn scroll_down(&mut self, request: ScrollRequest) -> Result<()> {
        let last_visible = self.viewport.last_visible_line()?;
        let at_last_line = self.viewport.last_line_extent() == Some(last_visible.extent);
        if !at_last_line {
            return corrector::scroll_and_correct(&mut self.viewport, request);
        }
        if last_visible.is_partially_visible() {
            // One line brings it fully into view; the requested magnitude is
            // dropped for this event.
            trace!(lines = request.lines, "revealing clipped last line");
            self.viewport.scroll_by_lines(ScrollDirection::Down, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectingSink;
    use viewport_fixture::FixtureViewport;

    fn guard_with_sink(
        view: FixtureViewport,
    ) -> (WheelInterceptor<FixtureViewport>, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let guard = WheelInterceptor::new(view).with_sink(sink.clone());
        (guard, sink)
    }

    #[test]
    fn upward_events_always_scroll() {
        let (mut guard, sink) = guard_with_sink(FixtureViewport::new(100, 300.0, 15.0).with_top(50));
        let mut event = WheelEvent::new(300.0);
        guard.handle(&mut event);

        assert!(event.is_handled());
        guard.viewport().assert_top(40);
        assert!(sink.is_empty());
    }

    #[test]
    fn flush_bottom_consumes_the_event_without_scrolling() {
        let (mut guard, sink) = guard_with_sink(FixtureViewport::new(100, 300.0, 15.0).with_top(80));
        let mut event = WheelEvent::new(-600.0);
        guard.handle(&mut event);

        assert!(event.is_handled());
        guard.viewport().assert_top(80);
        assert!(guard.viewport().scroll_log().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn clipped_last_line_is_revealed_by_exactly_one_line() {
        // 310px viewport over 15px lines: 20 full lines plus a clipped 21st.
        let (mut guard, _) = guard_with_sink(FixtureViewport::new(100, 310.0, 15.0).with_top(79));
        let mut event = WheelEvent::new(-900.0);
        guard.handle(&mut event);

        guard.viewport().assert_top(80);
        assert_eq!(guard.viewport().scroll_log().len(), 1);
    }

    #[test]
    fn layout_fault_is_suppressed_and_reported() {
        let view = FixtureViewport::new(100, 300.0, 15.0)
            .with_top(10)
            .with_layout_failure_after(1);
        let (mut guard, sink) = guard_with_sink(view);

        let mut event = WheelEvent::new(-300.0);
        guard.handle(&mut event);

        assert!(event.is_handled());
        let faults = sink.faults();
        assert_eq!(faults.len(), 1);
        assert!(faults[0].contains("host viewport fault"));
    }
}
