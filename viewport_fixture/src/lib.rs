//! Scripted in-memory viewport for exercising the scroll guard.
//!
//! Models the host the way the guard sees it: a document of uniform-height
//! lines, a pixel viewport, and line-aligned scrolling that deliberately
//! allows overscroll -- the host default lets the last line climb all the
//! way to the top of the view, which is exactly the behavior the guard
//! exists to correct. Every scroll primitive call is recorded so tests can
//! assert the exact sequence the guard issued, and layout queries can be
//! scripted to fail after N successes for fault-injection tests.

use endstop_viewport::{
    visible_line_capacity, Extent, ScrollDirection, TextViewport, ViewLine, ViewportError,
    Visibility, VisibleLines,
};
use std::cell::Cell;

/// Synthetic per-line span width used to fabricate extents. Tests compare
/// extents for identity only, so any nonzero stride works.
const LINE_STRIDE: u32 = 80;

/// An in-memory [`TextViewport`] with scripted behavior.
#[derive(Debug, Clone)]
pub struct FixtureViewport {
    line_count: u32,
    viewport_height: f32,
    line_height: f32,
    top: u32,
    jammed: Option<ScrollDirection>,
    layout_calls: Cell<u32>,
    fail_layout_after: Option<u32>,
    scroll_log: Vec<(ScrollDirection, u32)>,
}

impl FixtureViewport {
    pub fn new(line_count: u32, viewport_height: f32, line_height: f32) -> Self {
        Self {
            line_count,
            viewport_height,
            line_height,
            top: 0,
            jammed: None,
            layout_calls: Cell::new(0),
            fail_layout_after: None,
            scroll_log: Vec::new(),
        }
    }

    /// Position the first visible line, clamped the way the host clamps.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = top.min(self.max_top());
        self
    }

    /// Make the scroll primitive silently stop moving in `direction`.
    pub fn with_jammed_scrolling(mut self, direction: ScrollDirection) -> Self {
        self.jammed = Some(direction);
        self
    }

    /// Let the first `successes` layout queries succeed, then fail the rest.
    pub fn with_layout_failure_after(mut self, successes: u32) -> Self {
        self.fail_layout_after = Some(successes);
        self
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    /// Scroll primitive calls seen so far, in order.
    pub fn scroll_log(&self) -> &[(ScrollDirection, u32)] {
        &self.scroll_log
    }

    #[track_caller]
    pub fn assert_top(&self, expected: u32) -> &Self {
        assert_eq!(
            self.top, expected,
            "first visible line is {}, expected {expected}",
            self.top
        );
        self
    }

    /// Extent the document reports for `index`.
    pub fn extent_of(&self, index: u32) -> Extent {
        let start = index * LINE_STRIDE;
        Extent::new(start, start + LINE_STRIDE - 1)
    }

    fn max_top(&self) -> u32 {
        self.line_count.saturating_sub(1)
    }
}

impl TextViewport for FixtureViewport {
    fn visible_lines(&self) -> Result<VisibleLines, ViewportError> {
        let calls = self.layout_calls.get() + 1;
        self.layout_calls.set(calls);
        if self.fail_layout_after.is_some_and(|successes| calls > successes) {
            return Err(ViewportError::host("scripted layout failure"));
        }

        let mut lines = VisibleLines::new();
        if self.line_count == 0 {
            return Ok(lines);
        }

        let full = visible_line_capacity(self.viewport_height, self.line_height);
        let fully_visible = full.min(self.line_count - self.top);
        for index in self.top..self.top + fully_visible {
            lines.push(ViewLine::new(self.extent_of(index), Visibility::Full));
        }

        // A fractional line at the bottom edge shows up as partially visible.
        let remainder = self.viewport_height - fully_visible as f32 * self.line_height;
        let next = self.top + fully_visible;
        if remainder > 0.0 && next < self.line_count {
            lines.push(ViewLine::new(self.extent_of(next), Visibility::Partial));
        }
        Ok(lines)
    }

    fn line_count(&self) -> u32 {
        self.line_count
    }

    fn line_extent(&self, index: u32) -> Option<Extent> {
        (index < self.line_count).then(|| self.extent_of(index))
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_by_lines(
        &mut self,
        direction: ScrollDirection,
        lines: u32,
    ) -> Result<(), ViewportError> {
        self.scroll_log.push((direction, lines));
        if self.jammed == Some(direction) {
            return Ok(());
        }
        self.top = match direction {
            ScrollDirection::Up => self.top.saturating_sub(lines),
            // The host default clamps at last-line-at-top, not at the
            // bottom-aligned position. Overscroll is allowed here.
            ScrollDirection::Down => self.top.saturating_add(lines).min(self.max_top()),
        };
        Ok(())
    }
}
