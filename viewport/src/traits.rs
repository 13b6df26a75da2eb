//! The capability interface a host editor supplies to the scroll guard.

use crate::{Extent, ViewLine, ViewportError};
use smallvec::SmallVec;

/// Ordered lines currently laid out in the viewport, top to bottom.
pub type VisibleLines = SmallVec<[ViewLine; 32]>;

/// Vertical scroll direction in document terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the document start.
    Up,
    /// Toward the document end.
    Down,
}

/// Everything the scroll guard needs from a host text view.
///
/// Implementations are typically cheap handles into the host's view state
/// (an `Rc`/entity reference with interior mutability), handed to the guard
/// when it is attached to a view. The trait is deliberately not `Send` or
/// `Sync`: wheel events are dispatched on the host's UI thread and the guard
/// never leaves it.
///
/// # Invariants
///
/// 1. **Snapshot freshness**: [`visible_lines`](Self::visible_lines) reports
///    the layout as of the call, including the effect of any
///    [`scroll_by_lines`](Self::scroll_by_lines) already performed during
///    the same event.
///
/// 2. **Ordering**: the returned lines are sorted by extent, top of the
///    viewport first.
///
/// 3. **Clamped scrolling**: `scroll_by_lines` may clamp at the document
///    boundaries but must not wrap or panic; a request that cannot be
///    satisfied in full moves the view as far as the host allows.
///
/// The guard treats a layout that stops changing despite further scroll
/// requests as the host's way of saying "no more room"; it never spins on it
/// (see the bounded correction walk in `endstop`).
pub trait TextViewport {
    /// Current line layout, ordered top to bottom.
    ///
    /// Fallible: the host may be queried while its layout is mid-update.
    fn visible_lines(&self) -> Result<VisibleLines, ViewportError>;

    /// Total number of lines in the document.
    fn line_count(&self) -> u32;

    /// Extent of the document line at `index`, or `None` when the index is
    /// out of the document's valid range. `None` is an expected answer, not
    /// a fault: layout and document can disagree transiently.
    fn line_extent(&self, index: u32) -> Option<Extent>;

    /// Height of one rendered line, in pixels.
    fn line_height(&self) -> f32;

    /// Height of the viewport, in pixels.
    fn viewport_height(&self) -> f32;

    /// Scroll the view by whole lines, synchronously.
    fn scroll_by_lines(
        &mut self,
        direction: ScrollDirection,
        lines: u32,
    ) -> Result<(), ViewportError>;

    /// Topmost laid-out line.
    fn first_visible_line(&self) -> Result<ViewLine, ViewportError> {
        self.visible_lines()?
            .first()
            .copied()
            .ok_or(ViewportError::EmptyLayout)
    }

    /// Bottommost laid-out line.
    fn last_visible_line(&self) -> Result<ViewLine, ViewportError> {
        self.visible_lines()?
            .last()
            .copied()
            .ok_or(ViewportError::EmptyLayout)
    }

    /// Extent of the document's final line, or `None` for an empty document.
    fn last_line_extent(&self) -> Option<Extent> {
        self.line_extent(self.line_count().checked_sub(1)?)
    }
}
