//! Scroll application and past-end overshoot correction.
//!
//! The corrector is stateless: each call reads the viewport fresh, applies
//! the requested line-scroll, and, only when scrolling toward the document
//! end brought the last line into view, walks the view back up one line at
//! a time until the last line sits flush with the viewport bottom.

use crate::{CorrectionError, Result, ScrollRequest};
use endstop_viewport::{visible_line_capacity, ScrollDirection, TextViewport};
use tracing::{debug, trace};

/// Apply `request` and correct any past-end overshoot it caused.
///
/// Scrolling toward the document start is applied verbatim; past-start
/// behavior is the host's business. Scrolling toward the end triggers the
/// overshoot check of [`correct_overshoot`] after the scroll lands.
pub(crate) fn scroll_and_correct<V: TextViewport>(
    viewport: &mut V,
    request: ScrollRequest,
) -> Result<()> {
    viewport.scroll_by_lines(request.direction, request.lines)?;
    match request.direction {
        ScrollDirection::Up => Ok(()),
        ScrollDirection::Down => correct_overshoot(viewport),
    }
}

/// If the document's last line just became visible, walk the viewport back
/// up until its first visible line starts at or before the correction
/// target, leaving the last line flush with the viewport bottom.
///
/// The walk is bounded by the document's line count at entry; a host whose
/// scroll primitive stops making progress trips [`CorrectionError::Stalled`]
/// instead of looping forever.
fn correct_overshoot<V: TextViewport>(viewport: &mut V) -> Result<()> {
    let last_visible = viewport.last_visible_line()?;
    let Some(last_extent) = viewport.last_line_extent() else {
        // Empty document, nothing to align against.
        return Ok(());
    };
    if last_visible.extent != last_extent {
        return Ok(());
    }

    let target = correction_target(viewport);
    let Some(target_extent) = viewport.line_extent(target) else {
        // Layout and document disagree about the line count right now.
        // Expected during edits; skip the pass and keep the applied scroll.
        trace!(target_line = target, "correction target out of range, skipping");
        return Ok(());
    };

    let max_passes = viewport.line_count();
    let mut passes = 0u32;
    let mut first = viewport.first_visible_line()?;
    while first.extent.start > target_extent.start {
        if passes >= max_passes {
            return Err(CorrectionError::Stalled { passes });
        }
        viewport.scroll_by_lines(ScrollDirection::Up, 1)?;
        first = viewport.first_visible_line()?;
        passes += 1;
    }

    if passes > 0 {
        debug!(
            passes,
            target_line = target,
            "aligned last line with viewport bottom"
        );
    }
    Ok(())
}

/// Line index that should top the viewport when the last line is flush with
/// its bottom: total lines minus the fully-visible capacity, floored at
/// zero. Not reduced by one; the spare index absorbs fractional-line
/// rounding in the capacity.
fn correction_target<V: TextViewport>(viewport: &V) -> u32 {
    let capacity = visible_line_capacity(viewport.viewport_height(), viewport.line_height());
    viewport.line_count().saturating_sub(capacity)
}
