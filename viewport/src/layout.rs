use crate::Extent;

/// How much of a laid-out line falls inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The whole line height fits inside the viewport.
    Full,
    /// The line is clipped by a viewport edge.
    Partial,
    /// The line is laid out but entirely outside the viewport.
    Hidden,
}

/// One laid-out line as reported by the host's layout query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLine {
    pub extent: Extent,
    pub visibility: Visibility,
}

impl ViewLine {
    pub const fn new(extent: Extent, visibility: Visibility) -> Self {
        Self { extent, visibility }
    }

    pub const fn is_fully_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Full)
    }

    pub const fn is_partially_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Partial)
    }
}

/// Number of lines that fit fully inside a viewport of the given pixel
/// height, rounded down.
///
/// Degenerate metrics (zero or negative height, zero or negative line
/// height) yield a capacity of zero rather than a fault; callers treat that
/// the same as a document that outgrows its viewport.
pub fn visible_line_capacity(viewport_height: f32, line_height: f32) -> u32 {
    if line_height <= 0.0 || viewport_height <= 0.0 {
        return 0;
    }
    (viewport_height / line_height).floor() as u32
}
