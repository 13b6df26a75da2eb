use crate::WheelSettings;
use endstop_viewport::ScrollDirection;

/// A wheel-scroll event as delivered by the host.
///
/// `delta` is the platform's signed scroll amount: non-negative values
/// scroll toward the document start, negative values toward the end. The
/// handled flag starts unset; the interceptor sets it unconditionally so the
/// host's default scroller never runs on top of the guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta: f64,
    handled: bool,
}

impl WheelEvent {
    pub const fn new(delta: f64) -> Self {
        Self {
            delta,
            handled: false,
        }
    }

    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    pub(crate) fn mark_handled(&mut self) {
        self.handled = true;
    }
}

/// Per-event scroll demand derived from a [`WheelEvent`].
///
/// Built fresh for each event and discarded with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub direction: ScrollDirection,
    /// Whole lines to scroll: `floor(|delta| / delta_per_line)`. A delta
    /// smaller than one notch requests zero lines.
    pub lines: u32,
}

impl ScrollRequest {
    pub fn from_event(event: &WheelEvent, settings: &WheelSettings) -> Self {
        let direction = if event.delta >= 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        let lines = if settings.delta_per_line > 0.0 {
            (event.delta.abs() / settings.delta_per_line).floor() as u32
        } else {
            0
        };
        Self { direction, lines }
    }
}
