use serde::{Deserialize, Serialize};

/// Platform wheel-delta units that map to one line of scrolling.
///
/// Matches the standard notch size reported by desktop mouse drivers, so one
/// physical wheel notch feels like the host's native scroll step.
pub const DEFAULT_DELTA_PER_LINE: f64 = 30.0;

/// Tunables for wheel handling.
///
/// The guard performs no file or environment I/O; hosts that persist
/// settings can embed this struct in their own configuration, which is why
/// it derives the serde traits. All fields fall back to their defaults when
/// omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    /// Wheel delta consumed per scrolled line. Hosts on platforms with a
    /// different notch size can override this; values at or below zero
    /// disable scrolling rather than divide by zero.
    pub delta_per_line: f64,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            delta_per_line: DEFAULT_DELTA_PER_LINE,
        }
    }
}
