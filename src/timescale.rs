//! Vertical time geometry for a day column.
//!
//! Converts between minutes and pixel offsets, snaps drag positions to
//! the configured minute grid, and formats clock labels.
//!
//! # Example
//!
//! ```
//! use u_calendar::timescale::TimeScale;
//!
//! let scale = TimeScale::new(120.0).with_snap_minutes(15);
//! assert_eq!(scale.minutes_to_y(90), 180.0);
//! assert_eq!(scale.snap_y(37.0), 30.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Minutes, TimeSpan};

/// Minute ↔ pixel mapping for one day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeScale {
    /// Height of one hour (px).
    pub hour_height_px: f64,
    /// Drag snapping granularity (minutes).
    pub snap_minutes: Minutes,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            hour_height_px: 60.0,
            snap_minutes: 5,
        }
    }
}

impl TimeScale {
    /// Creates a scale with the given hour height and 5-minute snapping.
    pub fn new(hour_height_px: f64) -> Self {
        Self {
            hour_height_px,
            ..Default::default()
        }
    }

    /// Sets the snapping granularity.
    pub fn with_snap_minutes(mut self, snap_minutes: Minutes) -> Self {
        self.snap_minutes = snap_minutes;
        self
    }

    #[inline]
    fn px_per_minute(&self) -> f64 {
        self.hour_height_px / 60.0
    }

    /// Pixel offset of a minute.
    pub fn minutes_to_y(&self, minutes: Minutes) -> f64 {
        f64::from(minutes) * self.px_per_minute()
    }

    /// Minute at a pixel offset (fractional).
    pub fn y_to_minutes(&self, y: f64) -> f64 {
        y / self.px_per_minute()
    }

    /// Height of one snap step (px).
    pub fn snap_interval_px(&self) -> f64 {
        self.px_per_minute() * f64::from(self.snap_minutes)
    }

    /// Shortest block a drag or resize may produce (a quarter hour).
    pub fn min_height_px(&self) -> f64 {
        self.hour_height_px / 4.0
    }

    /// Rounds an offset to the nearest snap step, never above the top edge.
    pub fn snap_y(&self, y: f64) -> f64 {
        let step = self.snap_interval_px();
        if step <= 0.0 {
            return y.max(0.0);
        }
        ((y / step).round() * step).max(0.0)
    }

    /// Rounds a height to the nearest snap step, floored at [`min_height_px`](Self::min_height_px).
    pub fn snap_height(&self, height: f64) -> f64 {
        let step = self.snap_interval_px();
        let snapped = if step > 0.0 {
            (height / step).round() * step
        } else {
            height
        };
        snapped.max(self.min_height_px())
    }

    /// Rendered height of an item, overnight items included.
    pub fn span_height(&self, from: Minutes, to: Minutes) -> f64 {
        f64::from(TimeSpan::normalized(from, to).duration()) * self.px_per_minute()
    }

    /// Minute span of a block dropped at `top_px` with `height_px`.
    ///
    /// The top is snapped first; both ends round to whole minutes.
    pub fn draft_span(&self, top_px: f64, height_px: f64) -> TimeSpan {
        let top = self.snap_y(top_px);
        let from = self.y_to_minutes(top).round() as Minutes;
        let to = self.y_to_minutes(top + height_px).round() as Minutes;
        TimeSpan {
            start: from,
            end: to,
        }
    }
}

/// Formats a minute of day as a 12-hour `h:mm` label without AM/PM.
///
/// Negative input clamps to midnight; fractional minutes round.
pub fn format_clock(total_minutes: f64) -> String {
    let total = total_minutes.round().max(0.0) as i64;
    let hours24 = total / 60;
    let minutes = total % 60;
    let hours12 = match hours24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hours12}:{minutes:02}")
}
