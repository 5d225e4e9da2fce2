use serde::{Deserialize, Serialize};

/// Rendering-context parameters for the layout computer.
///
/// Every field has a default matching the schedule widget, so a partial JSON
/// object (or `{}`) is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutParams {
    /// Length of the timeline in minutes. Does not clamp task geometry.
    pub day_minutes: i32,
    /// Width of the task area, excluding the hour label column.
    pub container_width_px: f64,
    pub px_per_minute: f64,
    /// Horizontal gap subtracted from each lane's width.
    pub gutter_px: f64,
}

impl LayoutParams {
    pub fn new(day_minutes: i32, container_width_px: f64, px_per_minute: f64, gutter_px: f64) -> Self {
        Self {
            day_minutes,
            container_width_px,
            px_per_minute,
            gutter_px,
        }
    }

    /// Full height of the timeline in pixels.
    pub fn timeline_height_px(&self) -> f64 {
        f64::from(self.day_minutes) * self.px_per_minute
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            day_minutes: 24 * 60,
            container_width_px: 320.0,
            px_per_minute: 1.8,
            gutter_px: 4.0,
        }
    }
}

/// Render-only knobs for the timeline view. None of these affect task
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineOptions {
    /// Current time in minutes from midnight; draws the "now" line and
    /// drives late/pending coloring when set.
    pub now_minutes: Option<i32>,
    /// Width of the hour label column left of the task area.
    pub label_column_px: f64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            now_minutes: None,
            label_column_px: 70.0,
        }
    }
}
