//! Helpers the schedule widget runs around the layout engine: form
//! validation, clock formatting, lateness, and where to scroll on open.
//!
//! Input validation lives here, never in [`crate::engine`].

pub mod clock;
pub mod draft;
pub mod status;

pub use clock::{ClockError, format_clock, parse_clock};
pub use draft::{DraftError, DraftErrors, TaskDraft};
pub use status::{LATE_GRACE_MINUTES, TaskStatus, accessible_label, time_range_label};

use serde::{Deserialize, Serialize};

use crate::model::{LayoutParams, Task, TaskId};

/// Gap left above the scroll target so it is not flush with the top edge.
pub const SCROLL_MARGIN_PX: f64 = 30.0;
pub const HOUR_STEP_MINUTES: i32 = 60;

/// Flip `done` on every task with `id`. Returns `false` when no task matched.
pub fn toggle_done(tasks: &mut [Task], id: &TaskId) -> bool {
    let mut matched = false;
    for task in tasks.iter_mut().filter(|t| t.id == *id) {
        task.done = !task.done;
        matched = true;
    }
    matched
}

/// The task the timeline should open on: the first unfinished task still
/// ahead of `now_minutes`, else the first unfinished task at all.
///
/// Uses list order, not start order, matching how tasks were entered.
pub fn scroll_target(tasks: &[Task], now_minutes: i32) -> Option<&Task> {
    let mut pending = tasks.iter().filter(|t| !t.done).peekable();
    let first = pending.peek().copied();
    pending.find(|t| t.start > now_minutes).or(first)
}

/// Initial scroll offset of the timeline, in pixels. 0 when every task is
/// done.
pub fn scroll_offset_px(tasks: &[Task], now_minutes: i32, params: &LayoutParams) -> f64 {
    scroll_target(tasks, now_minutes).map_or(0.0, |task| {
        (f64::from(task.start) * params.px_per_minute - SCROLL_MARGIN_PX).max(0.0)
    })
}

/// An hour line on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourMark {
    pub minutes: i32,
    /// `HH:00`, hour modulo 24.
    pub label: String,
    pub y_px: f64,
}

/// One mark per hour from midnight through `day_minutes`, inclusive.
pub fn hour_marks(params: &LayoutParams) -> Vec<HourMark> {
    (0..=params.day_minutes.max(0))
        .step_by(HOUR_STEP_MINUTES as usize)
        .map(|minutes| HourMark {
            minutes,
            label: format!("{:02}:00", (minutes / 60) % 24),
            y_px: f64::from(minutes) * params.px_per_minute,
        })
        .collect()
}
