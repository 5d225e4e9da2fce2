use serde::{Deserialize, Serialize};

use super::clock::format_clock;
use crate::model::Task;

/// Minutes after its start before an unfinished task counts as late.
pub const LATE_GRACE_MINUTES: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Late,
    Done,
}

impl TaskStatus {
    pub fn of(task: &Task, now_minutes: i32) -> Self {
        if task.done {
            TaskStatus::Done
        } else if now_minutes > task.start.saturating_add(LATE_GRACE_MINUTES) {
            TaskStatus::Late
        } else {
            TaskStatus::Pending
        }
    }

    /// Like [`TaskStatus::of`], but without a clock nothing is late.
    pub fn at(task: &Task, now_minutes: Option<i32>) -> Self {
        match now_minutes {
            Some(now) => Self::of(task, now),
            None if task.done => TaskStatus::Done,
            None => TaskStatus::Pending,
        }
    }
}

/// Screen-reader label, e.g. `Gym, 07:30 - 08:30, late`.
pub fn accessible_label(task: &Task, now_minutes: i32) -> String {
    let suffix = match TaskStatus::of(task, now_minutes) {
        TaskStatus::Done => ", completed",
        TaskStatus::Late => ", late",
        TaskStatus::Pending => "",
    };
    format!(
        "{}, {}{suffix}",
        task.title,
        time_range_label(task.start, task.end)
    )
}

pub fn time_range_label(start: i32, end: i32) -> String {
    format!("{} - {}", format_clock(start), format_clock(end))
}
