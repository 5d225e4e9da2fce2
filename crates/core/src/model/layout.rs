use dayplan_protocol::Rect;
use serde::{Deserialize, Serialize};

use super::lane::LaneAssigned;
use super::task::Interval;

/// Absolute position of a task box inside the schedule container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLayout {
    pub top_px: f64,
    pub height_px: f64,
    pub left_px: f64,
    pub width_px: f64,
}

impl TaskLayout {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left_px, self.top_px, self.width_px, self.height_px)
    }
}

/// A lane-assigned task with its pixel geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOut<T> {
    #[serde(flatten)]
    pub assigned: LaneAssigned<T>,
    pub layout: TaskLayout,
}

impl<T> LaidOut<T> {
    pub fn task(&self) -> &T {
        &self.assigned.task
    }
}

impl<T: Interval> Interval for LaidOut<T> {
    fn start(&self) -> i32 {
        self.assigned.start()
    }

    fn end(&self) -> i32 {
        self.assigned.end()
    }
}
