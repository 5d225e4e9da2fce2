use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Anything with a start and end expressed in minutes from midnight.
///
/// The lane allocator and layout computer only ever read these two values,
/// so callers can run the engine over their own task types.
pub trait Interval {
    fn start(&self) -> i32;
    fn end(&self) -> i32;

    /// Strict overlap: intervals that only touch at an endpoint do not overlap.
    fn overlaps<I: Interval + ?Sized>(&self, other: &I) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }

    /// Length in minutes. Negative for inverted intervals.
    fn duration(&self) -> i64 {
        i64::from(self.end()) - i64::from(self.start())
    }
}

impl Interval for Range<i32> {
    fn start(&self) -> i32 {
        self.start
    }

    fn end(&self) -> i32 {
        self.end
    }
}

/// Caller-supplied task identifier. The widget uses both numeric and string
/// ids, so either is accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(Number),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => n.fmt(f),
            TaskId::Text(s) => s.fmt(f),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Number(id.into())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId::Text(id)
    }
}

/// One entry of the daily schedule.
///
/// Fields the schedule does not know about are kept in `extra` and written
/// back out beside the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    /// Minutes from midnight.
    pub start: i32,
    /// Minutes from midnight, exclusive.
    pub end: i32,
    #[serde(default)]
    pub done: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            done: false,
            extra: Map::new(),
        }
    }
}

impl Interval for Task {
    fn start(&self) -> i32 {
        self.start
    }

    fn end(&self) -> i32 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!(60..120).overlaps(&(120..180)));
        assert!((60..121).overlaps(&(120..180)));
        assert!((120..180).overlaps(&(60..121)));
    }

    #[test]
    fn inverted_interval_only_overlaps_intervals_covering_it() {
        assert!((120..60).overlaps(&(0..1440)));
        assert!(!(120..60).overlaps(&(70..100)));
        assert_eq!((120..60).duration(), -60);
    }

    #[test]
    fn unknown_fields_pass_through() {
        let json = r##"{"id":7,"title":"Gym","start":450,"end":510,"description":"legs","color":"#fbbf24"}"##;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId::from(7));
        assert!(!task.done);
        assert_eq!(task.extra["description"], "legs");

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["color"], "#fbbf24");
        assert_eq!(back["start"], 450);
    }

    #[test]
    fn string_and_float_ids() {
        let a: TaskId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(a, TaskId::from("abc"));
        let b: TaskId = serde_json::from_str("0.4187").unwrap();
        assert_eq!(b.to_string(), "0.4187");
    }
}
