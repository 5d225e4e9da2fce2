use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::clock::parse_clock;
use crate::model::{Task, TaskId};

pub const MIN_TITLE_CHARS: usize = 2;
pub const MAX_TITLE_CHARS: usize = 100;
pub const MIN_DURATION_MINUTES: i32 = 5;
pub const MAX_DURATION_MINUTES: i32 = 8 * 60;

/// A single invalid field in a [`TaskDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Task title is required")]
    TitleRequired,
    #[error("Task title must be at least 2 characters")]
    TitleTooShort,
    #[error("Task title cannot exceed 100 characters")]
    TitleTooLong,
    #[error("Start time is required")]
    StartTimeRequired,
    #[error("Start time `{0}` is not a valid HH:MM time")]
    StartTimeInvalid(String),
    #[error("Duration must be at least 5 minutes")]
    DurationTooShort,
    #[error("Duration cannot exceed 8 hours (480 minutes)")]
    DurationTooLong,
}

/// Every problem found in a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task: {}", join_messages(.0))]
pub struct DraftErrors(pub Vec<DraftError>);

fn join_messages(errors: &[DraftError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Unvalidated input from the "add activity" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDraft {
    pub title: String,
    /// Wall-clock start, `HH:MM`.
    pub start_time: String,
    /// Length in minutes.
    pub duration: i32,
}

impl TaskDraft {
    /// Validate every field and build the task. The title is trimmed and
    /// the task starts out not done.
    pub fn into_task(self, id: impl Into<TaskId>) -> Result<Task, DraftErrors> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        let title_chars = title.chars().count();
        if title_chars == 0 {
            errors.push(DraftError::TitleRequired);
        } else if title_chars < MIN_TITLE_CHARS {
            errors.push(DraftError::TitleTooShort);
        } else if title_chars > MAX_TITLE_CHARS {
            errors.push(DraftError::TitleTooLong);
        }

        let start = if self.start_time.trim().is_empty() {
            errors.push(DraftError::StartTimeRequired);
            None
        } else {
            match parse_clock(&self.start_time) {
                Ok(minutes) => Some(minutes),
                Err(_) => {
                    errors.push(DraftError::StartTimeInvalid(self.start_time.clone()));
                    None
                }
            }
        };

        if self.duration < MIN_DURATION_MINUTES {
            errors.push(DraftError::DurationTooShort);
        } else if self.duration > MAX_DURATION_MINUTES {
            errors.push(DraftError::DurationTooLong);
        }

        match start {
            Some(start) if errors.is_empty() => {
                Ok(Task::new(id, title, start, start + self.duration))
            }
            _ => Err(DraftErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, start_time: &str, duration: i32) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            start_time: start_time.to_string(),
            duration,
        }
    }

    #[test]
    fn valid_draft_becomes_task() {
        let task = draft("  Gym  ", "07:30", 60).into_task(3);
        assert_eq!(task, Ok(Task::new(3, "Gym", 450, 510)));
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        assert!(draft("Nap", "13:00", 5).into_task(1).is_ok());
        assert!(draft("Study", "09:00", 480).into_task(1).is_ok());
    }

    #[test]
    fn task_may_run_past_midnight() {
        let task = draft("Night shift", "22:00", 240).into_task(1);
        assert_eq!(task.map(|t| t.end), Ok(1560));
    }

    #[test]
    fn reports_every_invalid_field() {
        let err = draft(" ", "", 2).into_task(1);
        assert_eq!(
            err,
            Err(DraftErrors(vec![
                DraftError::TitleRequired,
                DraftError::StartTimeRequired,
                DraftError::DurationTooShort,
            ]))
        );
    }

    #[test]
    fn title_length_limits() {
        let short = draft("a", "10:00", 30).into_task(1);
        assert_eq!(short, Err(DraftErrors(vec![DraftError::TitleTooShort])));

        let long = draft(&"x".repeat(101), "10:00", 30).into_task(1);
        assert_eq!(long, Err(DraftErrors(vec![DraftError::TitleTooLong])));
    }

    #[test]
    fn bad_start_time_and_long_duration() {
        let err = draft("Read", "25:00", 481).into_task(1);
        assert_eq!(
            err,
            Err(DraftErrors(vec![
                DraftError::StartTimeInvalid("25:00".into()),
                DraftError::DurationTooLong,
            ]))
        );
    }

    #[test]
    fn messages_match_the_form() {
        let err = DraftErrors(vec![DraftError::TitleRequired, DraftError::DurationTooLong]);
        assert_eq!(
            err.to_string(),
            "invalid task: Task title is required; Duration cannot exceed 8 hours (480 minutes)"
        );
        assert_eq!(
            DraftError::DurationTooShort.to_string(),
            "Duration must be at least 5 minutes"
        );
    }

    #[test]
    fn draft_from_form_json() {
        let draft: TaskDraft =
            serde_json::from_str(r#"{"title":"Cook","startTime":"09:00","duration":30}"#)
                .unwrap();
        assert_eq!(draft.into_task("new").map(|t| (t.start, t.end)), Ok((540, 570)));
    }
}
