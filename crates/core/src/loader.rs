//! Decoding schedule files: either a bare JSON array of tasks, or an object
//! carrying `tasks` plus optional `params` and `options`.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::{LayoutParams, Task, TimelineOptions};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a task array or an object with `tasks`, found {0}")]
    UnexpectedShape(&'static str),
}

/// A decoded schedule file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub params: LayoutParams,
    #[serde(default)]
    pub options: TimelineOptions,
    pub tasks: Vec<Task>,
}

pub fn parse_schedule(data: &[u8]) -> Result<Schedule, LoadError> {
    let value: Value = serde_json::from_slice(data)?;
    let schedule = if value.is_array() {
        Schedule {
            tasks: serde_json::from_value(value)?,
            ..Schedule::default()
        }
    } else if value.is_object() {
        serde_json::from_value(value)?
    } else {
        return Err(LoadError::UnexpectedShape(json_kind(&value)));
    };
    log::debug!("loaded schedule with {} tasks", schedule.tasks.len());
    Ok(schedule)
}

pub fn parse_params(data: &[u8]) -> Result<LayoutParams, LoadError> {
    Ok(serde_json::from_slice(data)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
