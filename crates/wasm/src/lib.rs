//! JSON-in / JSON-out bindings for the browser schedule widget.
//!
//! Every export is stateless: the widget passes its current task list on
//! each call and gets fresh results back.

use dayplan_core::loader::{LoadError, parse_params};
use dayplan_core::model::{LayoutParams, Task, TaskId, TimelineOptions};
use dayplan_core::schedule::{self, DraftErrors, TaskDraft};
use dayplan_core::svg::render_svg;
use dayplan_core::{allocate_lanes, compute_task_layout_with_lanes, views};
use dayplan_protocol::RenderCommand;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
enum BridgeError {
    #[error("invalid tasks: {0}")]
    Tasks(#[source] serde_json::Error),
    #[error("invalid layout params: {0}")]
    Params(#[from] LoadError),
    #[error("invalid task draft: {0}")]
    DraftJson(#[source] serde_json::Error),
    #[error(transparent)]
    Draft(#[from] DraftErrors),
    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),
}

fn to_js(err: BridgeError) -> JsError {
    JsError::new(&err.to_string())
}

fn tasks_from_json(tasks_json: &str) -> Result<Vec<Task>, BridgeError> {
    serde_json::from_str(tasks_json).map_err(BridgeError::Tasks)
}

/// Empty or whitespace-only input means "use the widget defaults".
fn params_from_json(params_json: &str) -> Result<LayoutParams, BridgeError> {
    if params_json.trim().is_empty() {
        return Ok(LayoutParams::default());
    }
    Ok(parse_params(params_json.as_bytes())?)
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, BridgeError> {
    serde_json::to_string(value).map_err(BridgeError::Encode)
}

fn lanes_json(tasks_json: &str) -> Result<String, BridgeError> {
    let tasks = tasks_from_json(tasks_json)?;
    encode(&allocate_lanes(&tasks))
}

fn layout_json(tasks_json: &str, params_json: &str) -> Result<String, BridgeError> {
    let tasks = tasks_from_json(tasks_json)?;
    let params = params_from_json(params_json)?;
    encode(&compute_task_layout_with_lanes(&tasks, &params))
}

type Timeline = (Vec<RenderCommand>, LayoutParams, TimelineOptions);

fn timeline_commands(
    tasks_json: &str,
    params_json: &str,
    now_minutes: Option<i32>,
) -> Result<Timeline, BridgeError> {
    let tasks = tasks_from_json(tasks_json)?;
    let params = params_from_json(params_json)?;
    let options = TimelineOptions {
        now_minutes,
        ..TimelineOptions::default()
    };
    let laid_out = compute_task_layout_with_lanes(&tasks, &params);
    let commands = views::render_timeline(&laid_out, &params, &options);
    Ok((commands, params, options))
}

fn draft_json(draft_json: &str, id_json: &str) -> Result<String, BridgeError> {
    let draft: TaskDraft = serde_json::from_str(draft_json).map_err(BridgeError::DraftJson)?;
    let id: TaskId = serde_json::from_str(id_json).map_err(BridgeError::DraftJson)?;
    let task = draft.into_task(id)?;
    encode(&task)
}

/// Assign lanes and clusters. Input is a JSON task array; output is the
/// same tasks, sorted, with `lane`, `clusterId` and `clusterMaxLanes`.
#[wasm_bindgen(js_name = allocateLanes)]
pub fn allocate_lanes_js(tasks_json: &str) -> Result<String, JsError> {
    lanes_json(tasks_json).map_err(to_js)
}

/// Lanes plus pixel geometry for every task. `params_json` may be empty.
#[wasm_bindgen(js_name = computeTaskLayoutWithLanes)]
pub fn compute_task_layout_with_lanes_js(
    tasks_json: &str,
    params_json: &str,
) -> Result<String, JsError> {
    layout_json(tasks_json, params_json).map_err(to_js)
}

/// Render commands for the whole timeline, as JSON.
#[wasm_bindgen(js_name = renderTimeline)]
pub fn render_timeline_js(
    tasks_json: &str,
    params_json: &str,
    now_minutes: Option<i32>,
) -> Result<String, JsError> {
    timeline_commands(tasks_json, params_json, now_minutes)
        .and_then(|(commands, _, _)| encode(&commands))
        .map_err(to_js)
}

/// The timeline as a standalone SVG document.
#[wasm_bindgen(js_name = renderTimelineSvg)]
pub fn render_timeline_svg_js(
    tasks_json: &str,
    params_json: &str,
    now_minutes: Option<i32>,
    dark: bool,
) -> Result<String, JsError> {
    let (commands, params, options) =
        timeline_commands(tasks_json, params_json, now_minutes).map_err(to_js)?;
    let width = options.label_column_px + params.container_width_px;
    Ok(render_svg(&commands, width, params.timeline_height_px(), dark))
}

/// Validate the "add activity" form and return the new task as JSON.
/// `id_json` is the JSON id the widget assigned (number or string).
#[wasm_bindgen(js_name = validateDraft)]
pub fn validate_draft_js(draft: &str, id_json: &str) -> Result<String, JsError> {
    draft_json(draft, id_json).map_err(to_js)
}

/// Pixel offset the timeline should scroll to when it opens.
#[wasm_bindgen(js_name = initialScrollOffset)]
pub fn initial_scroll_offset_js(
    tasks_json: &str,
    params_json: &str,
    now_minutes: i32,
) -> Result<f64, JsError> {
    let tasks = tasks_from_json(tasks_json).map_err(to_js)?;
    let params = params_from_json(params_json).map_err(to_js)?;
    Ok(schedule::scroll_offset_px(&tasks, now_minutes, &params))
}
