use crate::model::{Interval, LaidOut, LaneAssigned, LayoutParams, TaskLayout};

/// Shortest box drawn for a task, however brief, so it stays clickable.
pub const MIN_TASK_HEIGHT_PX: f64 = 44.0;
/// Narrowest box drawn for a task. Crowded clusters may overlap visually
/// once this floor applies.
pub const MIN_TASK_WIDTH_PX: f64 = 60.0;

/// Attach pixel geometry to lane-assigned tasks, preserving their order.
pub fn compute_task_layout<T: Interval>(
    tasks: Vec<LaneAssigned<T>>,
    params: &LayoutParams,
) -> Vec<LaidOut<T>> {
    tasks
        .into_iter()
        .map(|assigned| LaidOut {
            layout: task_geometry(&assigned, params),
            assigned,
        })
        .collect()
}

/// Geometry of a single task. Depends only on the task's own interval, lane
/// and cluster width.
///
/// `day_minutes` is not used to clamp: tasks outside the day are positioned
/// arithmetically, off the top or bottom of the timeline.
pub fn task_geometry<T: Interval>(task: &LaneAssigned<T>, params: &LayoutParams) -> TaskLayout {
    let start = f64::from(task.start());
    let end = f64::from(task.end());

    let top_px = start * params.px_per_minute;
    let height_px = ((end - start) * params.px_per_minute).max(MIN_TASK_HEIGHT_PX);

    // The allocator never produces 0; a hand-built annotation might.
    let lanes = f64::from(task.cluster_max_lanes.max(1));
    let lane_width_px = params.container_width_px / lanes;
    let left_px = f64::from(task.lane) * lane_width_px;
    let width_px = (lane_width_px - params.gutter_px).max(MIN_TASK_WIDTH_PX);

    TaskLayout {
        top_px,
        height_px,
        left_px,
        width_px,
    }
}
