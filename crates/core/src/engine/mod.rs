//! Lane allocation and pixel layout for the daily schedule.
//!
//! [`compute_task_layout_with_lanes`] is the entry point the rest of the
//! application uses; the two stages are exposed for callers that need the
//! lane annotation without geometry.

pub mod lanes;
pub mod layout;

pub use lanes::allocate_lanes;
pub use layout::{MIN_TASK_HEIGHT_PX, MIN_TASK_WIDTH_PX, compute_task_layout, task_geometry};

use crate::model::{Interval, LaidOut, LayoutParams};

/// Allocate lanes, then compute pixel geometry for every task.
pub fn compute_task_layout_with_lanes<T: Interval + Clone>(
    tasks: &[T],
    params: &LayoutParams,
) -> Vec<LaidOut<T>> {
    compute_task_layout(allocate_lanes(tasks), params)
}
