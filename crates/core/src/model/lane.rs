use serde::{Deserialize, Serialize};

use super::task::Interval;

/// A task annotated with its lane and the overlap cluster it belongs to.
///
/// Serializes flat: the task's own fields sit beside `lane`, `clusterId` and
/// `clusterMaxLanes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneAssigned<T> {
    #[serde(flatten)]
    pub task: T,
    /// Horizontal slot within the cluster, starting at 0.
    pub lane: u32,
    /// Index of the overlap cluster, in discovery order.
    pub cluster_id: usize,
    /// Lanes in use by the cluster (highest lane + 1).
    pub cluster_max_lanes: u32,
}

impl<T: Interval> Interval for LaneAssigned<T> {
    fn start(&self) -> i32 {
        self.task.start()
    }

    fn end(&self) -> i32 {
        self.task.end()
    }
}
