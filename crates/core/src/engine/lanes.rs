use std::collections::VecDeque;

use log::{debug, trace};

use crate::model::{Interval, LaneAssigned};

/// A task still running at the current sweep position.
struct Active {
    lane: u32,
    end: i32,
}

const UNVISITED: usize = usize::MAX;

/// Assign every task a lane so that overlapping tasks never share one, and
/// group tasks into overlap clusters.
///
/// Tasks are returned sorted by start time, ties broken by end time (shorter
/// first). Identical intervals keep their input order. The input is never
/// modified; each output entry owns a clone of its task.
///
/// Inverted or empty intervals (`end <= start`) are not rejected. They take
/// part in the sweep and the overlap test arithmetically.
///
/// Lanes within a cluster are dense (`0..cluster_max_lanes`) only when every
/// interval has `end > start`. An inverted interval is placed by the sweep
/// against tasks it does not overlap, so it can land in a lane of its own
/// cluster above any other in use.
pub fn allocate_lanes<T: Interval + Clone>(tasks: &[T]) -> Vec<LaneAssigned<T>> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&T> = tasks.iter().collect();
    sorted.sort_by(|a, b| a.start().cmp(&b.start()).then(a.end().cmp(&b.end())));

    for task in sorted.iter().filter(|t| t.end() <= t.start()) {
        trace!(
            "degenerate interval {}..{} kept as-is",
            task.start(),
            task.end()
        );
    }

    let lanes = sweep_lanes(&sorted);
    let (cluster_ids, cluster_count) = find_clusters(&sorted);

    let mut cluster_max_lanes = vec![0u32; cluster_count];
    for (&cluster, &lane) in cluster_ids.iter().zip(&lanes) {
        cluster_max_lanes[cluster] = cluster_max_lanes[cluster].max(lane + 1);
    }

    debug!(
        "allocated {} tasks into {} clusters (widest: {} lanes)",
        sorted.len(),
        cluster_count,
        cluster_max_lanes.iter().copied().max().unwrap_or(0)
    );

    sorted
        .into_iter()
        .zip(lanes)
        .zip(cluster_ids)
        .map(|((task, lane), cluster_id)| LaneAssigned {
            task: task.clone(),
            lane,
            cluster_id,
            cluster_max_lanes: cluster_max_lanes[cluster_id],
        })
        .collect()
}

/// First-fit lane sweep over tasks already sorted by (start, end).
fn sweep_lanes<T: Interval>(sorted: &[&T]) -> Vec<u32> {
    let mut active: Vec<Active> = Vec::new();
    let mut lanes = Vec::with_capacity(sorted.len());

    for task in sorted {
        let start = task.start();
        // A task ending exactly at `start` has freed its lane.
        active.retain(|a| a.end > start);

        let lane = lowest_free_lane(&active);
        active.push(Active {
            lane,
            end: task.end(),
        });
        lanes.push(lane);
    }

    lanes
}

fn lowest_free_lane(active: &[Active]) -> u32 {
    let mut lane = 0;
    while active.iter().any(|a| a.lane == lane) {
        lane += 1;
    }
    lane
}

/// Connected components of the overlap graph, by breadth-first search.
///
/// Returns the cluster index of every task (numbered in discovery order,
/// walking `tasks` front to back) and the number of clusters. Pairwise, so
/// quadratic in the number of tasks.
fn find_clusters<T: Interval>(tasks: &[&T]) -> (Vec<usize>, usize) {
    let mut cluster_of = vec![UNVISITED; tasks.len()];
    let mut count = 0;
    let mut queue = VecDeque::new();

    for root in 0..tasks.len() {
        if cluster_of[root] != UNVISITED {
            continue;
        }

        cluster_of[root] = count;
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            for other in 0..tasks.len() {
                if cluster_of[other] == UNVISITED && tasks[current].overlaps(tasks[other]) {
                    cluster_of[other] = count;
                    queue.push_back(other);
                }
            }
        }

        count += 1;
    }

    (cluster_of, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn tasks(intervals: &[(i32, i32)]) -> Vec<Task> {
        intervals
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| {
                Task::new((i + 1).to_string(), format!("Task {}", i + 1), start, end)
            })
            .collect()
    }

    fn lanes(result: &[LaneAssigned<Task>]) -> Vec<u32> {
        result.iter().map(|t| t.lane).collect()
    }

    fn ids(result: &[LaneAssigned<Task>]) -> Vec<String> {
        result.iter().map(|t| t.task.id.to_string()).collect()
    }

    #[test]
    fn empty_input() {
        let result = allocate_lanes::<Task>(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn single_task() {
        let result = allocate_lanes(&tasks(&[(60, 120)]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].lane, 0);
        assert_eq!(result[0].cluster_max_lanes, 1);
    }

    #[test]
    fn two_overlapping_tasks_sit_side_by_side() {
        let result = allocate_lanes(&tasks(&[(60, 120), (90, 150)]));
        assert_eq!(lanes(&result), [0, 1]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 2));
        assert_eq!(result[0].cluster_id, result[1].cluster_id);
    }

    #[test]
    fn back_to_back_tasks_share_a_lane() {
        let result = allocate_lanes(&tasks(&[(60, 120), (120, 180), (180, 240)]));
        assert_eq!(lanes(&result), [0, 0, 0]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 1));
        // Touching intervals are separate clusters.
        assert_eq!(
            result.iter().map(|t| t.cluster_id).collect::<Vec<_>>(),
            [0, 1, 2]
        );
    }

    #[test]
    fn triple_overlap() {
        let result = allocate_lanes(&tasks(&[(60, 180), (90, 150), (120, 210)]));
        assert_eq!(lanes(&result), [0, 1, 2]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 3));
    }

    #[test]
    fn freed_lane_is_reused() {
        let result = allocate_lanes(&tasks(&[(60, 120), (90, 150), (130, 190)]));
        assert_eq!(lanes(&result), [0, 1, 0]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 2));
    }

    #[test]
    fn lowest_lane_is_preferred_over_round_robin() {
        // Lane 0 frees up at 100, lane 1 stays busy until 300.
        let result = allocate_lanes(&tasks(&[(0, 100), (50, 300), (100, 200), (150, 250)]));
        assert_eq!(lanes(&result), [0, 1, 0, 2]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 3));
    }

    #[test]
    fn bridged_chain_is_one_cluster() {
        let result = allocate_lanes(&tasks(&[(0, 120), (60, 180), (150, 240)]));
        let a = &result[0];
        let b = &result[1];
        let c = &result[2];
        assert_eq!(a.cluster_id, b.cluster_id);
        assert_eq!(b.cluster_id, c.cluster_id);
        assert_ne!(a.lane, b.lane);
        assert_ne!(b.lane, c.lane);
        // A and C never meet, so C may reuse A's lane.
        assert_eq!(a.lane, c.lane);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 2));
    }

    #[test]
    fn six_way_clique() {
        let result = allocate_lanes(&tasks(&[
            (60, 180),
            (70, 190),
            (80, 200),
            (90, 210),
            (100, 220),
            (110, 230),
        ]));
        assert_eq!(lanes(&result), [0, 1, 2, 3, 4, 5]);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 6));
        assert!(result.iter().all(|t| t.cluster_id == 0));
    }

    #[test]
    fn separate_clusters_are_sized_independently() {
        let result = allocate_lanes(&tasks(&[(60, 120), (90, 150), (200, 260), (230, 290)]));
        assert!(result.iter().all(|t| t.cluster_max_lanes == 2));
        assert_eq!(result[0].cluster_id, result[1].cluster_id);
        assert_eq!(result[2].cluster_id, result[3].cluster_id);
        assert_ne!(result[0].cluster_id, result[2].cluster_id);
        assert_eq!(lanes(&result), [0, 1, 0, 1]);
    }

    #[test]
    fn narrow_cluster_is_not_widened_by_a_wide_neighbour() {
        let result = allocate_lanes(&tasks(&[(0, 60), (10, 60), (20, 60), (600, 660)]));
        assert_eq!(result[3].lane, 0);
        assert_eq!(result[3].cluster_max_lanes, 1);
        assert_eq!(result[0].cluster_max_lanes, 3);
    }

    #[test]
    fn output_is_sorted_by_start() {
        let result = allocate_lanes(&tasks(&[(180, 240), (60, 120), (120, 180)]));
        assert_eq!(ids(&result), ["2", "3", "1"]);
    }

    #[test]
    fn equal_starts_put_shorter_task_first() {
        let result = allocate_lanes(&tasks(&[(60, 180), (60, 120)]));
        assert_eq!(ids(&result), ["2", "1"]);
        assert_eq!(lanes(&result), [0, 1]);
    }

    #[test]
    fn identical_intervals_keep_input_order() {
        let result = allocate_lanes(&tasks(&[(60, 120), (60, 120), (60, 120)]));
        assert_eq!(ids(&result), ["1", "2", "3"]);
        assert_eq!(lanes(&result), [0, 1, 2]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = tasks(&[(90, 150), (60, 120)]);
        let before = input.clone();
        let _ = allocate_lanes(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn duplicate_ids_do_not_merge_clusters() {
        let mut input = tasks(&[(0, 30), (600, 630)]);
        input[1].id = input[0].id.clone();
        let result = allocate_lanes(&input);
        assert_ne!(result[0].cluster_id, result[1].cluster_id);
    }

    #[test]
    fn inverted_interval_is_processed_without_error() {
        // 100..50 still satisfies the overlap test against 0..120, which
        // covers it, and it enters the sweep while 0..120 is active.
        let result = allocate_lanes(&tasks(&[(0, 120), (100, 50)]));
        assert_eq!(lanes(&result), [0, 1]);
        assert_eq!(result[0].cluster_id, result[1].cluster_id);
        assert!(result.iter().all(|t| t.cluster_max_lanes == 2));

        let result = allocate_lanes(&tasks(&[(0, 60), (100, 50)]));
        assert_eq!(lanes(&result), [0, 0]);
        assert_ne!(result[0].cluster_id, result[1].cluster_id);
    }

    #[test]
    fn inverted_interval_can_leave_a_lane_gap() {
        let result = allocate_lanes(&tasks(&[(90, 200), (95, 200), (100, 50)]));
        assert_eq!(lanes(&result), [0, 1, 2]);
        assert_eq!(result[2].cluster_id, 1);
        assert_eq!(result[2].cluster_max_lanes, 3);
        assert_eq!(result[0].cluster_max_lanes, 2);
    }

    #[test]
    fn works_on_plain_ranges() {
        let result = allocate_lanes(&[0..10, 5..15]);
        assert_eq!(result[1].task, 5..15);
        assert_eq!(result[1].lane, 1);
    }
}
