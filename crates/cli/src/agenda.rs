use dayplan_core::model::{LaidOut, Task};
use dayplan_core::schedule::{TaskStatus, time_range_label};

/// Plain-text listing of laid-out tasks, one line per task, with a blank
/// line between overlap clusters.
pub fn render_agenda(tasks: &[LaidOut<Task>], now_minutes: Option<i32>) -> String {
    let mut out = String::new();
    let mut current_cluster = None;

    for laid_out in tasks {
        let assigned = &laid_out.assigned;
        let task = &assigned.task;

        if current_cluster.is_some_and(|c| c != assigned.cluster_id) {
            out.push('\n');
        }
        current_cluster = Some(assigned.cluster_id);

        let status = TaskStatus::at(task, now_minutes);
        let marker = match status {
            TaskStatus::Done => "x",
            TaskStatus::Late => "!",
            TaskStatus::Pending => " ",
        };

        out.push_str(&format!(
            "[{marker}] {}  lane {}/{}  {}\n",
            time_range_label(task.start, task.end),
            assigned.lane + 1,
            assigned.cluster_max_lanes,
            task.title,
        ));
    }

    out
}
