use dayplan_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::model::{LaidOut, LayoutParams, Task, TimelineOptions};
use crate::schedule::{TaskStatus, hour_marks, time_range_label};

const FONT_SIZE: f64 = 12.0;
const LABEL_PADDING: f64 = 6.0;
const AXIS_WIDTH: f64 = 2.0;
const NOW_LINE_WIDTH: f64 = 2.0;

/// Render laid-out tasks as a vertical day timeline.
///
/// X = hour label column followed by the task area, Y = minutes scaled by
/// `px_per_minute`. Task boxes use the geometry computed by the layout
/// engine as-is, shifted right by the label column.
pub fn render_timeline(
    tasks: &[LaidOut<Task>],
    params: &LayoutParams,
    options: &TimelineOptions,
) -> Vec<RenderCommand> {
    let height = params.timeline_height_px();
    if height <= 0.0 {
        return Vec::new();
    }

    let column = options.label_column_px;
    let width = column + params.container_width_px;
    let marks = hour_marks(params);
    let mut commands = Vec::with_capacity(marks.len() * 2 + tasks.len() * 2 + 8);

    commands.push(RenderCommand::BeginGroup {
        id: "timeline".to_string(),
        label: Some("Daily Schedule".to_string()),
    });

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, width, height),
        color: ThemeToken::TimelineBackground,
        border_color: Some(ThemeToken::Border),
        label: None,
        task_index: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, column, height),
        color: ThemeToken::HourColumnBackground,
        border_color: None,
        label: None,
        task_index: None,
    });

    for mark in &marks {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(column, mark.y_px),
            to: Point::new(width, mark.y_px),
            color: ThemeToken::GridLine,
            width: 1.0,
        });
        // Labels are centred on their line, except midnight which would be
        // cut off at the top.
        let baseline = (mark.y_px + FONT_SIZE / 2.0).max(FONT_SIZE);
        commands.push(RenderCommand::DrawText {
            position: Point::new(column - LABEL_PADDING, baseline),
            text: mark.label.clone(),
            color: ThemeToken::TextPrimary,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
        });
    }

    commands.push(RenderCommand::DrawLine {
        from: Point::new(column, 0.0),
        to: Point::new(column, height),
        color: ThemeToken::AxisLine,
        width: AXIS_WIDTH,
    });

    if let Some(now) = options.now_minutes {
        let y = f64::from(now) * params.px_per_minute;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(column, y),
            to: Point::new(width, y),
            color: ThemeToken::NowLine,
            width: NOW_LINE_WIDTH,
        });
    }

    commands.push(RenderCommand::SetClip {
        rect: Rect::new(column, 0.0, params.container_width_px, height),
    });

    for (index, laid_out) in tasks.iter().enumerate() {
        let task = laid_out.task();
        let status = TaskStatus::at(task, options.now_minutes);
        let (fill, border, text) = status_colors(status);
        let rect = laid_out.layout.rect().translate(column, 0.0);

        commands.push(RenderCommand::DrawRect {
            rect,
            color: fill,
            border_color: Some(border),
            label: Some(task.title.clone()),
            task_index: Some(index),
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(rect.x + LABEL_PADDING, rect.bottom() - LABEL_PADDING),
            text: time_range_label(task.start, task.end),
            color: text,
            font_size: FONT_SIZE - 2.0,
            align: TextAlign::Left,
        });
    }

    commands.push(RenderCommand::ClearClip);
    commands.push(RenderCommand::EndGroup);
    commands
}

fn status_colors(status: TaskStatus) -> (ThemeToken, ThemeToken, ThemeToken) {
    match status {
        TaskStatus::Done => (ThemeToken::TaskDone, ThemeToken::TaskBorder, ThemeToken::TextDone),
        TaskStatus::Late => (
            ThemeToken::TaskLate,
            ThemeToken::TaskLateBorder,
            ThemeToken::TextPrimary,
        ),
        TaskStatus::Pending => (
            ThemeToken::TaskPending,
            ThemeToken::TaskBorder,
            ThemeToken::TextPrimary,
        ),
    }
}
