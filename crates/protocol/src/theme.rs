use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Task boxes
    TaskPending,
    TaskLate,
    TaskDone,
    TaskBorder,
    TaskLateBorder,

    // Timeline chrome
    TimelineBackground,
    HourColumnBackground,
    GridLine,
    AxisLine,
    NowLine,

    TextPrimary,
    TextDone,

    Background,
    Border,
}
