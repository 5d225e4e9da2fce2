pub mod lane;
pub mod layout;
pub mod params;
pub mod task;

pub use lane::LaneAssigned;
pub use layout::{LaidOut, TaskLayout};
pub use params::{LayoutParams, TimelineOptions};
pub use task::{Interval, Task, TaskId};
