//! Lane allocation and timeline layout for the dayplan daily schedule.
//!
//! Tasks go in as minute-of-day intervals; each comes back with a lane, the
//! overlap cluster it belongs to, and the pixel box to draw it in.

pub mod engine;
pub mod loader;
pub mod model;
pub mod schedule;
pub mod svg;
pub mod views;

pub use engine::{allocate_lanes, compute_task_layout, compute_task_layout_with_lanes};
