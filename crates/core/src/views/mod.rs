pub mod timeline;

pub use timeline::render_timeline;
