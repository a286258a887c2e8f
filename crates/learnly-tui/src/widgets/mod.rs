//! Widget components for the landing screen

mod courses;
mod header;
mod progress;
mod stats;
mod status_bar;

pub use courses::{course_regions, CourseList};
pub use header::{logo_region, Header, LOGO_TEXT};
pub use progress::ProgressPanel;
pub use stats::StatsRow;
pub use status_bar::StatusBar;
