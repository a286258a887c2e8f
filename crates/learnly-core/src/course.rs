//! Static course catalog.
//!
//! The catalog is embedded at build time and immutable for the process
//! lifetime. Looking up an unknown course name is a miss, not an error; the
//! caller treats a miss as a no-op.

/// Marker carried at the end of a topic the learner has already completed.
pub const COMPLETED_MARKER: char = '\u{2713}'; // ✓

/// A course's progress descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseDescriptor {
    /// Identifier used by selection triggers.
    pub name: &'static str,
    /// Headline shown above the progress bar.
    pub title: &'static str,
    /// Fill ratio of the progress bar, 0..=100.
    pub percent: u8,
    /// Ordered topic list; completed entries carry [`COMPLETED_MARKER`].
    pub topics: &'static [&'static str],
}

impl CourseDescriptor {
    /// Whether a topic line carries the completed marker.
    pub fn is_completed(topic: &str) -> bool {
        topic.trim_end().ends_with(COMPLETED_MARKER)
    }
}

/// Every course offered on the landing screen.
pub const COURSE_CATALOG: &[CourseDescriptor] = &[
    CourseDescriptor {
        name: "HTML Fundamentals",
        title: "Finish HTML Fundamentals Module",
        percent: 40,
        topics: &[
            "Introduction to HTML \u{2713}",
            "Document structure \u{2713}",
            "Links & Images",
            "Forms & Tables",
        ],
    },
    CourseDescriptor {
        name: "CSS Styling Mastery",
        title: "Build CSS Layouts Module",
        percent: 70,
        topics: &[
            "Selectors & Colors \u{2713}",
            "Flexbox basics \u{2713}",
            "Responsive Grid Layouts",
            "Animations & Transitions",
        ],
    },
    CourseDescriptor {
        name: "JavaScript Essentials",
        title: "JavaScript Essentials Module",
        percent: 90,
        topics: &[
            "Variables & Data Types \u{2713}",
            "Functions & Events \u{2713}",
            "DOM Manipulation \u{2713}",
            "Mini Project: Counter App",
        ],
    },
];

/// Look up a course by name.
pub fn find_course(name: &str) -> Option<&'static CourseDescriptor> {
    COURSE_CATALOG.iter().find(|course| course.name == name)
}
