//! Animated stat counters.
//!
//! Each hero stat counts up from zero to its declared target over a fixed
//! duration. The animation is a per-frame state machine driven by the event
//! loop's tick messages: `Pending` until the first observed frame, then
//! `Running` keyed by that frame's timestamp, then `Done` once the clamped
//! progress reaches 1. Runs are independent of each other and cannot be
//! cancelled; a fresh process start is the only reset path.

/// Shared count-up duration for every stat counter, in milliseconds.
pub const COUNT_UP_DURATION_MS: u64 = 1_200;

/// One hero stat as declared by the static markup table.
#[derive(Debug, Clone, Copy)]
pub struct StatDecl {
    pub label: &'static str,
    /// Raw target attribute. A value that does not parse as a finite number
    /// skips the stat entirely.
    pub raw_target: &'static str,
    /// Initial rendered text. A trailing `+` marks the suffix.
    pub initial_text: &'static str,
}

/// Hero stats shown on the landing screen.
pub const HERO_STATS: &[StatDecl] = &[
    StatDecl {
        label: "Active learners",
        raw_target: "15000",
        initial_text: "0+",
    },
    StatDecl {
        label: "Video lessons",
        raw_target: "320",
        initial_text: "0+",
    },
    StatDecl {
        label: "Average rating",
        raw_target: "4.9",
        initial_text: "0",
    },
];

/// Parsed counter parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    /// Value the counter settles on.
    pub target: f64,
    /// Rendered text ends with a literal `+`.
    pub has_suffix: bool,
    /// Intermediate frames render with one decimal digit instead of flooring
    /// to an integer.
    pub fractional: bool,
}

impl CounterSpec {
    /// Parse a stat declaration.
    ///
    /// Returns `None` when the raw target is not a finite non-negative
    /// number; the caller skips that stat and the rest of the UI is
    /// unaffected. The suffix is derived once, here, from the declared
    /// initial text.
    pub fn parse(raw_target: &str, initial_text: &str) -> Option<Self> {
        let target: f64 = raw_target.trim().parse().ok()?;
        if !target.is_finite() || target < 0.0 {
            return None;
        }
        Some(Self {
            target,
            has_suffix: initial_text.trim().ends_with('+'),
            // A declared "4.0" has no fractional part and takes the
            // integer/floor path.
            fractional: target.fract() != 0.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Running { start_ms: u64 },
    Done,
}

/// Whether a counter wants more frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running,
    Done,
}

/// A single counter's animation run.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    phase: Phase,
    rendered: String,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            rendered: render_text(&spec, 0.0),
            spec,
            phase: Phase::Pending,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Currently rendered text, including the `+` suffix when declared.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance one frame.
    ///
    /// `now_ms` comes from the tick scheduler and is non-decreasing for a
    /// given counter. The first frame captures the run's start timestamp;
    /// the frame where progress reaches 1 renders the target exactly and
    /// settles the run.
    pub fn frame(&mut self, now_ms: u64) -> CounterFrame {
        let start_ms = match self.phase {
            Phase::Done => return CounterFrame::Done,
            Phase::Pending => {
                self.phase = Phase::Running { start_ms: now_ms };
                now_ms
            }
            Phase::Running { start_ms } => start_ms,
        };

        let progress = progress_at(start_ms, now_ms, COUNT_UP_DURATION_MS);
        self.rendered = render_text(&self.spec, progress);

        if progress >= 1.0 {
            self.phase = Phase::Done;
            CounterFrame::Done
        } else {
            CounterFrame::Running
        }
    }
}

/// Clamped linear progress in `[0, 1]`.
///
/// A zero duration completes immediately rather than dividing by zero.
fn progress_at(start_ms: u64, now_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(start_ms) as f64;
    (elapsed / duration_ms as f64).min(1.0)
}

/// Render the counter text for a progress value in `[0, 1]`.
///
/// Fractional targets keep exactly one decimal digit; integral targets floor
/// to an integer, so the displayed value never decreases across frames. The
/// terminal frame (`progress == 1`) renders the target itself, not an
/// approximation.
fn render_text(spec: &CounterSpec, progress: f64) -> String {
    let mut text = if spec.fractional {
        format!("{:.1}", progress * spec.target)
    } else if progress >= 1.0 {
        format!("{}", spec.target as i64)
    } else {
        format!("{}", (progress * spec.target).floor() as i64)
    };
    if spec.has_suffix {
        text.push('+');
    }
    text
}
