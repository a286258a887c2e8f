//! Application state (Model in TEA pattern)

use learnly_core::counter::{CounterAnimation, CounterSpec, HERO_STATS};
use learnly_core::course::{find_course, CourseDescriptor};
use learnly_core::theme::ThemeMode;
use tracing::debug;

/// Number of topic slots the progress panel renders.
pub const PANEL_TOPIC_SLOTS: usize = 4;

/// How long the progress fill takes to settle after a retarget, in
/// milliseconds. A property of the panel, not of individual selections.
pub const FILL_TRANSITION_MS: u64 = 600;

/// How long a status flash stays visible, in milliseconds.
pub const STATUS_FLASH_MS: u64 = 5_000;

/// A labelled hero stat bound to its animation run.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: &'static str,
    pub anim: CounterAnimation,
}

/// Discover counters from the static stat declarations.
///
/// A declaration with a malformed target is skipped silently; the remaining
/// stats are unaffected.
pub fn discover_counters() -> Vec<StatCounter> {
    HERO_STATS
        .iter()
        .filter_map(|decl| {
            let Some(spec) = CounterSpec::parse(decl.raw_target, decl.initial_text) else {
                debug!(label = decl.label, raw = decl.raw_target, "skipping malformed stat");
                return None;
            };
            Some(StatCounter {
                label: decl.label,
                anim: CounterAnimation::new(spec),
            })
        })
        .collect()
}

/// Eased interpolation for the progress bar fill.
///
/// Configured once when the panel is built; each selection retargets it from
/// the currently displayed value, so rapid selections are last-write-wins
/// with no queuing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillTransition {
    from: f64,
    to: f64,
    start_ms: u64,
}

impl FillTransition {
    /// A transition already settled at `percent`.
    pub fn idle(percent: f64) -> Self {
        Self {
            from: percent,
            to: percent,
            start_ms: 0,
        }
    }

    /// Aim for a new fill percentage, starting from whatever is on screen.
    pub fn retarget(&mut self, percent: f64, now_ms: u64) {
        self.from = self.value_at(now_ms);
        self.to = percent;
        self.start_ms = now_ms;
    }

    /// The percentage the transition is heading for.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Displayed fill percentage at `now_ms`.
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = (elapsed / FILL_TRANSITION_MS as f64).min(1.0);
        self.from + (self.to - self.from) * ease(t)
    }
}

/// Smooth ease curve for the fixed 0.6 s fill transition.
fn ease(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// The progress panel's rendered state: a direct projection of the most
/// recently selected course.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub title: String,
    /// Topic slots, updated positionally on selection.
    pub items: Vec<String>,
    pub fill: FillTransition,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            title: "Pick a course to plan your roadmap".to_string(),
            items: vec!["\u{2026}".to_string(); PANEL_TOPIC_SLOTS],
            fill: FillTransition::idle(0.0),
        }
    }

    /// Project a course onto the panel.
    ///
    /// Unknown names leave every piece of panel state untouched. Topic slots
    /// beyond the course's topic count keep their previous text (sparse
    /// update, never clear-and-refill).
    pub fn select_course(
        &mut self,
        name: &str,
        now_ms: u64,
    ) -> Option<&'static CourseDescriptor> {
        let course = find_course(name)?;
        self.title.clear();
        self.title.push_str(course.title);
        self.fill.retarget(course.percent as f64, now_ms);
        for (slot, topic) in self.items.iter_mut().zip(course.topics.iter()) {
            slot.clear();
            slot.push_str(topic);
        }
        Some(course)
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot status message with a fixed expiry, cleared by the tick handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFlash {
    pub text: String,
    pub expires_at_ms: u64,
}

/// Rectangular hit region recorded by the view for pointer dispatch.
///
/// Plain numbers so this crate stays independent of the rendering backend's
/// geometry types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Pointer targets refreshed on each render pass.
#[derive(Debug, Clone, Default)]
pub struct ClickTargets {
    /// The header logo; clicking it toggles the theme.
    pub logo: Option<HitRegion>,
    /// One region per rendered course row, carrying the course name.
    pub courses: Vec<(HitRegion, &'static str)>,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: ThemeMode,
    pub counters: Vec<StatCounter>,
    pub panel: PanelState,
    /// Index into the course catalog for keyboard navigation.
    pub course_focus: usize,
    pub status: Option<StatusFlash>,
    pub click_targets: ClickTargets,
    /// Timestamp of the most recent tick, used by time-based renders.
    pub last_tick_ms: u64,
    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: ThemeMode::default(),
            counters: discover_counters(),
            panel: PanelState::new(),
            course_focus: 0,
            status: None,
            click_targets: ClickTargets::default(),
            last_tick_ms: 0,
            quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Show a status line message until `now_ms + STATUS_FLASH_MS`.
    pub fn flash(&mut self, text: impl Into<String>, now_ms: u64) {
        self.status = Some(StatusFlash {
            text: text.into(),
            expires_at_ms: now_ms + STATUS_FLASH_MS,
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
