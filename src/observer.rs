//! Viewport intersection tracking for the scrolled page.
//!
//! The page is a vertical stack of blocks laid out in page rows. Each frame
//! the app hands the current layout and viewport to the observers here:
//! [`SectionTracker`] keeps the navigation highlight on the section that last
//! came into view, and [`RevealRegistry`] flips one-shot reveal flags for
//! blocks that scrolled into view at least once.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A vertical run of page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub top: u16,
    pub height: u16,
}

impl Extent {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn overlap(&self, other: &Extent) -> u16 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }
}

/// Page layout: block ids and where they sit, top to bottom.
pub type Layout = [(&'static str, Extent)];

/// Share of `target` in view, measured against the smaller of the target and
/// the viewport so blocks taller than the screen can still reach 1.0.
pub fn visible_ratio(target: Extent, viewport: Extent) -> f32 {
    let basis = target.height.min(viewport.height);
    if basis == 0 {
        return 0.0;
    }
    f32::from(target.overlap(&viewport)) / f32::from(basis)
}

/// Clamps a configured threshold into `(0, 1]`.
pub fn clamp_threshold(threshold: f32) -> f32 {
    if threshold.is_nan() {
        return 1.0;
    }
    threshold.clamp(f32::EPSILON, 1.0)
}

/// An intersection state change for one observed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub id: &'static str,
    pub is_intersecting: bool,
    pub ratio: f32,
}

/// Reports blocks whose in-view state changed since the last update.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold: f32,
    targets: Vec<(&'static str, bool)>,
}

impl IntersectionObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            targets: Vec::new(),
        }
    }

    pub fn observe(&mut self, id: &'static str) {
        if !self.targets.iter().any(|(t, _)| *t == id) {
            self.targets.push((id, false));
        }
    }

    /// Returns entries for observed blocks that crossed the threshold, in
    /// layout order. Blocks missing from `layout` are left untouched.
    pub fn update(&mut self, viewport: Extent, layout: &Layout) -> Vec<Entry> {
        let mut entries = Vec::new();
        for (id, extent) in layout {
            let Some(target) = self.targets.iter_mut().find(|(t, _)| *t == *id) else {
                continue;
            };
            let ratio = visible_ratio(*extent, viewport);
            let is_intersecting = ratio >= self.threshold;
            if is_intersecting != target.1 {
                target.1 = is_intersecting;
                entries.push(Entry {
                    id: *id,
                    is_intersecting,
                    ratio,
                });
            }
        }
        entries
    }
}

/// Tracks which navigation section is active.
///
/// Starts on the first configured section. Whenever a section enters the
/// threshold it becomes active; when several enter in the same update the
/// last one wins.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<&'static str>,
    active: Option<&'static str>,
    observer: IntersectionObserver,
}

impl SectionTracker {
    pub fn new(sections: &[&'static str], threshold: f32) -> Self {
        let mut observer = IntersectionObserver::new(threshold);
        for id in sections {
            observer.observe(*id);
        }
        Self {
            sections: sections.to_vec(),
            active: sections.first().copied(),
            observer,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    /// Marks `id` active directly, as after a navigation jump. Unknown ids
    /// are ignored.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.sections.iter().find(|s| **s == id) {
            Some(section) if self.active != Some(*section) => {
                self.active = Some(*section);
                true
            }
            _ => false,
        }
    }

    /// Feeds a new viewport position. Returns true if the active section changed.
    pub fn update(&mut self, viewport: Extent, layout: &Layout) -> bool {
        let before = self.active;
        for entry in self.observer.update(viewport, layout) {
            tracing::trace!(section = entry.id, ratio = entry.ratio, intersecting = entry.is_intersecting);
            if entry.is_intersecting {
                self.active = Some(entry.id);
            }
        }
        if self.active != before {
            tracing::debug!(active = ?self.active, "active section changed");
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
struct RevealInner {
    threshold: f32,
    pending: Vec<(&'static str, Rc<Cell<bool>>)>,
}

/// One-shot reveal-on-scroll bookkeeping.
///
/// Components call [`RevealRegistry::observe`] for each block they want to
/// fade in and keep the returned handle. Observation ends once the block has
/// been in view or when the handle is dropped, whichever comes first.
#[derive(Debug, Clone)]
pub struct RevealRegistry {
    inner: Rc<RefCell<RevealInner>>,
}

impl RevealRegistry {
    pub fn new(threshold: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RevealInner {
                threshold: clamp_threshold(threshold),
                pending: Vec::new(),
            })),
        }
    }

    pub fn observe(&self, id: &'static str) -> RevealHandle {
        let revealed = Rc::new(Cell::new(false));
        self.inner
            .borrow_mut()
            .pending
            .push((id, Rc::clone(&revealed)));
        RevealHandle {
            revealed,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Reveals pending blocks now in view. Returns how many were revealed.
    pub fn update(&self, viewport: Extent, layout: &Layout) -> usize {
        let mut inner = self.inner.borrow_mut();
        let threshold = inner.threshold;
        let before = inner.pending.len();
        inner.pending.retain(|(id, flag)| {
            let in_view = layout
                .iter()
                .find(|(block, _)| *block == *id)
                .is_some_and(|(_, extent)| visible_ratio(*extent, viewport) >= threshold);
            if in_view {
                flag.set(true);
                tracing::trace!(block = *id, "revealed");
            }
            !in_view
        });
        before - inner.pending.len()
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

/// Owned by the component whose block is being revealed.
#[derive(Debug)]
pub struct RevealHandle {
    revealed: Rc<Cell<bool>>,
    registry: Weak<RefCell<RevealInner>>,
}

impl RevealHandle {
    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner
                    .pending
                    .retain(|(_, flag)| !Rc::ptr_eq(flag, &self.revealed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: [(&str, Extent); 3] = [
        ("home", Extent { top: 0, height: 20 }),
        ("problem", Extent { top: 20, height: 30 }),
        ("platform", Extent { top: 50, height: 25 }),
    ];

    #[test]
    fn ratio_uses_smaller_of_target_and_viewport() {
        let viewport = Extent::new(0, 10);
        assert_eq!(visible_ratio(Extent::new(0, 40), viewport), 1.0);
        assert_eq!(visible_ratio(Extent::new(5, 10), viewport), 0.5);
        assert_eq!(visible_ratio(Extent::new(30, 10), viewport), 0.0);
        assert_eq!(visible_ratio(Extent::new(0, 0), viewport), 0.0);
    }

    #[test]
    fn observer_reports_only_changes() {
        let mut observer = IntersectionObserver::new(0.5);
        observer.observe("home");
        observer.observe("problem");

        let first = observer.update(Extent::new(0, 20), &LAYOUT);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "home");
        assert!(first[0].is_intersecting);

        assert!(observer.update(Extent::new(0, 20), &LAYOUT).is_empty());

        let moved = observer.update(Extent::new(25, 20), &LAYOUT);
        let ids: Vec<_> = moved.iter().map(|e| (e.id, e.is_intersecting)).collect();
        assert_eq!(ids, vec![("home", false), ("problem", true)]);
    }

    #[test]
    fn tracker_defaults_to_first_section() {
        let tracker = SectionTracker::new(&["home", "problem"], 0.5);
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn tracker_without_layout_keeps_default() {
        let mut tracker = SectionTracker::new(&["home", "problem"], 0.5);
        assert!(!tracker.update(Extent::new(0, 20), &[]));
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn tracker_with_no_sections_reports_none() {
        let mut tracker = SectionTracker::new(&[], 0.5);
        tracker.update(Extent::new(0, 20), &LAYOUT);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn tracker_follows_single_visible_section() {
        let mut tracker = SectionTracker::new(&["home", "problem", "platform"], 0.5);
        assert!(tracker.update(Extent::new(52, 20), &LAYOUT));
        assert_eq!(tracker.active(), Some("platform"));
    }

    #[test]
    fn activate_jumps_to_known_sections_only() {
        let mut tracker = SectionTracker::new(&["home", "problem"], 0.5);
        assert!(tracker.activate("problem"));
        assert!(!tracker.activate("problem"));
        assert!(!tracker.activate("footer"));
        assert_eq!(tracker.active(), Some("problem"));
    }

    #[test]
    fn last_entering_section_wins() {
        let mut tracker = SectionTracker::new(&["home", "problem", "platform"], 0.3);
        // Rows 40..70: a third of problem and most of platform.
        tracker.update(Extent::new(40, 30), &LAYOUT);
        assert_eq!(tracker.active(), Some("platform"));
    }

    #[test]
    fn reveal_is_one_shot() {
        let registry = RevealRegistry::new(0.2);
        let problem = registry.observe("problem");
        let platform = registry.observe("platform");

        assert_eq!(registry.update(Extent::new(0, 30), &LAYOUT), 1);
        assert!(problem.is_revealed());
        assert!(!platform.is_revealed());

        // Scrolling away never un-reveals.
        registry.update(Extent::new(100, 25), &LAYOUT);
        assert!(problem.is_revealed());
        assert_eq!(registry.pending(), 1);
    }

    #[test]
    fn dropping_handle_releases_observation() {
        let registry = RevealRegistry::new(0.2);
        let handle = registry.observe("platform");
        assert_eq!(registry.pending(), 1);
        drop(handle);
        assert_eq!(registry.pending(), 0);
        assert_eq!(registry.update(Extent::new(50, 25), &LAYOUT), 0);
    }

    #[test]
    fn thresholds_are_clamped() {
        assert_eq!(clamp_threshold(2.0), 1.0);
        assert!(clamp_threshold(0.0) > 0.0);
        assert_eq!(clamp_threshold(f32::NAN), 1.0);
    }
}
