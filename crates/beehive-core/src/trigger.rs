//! Scroll-linked animation triggers.
//!
//! A registry of reveal (one-shot) and parallax (continuous) triggers. The
//! registry knows nothing about the DOM: callers measure element bounds on
//! [`TriggerRegistry::refresh`] and apply the [`TriggerEffect`]s returned by
//! [`TriggerRegistry::update`].

use std::collections::BTreeMap;

/// Edge of the trigger element used to position a trigger point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

/// Fires when `edge` of the element crosses `viewport` (a fraction of the
/// viewport height, 0 = top, 1 = bottom). `top 92%` is
/// `TriggerPoint::new(Edge::Top, 0.92)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub edge: Edge,
    pub viewport: f64,
}

impl TriggerPoint {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Scroll offset at which this point is crossed.
    pub fn scroll_offset(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        bounds.top + self.edge.fraction() * bounds.height - self.viewport * viewport_height
    }
}

/// Element box in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// When a reveal fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStart {
    /// On the first update after the element is measured.
    OnLoad,
    /// Once the scroll position passes this point.
    At(TriggerPoint),
}

impl RevealStart {
    fn is_passed(&self, bounds: Bounds, scroll_y: f64, viewport_height: f64) -> bool {
        match self {
            RevealStart::OnLoad => true,
            RevealStart::At(point) => scroll_y >= point.scroll_offset(bounds, viewport_height),
        }
    }
}

/// One-shot reveal once the start point is passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub start: RevealStart,
    /// Stagger delay applied to the reveal transition.
    pub delay_ms: u32,
}

impl RevealSpec {
    /// Reveal when the element top reaches `viewport` of the screen height.
    pub const fn at(viewport: f64) -> Self {
        Self {
            start: RevealStart::At(TriggerPoint::new(Edge::Top, viewport)),
            delay_ms: 0,
        }
    }

    /// Reveal as soon as the page is laid out (entrance animations).
    pub const fn on_load() -> Self {
        Self {
            start: RevealStart::OnLoad,
            delay_ms: 0,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// How far a parallax target travels over the whole trigger range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Pixels(f64),
    /// Percent of the trigger element height.
    Percent(f64),
}

/// Continuous offset proportional to progress between `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSpec {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
    pub distance: Distance,
}

impl ParallaxSpec {
    /// From the element entering at the bottom to leaving at the top.
    pub const fn through_viewport(distance: Distance) -> Self {
        Self {
            start: TriggerPoint::new(Edge::Top, 1.0),
            end: TriggerPoint::new(Edge::Bottom, 0.0),
            distance,
        }
    }

    /// From the element top at the viewport top to its bottom leaving.
    pub const fn from_top(distance: Distance) -> Self {
        Self {
            start: TriggerPoint::new(Edge::Top, 0.0),
            end: TriggerPoint::new(Edge::Bottom, 0.0),
            distance,
        }
    }

    /// Progress in `[0, 1]` at `scroll_y`.
    pub fn progress(&self, bounds: Bounds, scroll_y: f64, viewport_height: f64) -> f64 {
        let start = self.start.scroll_offset(bounds, viewport_height);
        let end = self.end.scroll_offset(bounds, viewport_height);
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// Offset in pixels at `scroll_y`.
    pub fn offset(&self, bounds: Bounds, scroll_y: f64, viewport_height: f64) -> f64 {
        let travel = match self.distance {
            Distance::Pixels(px) => px,
            Distance::Percent(pct) => pct / 100.0 * bounds.height,
        };
        travel * self.progress(bounds, scroll_y, viewport_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerKind {
    Reveal(RevealSpec),
    Parallax(ParallaxSpec),
}

/// Handle to a registered trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(u64);

/// Visual change the caller should apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEffect {
    Reveal { id: TriggerId, delay_ms: u32 },
    Parallax { id: TriggerId, offset_px: f64 },
}

impl TriggerEffect {
    pub fn id(&self) -> TriggerId {
        match *self {
            TriggerEffect::Reveal { id, .. } | TriggerEffect::Parallax { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    kind: TriggerKind,
    bounds: Option<Bounds>,
    revealed: bool,
    last_offset: Option<f64>,
}

/// All triggers registered by mounted views.
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    next_id: u64,
    entries: BTreeMap<TriggerId, Entry>,
    reduced_motion: bool,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users asking for reduced motion get every reveal at once and no
    /// parallax.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn register(&mut self, kind: TriggerKind) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                kind,
                bounds: None,
                revealed: false,
                last_offset: None,
            },
        );
        id
    }

    /// Remove a trigger. Returns whether it was registered.
    pub fn unregister(&mut self, id: TriggerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Drop every trigger.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_revealed(&self, id: TriggerId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.revealed)
    }

    pub fn ids(&self) -> impl Iterator<Item = TriggerId> + '_ {
        self.entries.keys().copied()
    }

    /// Re-measure every trigger. `measure` returns `None` for elements that
    /// are no longer laid out; those triggers stay dormant until the next
    /// refresh.
    pub fn refresh(&mut self, mut measure: impl FnMut(TriggerId) -> Option<Bounds>) {
        for (id, entry) in &mut self.entries {
            entry.bounds = measure(*id);
            entry.last_offset = None;
        }
        log::debug!("refreshed {} scroll triggers", self.entries.len());
    }

    /// Evaluate triggers at `scroll_y`.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<TriggerEffect> {
        let mut effects = Vec::new();

        for (id, entry) in &mut self.entries {
            let Some(bounds) = entry.bounds else {
                continue;
            };

            match entry.kind {
                TriggerKind::Reveal(spec) => {
                    if entry.revealed {
                        continue;
                    }
                    if self.reduced_motion
                        || spec.start.is_passed(bounds, scroll_y, viewport_height)
                    {
                        entry.revealed = true;
                        let delay_ms = if self.reduced_motion { 0 } else { spec.delay_ms };
                        effects.push(TriggerEffect::Reveal { id: *id, delay_ms });
                    }
                }
                TriggerKind::Parallax(spec) => {
                    let offset_px = if self.reduced_motion {
                        0.0
                    } else {
                        spec.offset(bounds, scroll_y, viewport_height)
                    };
                    if entry.last_offset != Some(offset_px) {
                        entry.last_offset = Some(offset_px);
                        effects.push(TriggerEffect::Parallax { id: *id, offset_px });
                    }
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn test_trigger_point_offset() {
        let bounds = Bounds::new(2000.0, 400.0);
        let top_92 = TriggerPoint::new(Edge::Top, 0.92);
        assert_eq!(top_92.scroll_offset(bounds, VIEWPORT), 1080.0);

        let bottom_top = TriggerPoint::new(Edge::Bottom, 0.0);
        assert_eq!(bottom_top.scroll_offset(bounds, VIEWPORT), 2400.0);
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut registry = TriggerRegistry::new();
        let id = registry.register(TriggerKind::Reveal(RevealSpec::at(0.9).with_delay(150)));
        registry.refresh(|_| Some(Bounds::new(1500.0, 300.0)));

        assert!(registry.update(0.0, VIEWPORT).is_empty());
        assert!(!registry.is_revealed(id));

        let effects = registry.update(700.0, VIEWPORT);
        assert_eq!(effects, vec![TriggerEffect::Reveal { id, delay_ms: 150 }]);
        assert!(registry.is_revealed(id));

        assert!(registry.update(900.0, VIEWPORT).is_empty());
        assert!(registry.update(0.0, VIEWPORT).is_empty());
    }

    #[test]
    fn test_on_load_reveal_fires_immediately() {
        let mut registry = TriggerRegistry::new();
        let id = registry.register(TriggerKind::Reveal(RevealSpec::on_load()));
        registry.refresh(|_| Some(Bounds::new(5000.0, 100.0)));
        assert_eq!(
            registry.update(0.0, VIEWPORT),
            vec![TriggerEffect::Reveal { id, delay_ms: 0 }]
        );
    }

    #[test]
    fn test_on_load_reveal_without_viewport_height() {
        let mut registry = TriggerRegistry::new();
        let id = registry.register(TriggerKind::Reveal(RevealSpec::on_load().with_delay(200)));
        registry.refresh(|_| Some(Bounds::new(100.0, 50.0)));
        assert_eq!(
            registry.update(0.0, 0.0),
            vec![TriggerEffect::Reveal { id, delay_ms: 200 }]
        );
        assert!(registry.update(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_on_load_reveal_waits_for_measurement() {
        let mut registry = TriggerRegistry::new();
        let id = registry.register(TriggerKind::Reveal(RevealSpec::on_load()));
        assert!(registry.update(0.0, VIEWPORT).is_empty());

        registry.refresh(|_| Some(Bounds::new(0.0, 10.0)));
        assert_eq!(registry.update(0.0, VIEWPORT).len(), 1);
        assert!(registry.is_revealed(id));
    }

    #[test]
    fn test_unmeasured_triggers_stay_dormant() {
        let mut registry = TriggerRegistry::new();
        registry.register(TriggerKind::Reveal(RevealSpec::at(1.0)));
        assert!(registry.update(10_000.0, VIEWPORT).is_empty());

        registry.refresh(|_| None);
        assert!(registry.update(10_000.0, VIEWPORT).is_empty());
    }

    #[test]
    fn test_parallax_progress_is_clamped() {
        let spec = ParallaxSpec::through_viewport(Distance::Pixels(-40.0));
        let bounds = Bounds::new(2000.0, 500.0);

        // Starts at 1000 (top hits bottom), ends at 2500 (bottom hits top).
        assert_eq!(spec.progress(bounds, 0.0, VIEWPORT), 0.0);
        assert_eq!(spec.progress(bounds, 1750.0, VIEWPORT), 0.5);
        assert_eq!(spec.progress(bounds, 9000.0, VIEWPORT), 1.0);
        assert_eq!(spec.offset(bounds, 1750.0, VIEWPORT), -20.0);
    }

    #[test]
    fn test_parallax_percent_of_height() {
        let spec = ParallaxSpec::from_top(Distance::Percent(20.0));
        let bounds = Bounds::new(0.0, 800.0);
        assert_eq!(spec.offset(bounds, 800.0, VIEWPORT), 160.0);
        assert_eq!(spec.offset(bounds, 400.0, VIEWPORT), 80.0);
    }

    #[test]
    fn test_parallax_emits_only_on_change() {
        let mut registry = TriggerRegistry::new();
        let id = registry.register(TriggerKind::Parallax(ParallaxSpec::from_top(
            Distance::Pixels(100.0),
        )));
        registry.refresh(|_| Some(Bounds::new(0.0, 1000.0)));

        assert_eq!(
            registry.update(500.0, VIEWPORT),
            vec![TriggerEffect::Parallax { id, offset_px: 50.0 }]
        );
        assert!(registry.update(500.0, VIEWPORT).is_empty());
        assert_eq!(registry.update(1000.0, VIEWPORT).len(), 1);
    }

    #[test]
    fn test_reduced_motion() {
        let mut registry = TriggerRegistry::new();
        registry.set_reduced_motion(true);
        let reveal = registry.register(TriggerKind::Reveal(RevealSpec::at(0.5).with_delay(300)));
        let parallax = registry.register(TriggerKind::Parallax(ParallaxSpec::from_top(
            Distance::Pixels(100.0),
        )));
        registry.refresh(|_| Some(Bounds::new(4000.0, 500.0)));

        let effects = registry.update(4200.0, VIEWPORT);
        assert!(effects.contains(&TriggerEffect::Reveal {
            id: reveal,
            delay_ms: 0
        }));
        assert!(effects.contains(&TriggerEffect::Parallax {
            id: parallax,
            offset_px: 0.0
        }));
    }

    #[test]
    fn test_unregister_and_clear() {
        let mut registry = TriggerRegistry::new();
        let a = registry.register(TriggerKind::Reveal(RevealSpec::at(0.9)));
        let b = registry.register(TriggerKind::Reveal(RevealSpec::at(0.9)));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        assert!(registry.unregister(a));
        assert!(!registry.unregister(a));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![b]);

        registry.clear();
        assert!(registry.is_empty());
    }
}
