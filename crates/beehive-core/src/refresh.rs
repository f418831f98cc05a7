//! When scroll triggers get re-measured.
//!
//! Timers live in the browser; this type only decides which timer to start
//! and which to cancel. `H` is the caller's timer handle.

use std::time::Duration;

/// Delay before trigger positions are recomputed after navigation, giving
/// the new page time to lay out.
pub const ROUTE_REFRESH_DELAY: Duration = Duration::from_millis(100);

/// A refresh timer the caller should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub delay: Duration,
    /// Passed back to [`RefreshScheduler::attach`] and
    /// [`RefreshScheduler::fired`].
    pub generation: u64,
}

/// Outcome of a route change.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRefresh<H> {
    /// Timer of the refresh that is now superseded.
    pub cancel: Option<H>,
    pub plan: Option<RefreshPlan>,
}

#[derive(Debug)]
struct Pending<H> {
    generation: u64,
    handle: Option<H>,
}

/// At most one pending refresh.
#[derive(Debug)]
pub struct RefreshScheduler<H> {
    pending: Option<Pending<H>>,
    next_generation: u64,
    stopped: bool,
}

impl<H> Default for RefreshScheduler<H> {
    fn default() -> Self {
        Self {
            pending: None,
            next_generation: 0,
            stopped: false,
        }
    }
}

impl<H> RefreshScheduler<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn plan(&mut self, delay: Duration) -> RefreshPlan {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending = Some(Pending {
            generation,
            handle: None,
        });
        RefreshPlan { delay, generation }
    }

    /// Navigation: replace any pending refresh with one after
    /// [`ROUTE_REFRESH_DELAY`].
    pub fn route_changed(&mut self) -> RouteRefresh<H> {
        if self.stopped {
            return RouteRefresh {
                cancel: None,
                plan: None,
            };
        }
        let cancel = self.pending.take().and_then(|p| p.handle);
        RouteRefresh {
            cancel,
            plan: Some(self.plan(ROUTE_REFRESH_DELAY)),
        }
    }

    /// A trigger was registered or the viewport resized: refresh on the next
    /// tick unless a refresh is already pending.
    pub fn request(&mut self) -> Option<RefreshPlan> {
        if self.stopped || self.pending.is_some() {
            return None;
        }
        Some(self.plan(Duration::ZERO))
    }

    /// Record the timer started for `generation`. Hands the timer back when
    /// it no longer matches the pending refresh; the caller cancels it.
    pub fn attach(&mut self, generation: u64, handle: H) -> Option<H> {
        match &mut self.pending {
            Some(pending) if pending.generation == generation && pending.handle.is_none() => {
                pending.handle = Some(handle);
                None
            }
            _ => Some(handle),
        }
    }

    /// The timer for `generation` fired, or could not be started. Returns
    /// whether the caller should refresh.
    pub fn fired(&mut self, generation: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.generation == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Tear down: returns the pending timer to cancel. Later requests are
    /// ignored.
    pub fn stop(&mut self) -> Option<H> {
        self.stopped = true;
        self.pending.take().and_then(|p| p.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_change_refreshes_after_delay() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let step = scheduler.route_changed();
        assert_eq!(step.cancel, None);
        let plan = step.plan.expect("route refresh");
        assert_eq!(plan.delay, ROUTE_REFRESH_DELAY);
        assert_eq!(scheduler.attach(plan.generation, 1), None);
        assert!(scheduler.is_pending());

        assert!(scheduler.fired(plan.generation));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_route_change_cancels_pending_refresh() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let first = scheduler.route_changed().plan.expect("first plan");
        assert_eq!(scheduler.attach(first.generation, 1), None);

        let step = scheduler.route_changed();
        assert_eq!(step.cancel, Some(1));
        let second = step.plan.expect("second plan");
        assert_ne!(first.generation, second.generation);
        assert_eq!(scheduler.attach(second.generation, 2), None);

        // A late callback from the superseded timer does nothing.
        assert!(!scheduler.fired(first.generation));
        assert!(scheduler.is_pending());
        assert!(scheduler.fired(second.generation));
    }

    #[test]
    fn test_registration_refreshes_only_when_idle() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let plan = scheduler.request().expect("idle request");
        assert_eq!(plan.delay, Duration::ZERO);
        assert_eq!(scheduler.attach(plan.generation, 7), None);

        assert_eq!(scheduler.request(), None);
        assert!(scheduler.fired(plan.generation));
        assert!(scheduler.request().is_some());
    }

    #[test]
    fn test_registration_during_route_refresh_keeps_route_delay() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let route = scheduler.route_changed().plan.expect("route plan");
        scheduler.attach(route.generation, 3);

        assert_eq!(scheduler.request(), None);
        assert!(scheduler.fired(route.generation));
    }

    #[test]
    fn test_stale_timer_is_handed_back() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let first = scheduler.route_changed().plan.expect("first plan");
        let _ = scheduler.route_changed();
        assert_eq!(scheduler.attach(first.generation, 9), Some(9));
    }

    #[test]
    fn test_stop_cancels_scheduled_refresh() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let plan = scheduler.route_changed().plan.expect("route plan");
        scheduler.attach(plan.generation, 4);

        assert_eq!(scheduler.stop(), Some(4));
        assert!(scheduler.is_stopped());
        assert!(!scheduler.is_pending());
        assert!(!scheduler.fired(plan.generation));
        assert_eq!(scheduler.request(), None);
        assert_eq!(
            scheduler.route_changed(),
            RouteRefresh {
                cancel: None,
                plan: None
            }
        );
    }

    #[test]
    fn test_failed_timer_clears_pending() {
        let mut scheduler = RefreshScheduler::<u32>::new();
        let plan = scheduler.request().expect("plan");
        assert!(scheduler.fired(plan.generation));
        assert!(scheduler.request().is_some());
    }
}
