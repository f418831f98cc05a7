//! Smooth-scroll adapter.
//!
//! Owns the document scroll position for the lifetime of the page shell: an
//! [`InertialScroll`] driver advanced on every animation frame, a wheel
//! listener feeding it, and the [`TriggerRegistry`] that reveal and parallax
//! views register with.

use std::collections::HashMap;

use beehive_core::{
    InertialScroll, RefreshPlan, RefreshScheduler, ScrollBackend, ScrollLock, TriggerEffect,
    TriggerId, TriggerKind, TriggerRegistry, trigger::Bounds,
};
use leptos::{
    ev,
    leptos_dom::helpers::{
        AnimationFrameRequestHandle, TimeoutHandle, request_animation_frame_with_handle,
        set_timeout_with_handle,
    },
    prelude::*,
};
use leptos_router::hooks::use_location;
use wasm_bindgen::{JsCast, closure::Closure};

/// Class added to an element once its reveal trigger has fired.
pub const REVEALED_CLASS: &str = "is-revealed";

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Pixels per line for `DOM_DELTA_LINE` wheel events.
const LINE_HEIGHT: f64 = 16.0;

/// Wheel delta in pixels for a raw `deltaY` in the given `deltaMode`.
pub fn wheel_delta(delta_y: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    match delta_mode {
        1 => delta_y * LINE_HEIGHT,
        2 => delta_y * viewport_height,
        _ => delta_y,
    }
}

/// CSS transform for a vertical parallax offset.
pub fn translate_y(offset_px: f64) -> String {
    format!("translate3d(0, {offset_px:.2}px, 0)")
}

/// Toggles `overflow: hidden` on `<body>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyOverflow;

impl ScrollBackend for BodyOverflow {
    fn set_scroll_enabled(&self, enabled: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let result = if enabled {
            style.remove_property("overflow").map(drop)
        } else {
            style.set_property("overflow", "hidden")
        };
        if let Err(err) = result {
            log::warn!("failed to toggle body overflow: {err:?}");
        }
    }
}

/// Elements behind one registered trigger.
struct TriggerTarget {
    /// Element whose position defines the trigger points.
    trigger: web_sys::Element,
    /// Element the effect is applied to.
    target: web_sys::HtmlElement,
}

impl TriggerTarget {
    fn measure(&self, scroll_y: f64) -> Option<Bounds> {
        let rect = self.trigger.get_bounding_client_rect();
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return None;
        }
        Some(Bounds::new(rect.top() + scroll_y, rect.height()))
    }

    fn apply(&self, effect: TriggerEffect) {
        let style = self.target.style();
        let result = match effect {
            TriggerEffect::Reveal { delay_ms, .. } => {
                if delay_ms > 0 {
                    let _ = style.set_property("transition-delay", &format!("{delay_ms}ms"));
                }
                self.target.class_list().add_1(REVEALED_CLASS)
            }
            TriggerEffect::Parallax { offset_px, .. } => {
                style.set_property("transform", &translate_y(offset_px))
            }
        };
        if let Err(err) = result {
            log::warn!("failed to apply scroll effect: {err:?}");
        }
    }

    fn revert(&self) {
        let _ = self.target.class_list().remove_1(REVEALED_CLASS);
        let style = self.target.style();
        let _ = style.remove_property("transform");
        let _ = style.remove_property("transition-delay");
    }
}

/// Non-passive `wheel` listener on the window, removed on drop.
struct WheelListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut(web_sys::WheelEvent)>,
}

impl WheelListener {
    fn attach(handler: impl FnMut(web_sys::WheelEvent) + 'static) -> Option<Self> {
        let window = window();
        let closure = Closure::<dyn FnMut(web_sys::WheelEvent)>::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);

        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::error!("failed to attach wheel listener: {err:?}");
            return None;
        }
        Some(Self { window, closure })
    }
}

impl Drop for WheelListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.closure.as_ref().unchecked_ref());
    }
}

/// Handle to the page scroll engine, provided as context by
/// [`SmoothScrollProvider`].
#[derive(Clone, Copy)]
pub struct SmoothScroll {
    driver: StoredValue<InertialScroll>,
    triggers: StoredValue<TriggerRegistry>,
    targets: StoredValue<HashMap<TriggerId, TriggerTarget>, LocalStorage>,
    lock: StoredValue<ScrollLock>,
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
    refresh_schedule: StoredValue<RefreshScheduler<TimeoutHandle>>,
    reduced_motion: bool,
}

impl SmoothScroll {
    fn new(lock: ScrollLock, reduced_motion: bool) -> Self {
        let mut triggers = TriggerRegistry::new();
        triggers.set_reduced_motion(reduced_motion);

        Self {
            driver: StoredValue::new(InertialScroll::default()),
            triggers: StoredValue::new(triggers),
            targets: StoredValue::new_local(HashMap::new()),
            lock: StoredValue::new(lock),
            frame: StoredValue::new(None),
            refresh_schedule: StoredValue::new(RefreshScheduler::new()),
            reduced_motion,
        }
    }

    /// Whether the user asked for reduced motion.
    pub fn reduced_motion(self) -> bool {
        self.reduced_motion
    }

    /// Whether something holds the page scroll lock.
    pub fn is_locked(self) -> bool {
        self.lock
            .try_with_value(ScrollLock::is_locked)
            .unwrap_or(false)
    }

    /// Scroll the page to `y`, easing unless `immediate`.
    pub fn scroll_to(self, y: f64, immediate: bool) {
        self.driver.update_value(|d| d.scroll_to(y, immediate));
        if immediate || self.reduced_motion {
            window().scroll_to_with_x_and_y(0.0, y);
        }
    }

    /// Register a trigger measured on `trigger` and applied to `target`.
    pub fn register(
        self,
        kind: TriggerKind,
        trigger: web_sys::Element,
        target: web_sys::HtmlElement,
    ) -> Option<TriggerId> {
        let id = self.triggers.try_update_value(|t| t.register(kind))?;
        self.targets
            .try_update_value(|targets| targets.insert(id, TriggerTarget { trigger, target }))?;
        self.request_refresh();
        Some(id)
    }

    /// Remove a trigger and revert what it applied.
    pub fn unregister(self, id: TriggerId) {
        self.triggers.try_update_value(|t| t.unregister(id));
        if let Some(Some(target)) = self.targets.try_update_value(|targets| targets.remove(&id)) {
            target.revert();
        }
    }

    /// Re-measure every trigger now.
    pub fn refresh(self) {
        let scroll_y = scroll_y();
        self.targets.try_with_value(|targets| {
            self.triggers.try_update_value(|registry| {
                registry.refresh(|id| targets.get(&id).and_then(|t| t.measure(scroll_y)));
            })
        });
    }

    /// Re-measure once a newly routed page has laid out, superseding any
    /// pending refresh.
    pub fn route_changed(self) {
        let Some(step) = self
            .refresh_schedule
            .try_update_value(RefreshScheduler::route_changed)
        else {
            return;
        };
        if let Some(handle) = step.cancel {
            handle.clear();
        }
        if let Some(plan) = step.plan {
            self.start_refresh_timer(plan);
        }
    }

    /// Refresh on the next tick unless one is already pending.
    fn request_refresh(self) {
        if let Some(Some(plan)) = self
            .refresh_schedule
            .try_update_value(RefreshScheduler::request)
        {
            self.start_refresh_timer(plan);
        }
    }

    fn start_refresh_timer(self, plan: RefreshPlan) {
        let generation = plan.generation;
        let scheduled = set_timeout_with_handle(
            move || {
                if self
                    .refresh_schedule
                    .try_update_value(|r| r.fired(generation))
                    .unwrap_or(false)
                {
                    self.refresh();
                }
            },
            plan.delay,
        );
        match scheduled {
            Ok(handle) => {
                if let Some(Some(stale)) =
                    self.refresh_schedule.try_update_value(|r| r.attach(generation, handle))
                {
                    stale.clear();
                }
            }
            Err(err) => {
                self.refresh_schedule.try_update_value(|r| r.fired(generation));
                log::error!("failed to schedule trigger refresh: {err:?}");
            }
        }
    }

    fn on_wheel(self, ev: web_sys::WheelEvent) {
        // Pinch-zoom arrives as ctrl+wheel; leave it to the browser.
        if ev.ctrl_key() || self.is_locked() {
            return;
        }
        ev.prevent_default();
        let delta = wheel_delta(ev.delta_y(), ev.delta_mode(), viewport_height());
        self.driver.try_update_value(|d| d.on_wheel(delta));
    }

    fn schedule_frame(self) {
        let requested = request_animation_frame_with_handle(move || {
            if self.tick() {
                self.schedule_frame();
            }
        });
        match requested {
            Ok(handle) => {
                self.frame.try_update_value(|f| *f = Some(handle));
            }
            Err(err) => log::error!("failed to request animation frame: {err:?}"),
        }
    }

    /// One animation frame. Returns `false` once the engine is gone.
    fn tick(self) -> bool {
        let now = now_ms();
        let viewport = viewport_height();
        let native = scroll_y();
        let limit = (document_height() - viewport).max(0.0);
        let hold = self.reduced_motion || self.is_locked();

        let Some(moved) = self.driver.try_update_value(|d| {
            d.set_limit(limit);
            if hold {
                d.scroll_to(native, true);
                d.raf(now);
                return None;
            }
            let moved = d.raf(now);
            if moved.is_none() {
                d.sync_native(native);
            }
            moved
        }) else {
            return false;
        };

        let y = match moved {
            Some(y) => {
                window().scroll_to_with_x_and_y(0.0, y);
                y
            }
            None => native,
        };

        let Some(effects) = self.triggers.try_update_value(|t| t.update(y, viewport)) else {
            return false;
        };
        if !effects.is_empty() {
            self.targets.try_with_value(|targets| {
                for effect in effects {
                    if let Some(target) = targets.get(&effect.id()) {
                        target.apply(effect);
                    }
                }
            });
        }
        true
    }

    fn stop(self) {
        if let Some(handle) = self.frame.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
        if let Some(handle) = self
            .refresh_schedule
            .try_update_value(RefreshScheduler::stop)
            .flatten()
        {
            handle.clear();
        }
        self.targets.try_update_value(|targets| {
            for target in targets.values() {
                target.revert();
            }
            targets.clear();
        });
        self.triggers.try_update_value(TriggerRegistry::clear);
        log::debug!("smooth scroll stopped");
    }
}

/// Installs smooth scrolling, the page scroll lock and the trigger registry
/// for everything rendered inside it. Must live inside the router.
#[component]
pub fn SmoothScrollProvider(children: Children) -> impl IntoView {
    let lock = ScrollLock::new(BodyOverflow);
    let reduced_motion = prefers_reduced_motion();
    let scroll = SmoothScroll::new(lock.clone(), reduced_motion);
    provide_context(lock);
    provide_context(scroll);

    let wheel = StoredValue::new_local(if reduced_motion {
        None
    } else {
        WheelListener::attach(move |ev| scroll.on_wheel(ev))
    });
    let resize = window_event_listener(ev::resize, move |_| scroll.request_refresh());

    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("navigated to {path}");
        scroll.scroll_to(0.0, true);
        scroll.route_changed();
    });

    scroll.schedule_frame();

    on_cleanup(move || {
        wheel.try_update_value(|w| *w = None);
        resize.remove();
        scroll.stop();
    });

    children()
}

/// Scroll engine of the enclosing [`SmoothScrollProvider`], if any.
pub fn use_smooth_scroll() -> Option<SmoothScroll> {
    use_context::<SmoothScroll>()
}

/// Page scroll lock of the enclosing [`SmoothScrollProvider`]; a lock that
/// touches nothing when rendered outside one.
pub fn use_scroll_lock() -> ScrollLock {
    use_context::<ScrollLock>().unwrap_or_default()
}

fn prefers_reduced_motion() -> bool {
    window()
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default()
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default()
}
