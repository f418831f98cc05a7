//! Inertial scroll driver.
//!
//! Wheel and touch deltas move a target offset; each animation frame eases
//! the rendered offset towards that target. The driver only does the
//! arithmetic. The UI layer feeds it input and frame timestamps and writes
//! the returned offset to the document.

/// Default easing: exponential ease-out, reaching 1 slightly before `t = 1`.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Driver tuning.
#[derive(Debug, Clone, Copy)]
pub struct InertialOptions {
    /// Seconds one scroll gesture takes to settle.
    pub duration: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub easing: fn(f64) -> f64,
}

impl Default for InertialOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            easing: ease_out_expo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Smooth scrolling state machine.
#[derive(Debug, Clone)]
pub struct InertialScroll {
    options: InertialOptions,
    animated: f64,
    target: f64,
    limit: f64,
    animation: Option<Animation>,
    last_frame: Option<f64>,
}

impl Default for InertialScroll {
    fn default() -> Self {
        Self::new(InertialOptions::default())
    }
}

impl InertialScroll {
    pub fn new(options: InertialOptions) -> Self {
        Self {
            options,
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            animation: None,
            last_frame: None,
        }
    }

    /// Offset currently rendered.
    pub fn position(&self) -> f64 {
        self.animated
    }

    /// Offset the driver is heading for.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Largest reachable offset (document height minus viewport height).
    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the scrollable range, pulling offsets back inside it.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.clamp(self.target);
        self.animated = self.clamp(self.animated);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = self.target;
        }
    }

    /// Feed a wheel delta in pixels.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.nudge(delta_y * self.options.wheel_multiplier);
    }

    /// Feed a touch drag delta in pixels.
    pub fn on_touch(&mut self, delta_y: f64) {
        self.nudge(delta_y * self.options.touch_multiplier);
    }

    /// Head for `target`; `immediate` jumps there without easing.
    pub fn scroll_to(&mut self, target: f64, immediate: bool) {
        let target = self.clamp(target);
        self.target = target;
        if immediate {
            self.animated = target;
            self.animation = None;
        } else {
            self.start_animation();
        }
    }

    /// Adopt an offset reached by native scrolling (keyboard, scrollbar).
    /// Ignored mid-animation, where the driver owns the offset.
    pub fn sync_native(&mut self, offset: f64) {
        if self.animation.is_none() {
            let offset = self.clamp(offset);
            self.animated = offset;
            self.target = offset;
        }
    }

    /// Advance to the frame at `time_ms`. Returns the new offset when it
    /// moved.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let delta = self
            .last_frame
            .map_or(0.0, |last| ((time_ms - last) / 1000.0).max(0.0));
        self.last_frame = Some(time_ms);

        let animation = self.animation.as_mut()?;
        animation.elapsed += delta;

        let progress = if self.options.duration > 0.0 {
            (animation.elapsed / self.options.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let previous = self.animated;

        if progress >= 1.0 {
            self.animated = animation.to;
            self.animation = None;
        } else {
            let eased = (self.options.easing)(progress);
            self.animated = animation.from + (animation.to - animation.from) * eased;
        }

        (self.animated != previous).then_some(self.animated)
    }

    fn nudge(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        self.target = self.clamp(self.target + delta);
        self.start_animation();
    }

    fn start_animation(&mut self) {
        if self.target == self.animated {
            self.animation = None;
            return;
        }
        self.animation = Some(Animation {
            from: self.animated,
            to: self.target,
            elapsed: 0.0,
        });
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.limit)
    }
}
