//! Eased scroll animation, independent of the browser.
//!
//! Wheel input moves a target offset; each animation frame the current
//! offset is sampled from a tween toward that target and reported as a
//! [`ScrollEvent`]. The DOM side lives in `dom::scroller`.

/// Pixels per line for `WheelEvent.deltaMode == DOM_DELTA_LINE`.
pub const LINE_HEIGHT_PX: f64 = 16.0;
/// Bound on a single normalised wheel step.
pub const MAX_WHEEL_STEP_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOrientation {
    Vertical,
    Horizontal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// `min(1, 1.001 - 2^(-10t))`
    ExpoOut,
    Linear,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Easing::Linear => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// Tuning applied once when the scroller is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Tween length in seconds.
    pub duration: f64,
    pub easing: Easing,
    pub orientation: Orientation,
    pub gesture_orientation: GestureOrientation,
    pub smooth_wheel: bool,
    pub smooth_touch: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub infinite: bool,
    pub normalize_wheel: bool,
    /// Follow touch input with a per-frame lerp instead of a tween.
    pub sync_touch: bool,
    pub sync_touch_lerp: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            easing: Easing::ExpoOut,
            orientation: Orientation::Vertical,
            gesture_orientation: GestureOrientation::Vertical,
            smooth_wheel: true,
            smooth_touch: false,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
            normalize_wheel: true,
            sync_touch: false,
            sync_touch_lerp: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    /// Change since the previous event.
    pub velocity: f64,
    /// -1 up, 1 down, 0 still.
    pub direction: i8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Tween {
        from: f64,
        to: f64,
        started_at: f64,
    },
    Lerp {
        factor: f64,
    },
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    options: ScrollOptions,
    current: f64,
    target: f64,
    limit: f64,
    motion: Option<Motion>,
    pending_emit: bool,
    direction: i8,
}

impl ScrollAnimator {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            motion: None,
            pending_emit: false,
            direction: 0,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn scroll(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    fn clamp(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        if self.options.infinite && self.limit > 0.0 {
            offset.rem_euclid(self.limit)
        } else {
            offset.clamp(0.0, self.limit)
        }
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.target = self.clamp(self.target);
        let current = self.clamp(self.current);
        self.move_to(current);
    }

    /// Feeds one wheel event. Returns false when wheel smoothing is off and
    /// the browser should scroll natively.
    pub fn on_wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        mode: DeltaMode,
        page_px: f64,
        now: f64,
    ) -> bool {
        if !self.options.smooth_wheel {
            return false;
        }
        let delta = match self.options.gesture_orientation {
            GestureOrientation::Vertical => delta_y,
            GestureOrientation::Horizontal => delta_x,
            GestureOrientation::Both if delta_x.abs() > delta_y.abs() => delta_x,
            GestureOrientation::Both => delta_y,
        };
        let mut px = match mode {
            DeltaMode::Pixel => delta,
            DeltaMode::Line => delta * LINE_HEIGHT_PX,
            DeltaMode::Page => delta * page_px,
        };
        if self.options.normalize_wheel {
            px = px.clamp(-MAX_WHEEL_STEP_PX, MAX_WHEEL_STEP_PX);
        }
        let target = self.target + px * self.options.wheel_multiplier;
        self.scroll_to(target, false, now);
        true
    }

    /// Feeds a touch drag delta. Returns false when touch smoothing is off.
    pub fn on_touch(&mut self, delta: f64, now: f64) -> bool {
        if !self.options.smooth_touch {
            return false;
        }
        let target = self.clamp(self.target + delta * self.options.touch_multiplier);
        if self.options.sync_touch {
            self.target = target;
            self.motion = Some(Motion::Lerp {
                factor: self.options.sync_touch_lerp.clamp(0.0, 1.0),
            });
        } else {
            self.scroll_to(target, false, now);
        }
        true
    }

    pub fn scroll_to(&mut self, offset: f64, immediate: bool, now: f64) {
        self.target = self.clamp(offset);
        if immediate || self.options.duration <= 0.0 {
            self.motion = None;
            self.move_to(self.target);
            return;
        }
        self.motion = Some(Motion::Tween {
            from: self.current,
            to: self.target,
            started_at: now,
        });
    }

    /// Adopts an offset the browser scrolled to on its own (touch, keys,
    /// scrollbar). Echoes of our own animated writes are ignored.
    pub fn sync_native(&mut self, offset: f64) -> Option<ScrollEvent> {
        if self.is_animating() {
            return None;
        }
        let offset = self.clamp(offset);
        if offset == self.current && !self.pending_emit {
            return None;
        }
        self.target = offset;
        self.move_to(offset);
        self.take_event(0.0)
    }

    /// Advances the animation to `now`. Returns an event when the offset
    /// moved or an immediate jump is waiting to be reported.
    pub fn frame(&mut self, now: f64) -> Option<ScrollEvent> {
        let before = self.current;
        match self.motion {
            Some(Motion::Tween { from, to, started_at }) => {
                let duration_ms = self.options.duration * 1000.0;
                let t = ((now - started_at) / duration_ms).clamp(0.0, 1.0);
                if t >= 1.0 {
                    self.motion = None;
                    self.move_to(to);
                } else {
                    self.move_to(from + (to - from) * self.options.easing.apply(t));
                }
            }
            Some(Motion::Lerp { factor }) => {
                let next = self.current + (self.target - self.current) * factor;
                if (self.target - next).abs() < 0.5 {
                    self.motion = None;
                    self.move_to(self.target);
                } else {
                    self.move_to(next);
                }
            }
            None => {}
        }
        self.take_event(self.current - before)
    }

    fn move_to(&mut self, offset: f64) {
        if offset != self.current {
            self.direction = if offset > self.current { 1 } else { -1 };
            self.pending_emit = true;
        }
        self.current = offset;
    }

    fn take_event(&mut self, velocity: f64) -> Option<ScrollEvent> {
        if !self.pending_emit {
            return None;
        }
        self.pending_emit = false;
        Some(ScrollEvent {
            scroll: self.current,
            limit: self.limit,
            velocity,
            direction: self.direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(limit: f64) -> ScrollAnimator {
        let mut animator = ScrollAnimator::new(ScrollOptions::default());
        animator.set_limit(limit);
        animator
    }

    #[test]
    fn expo_out_is_clamped_to_one() {
        assert!(Easing::ExpoOut.apply(0.0) < 0.01);
        assert_eq!(Easing::ExpoOut.apply(1.0), 1.0);
        assert_eq!(Easing::ExpoOut.apply(5.0), 1.0);
        assert!(Easing::ExpoOut.apply(0.5) > 0.9);
    }

    #[test]
    fn wheel_tweens_toward_the_target() {
        let mut scroller = animator(10_000.0);
        assert!(scroller.on_wheel(0.0, 80.0, DeltaMode::Pixel, 800.0, 0.0));
        assert_eq!(scroller.target(), 80.0);
        assert!(scroller.is_animating());

        let mid = scroller.frame(300.0).map(|e| e.scroll).unwrap_or_default();
        assert!(mid > 0.0 && mid < 80.0, "mid-tween offset {}", mid);

        let end = scroller.frame(1_200.0);
        assert_eq!(end.map(|e| e.scroll), Some(80.0));
        assert_eq!(end.map(|e| e.direction), Some(1));
        assert!(!scroller.is_animating());
        assert_eq!(scroller.frame(1_300.0), None);
    }

    #[test]
    fn wheel_steps_are_normalised() {
        let mut scroller = animator(10_000.0);
        scroller.on_wheel(0.0, 3.0, DeltaMode::Line, 800.0, 0.0);
        assert_eq!(scroller.target(), 48.0);
        scroller.on_wheel(0.0, 1.0, DeltaMode::Page, 800.0, 0.0);
        assert_eq!(scroller.target(), 148.0);
    }

    #[test]
    fn offset_never_goes_below_zero() {
        let mut scroller = animator(5_000.0);
        scroller.on_wheel(0.0, -100.0, DeltaMode::Pixel, 800.0, 0.0);
        assert_eq!(scroller.target(), 0.0);
        scroller.scroll_to(-250.0, true, 0.0);
        assert_eq!(scroller.scroll(), 0.0);
        assert_eq!(scroller.sync_native(-40.0), None);
    }

    #[test]
    fn offset_is_capped_at_the_limit() {
        let mut scroller = animator(500.0);
        scroller.scroll_to(900.0, true, 0.0);
        let event = scroller.frame(0.0);
        assert_eq!(event.map(|e| e.scroll), Some(500.0));

        scroller.set_limit(300.0);
        assert_eq!(scroller.scroll(), 300.0);
        assert_eq!(scroller.frame(10.0).map(|e| e.direction), Some(-1));
    }

    #[test]
    fn native_scroll_is_adopted_only_when_idle() {
        let mut scroller = animator(5_000.0);
        let event = scroller.sync_native(420.0);
        assert_eq!(event.map(|e| e.scroll), Some(420.0));
        assert_eq!(scroller.target(), 420.0);

        scroller.on_wheel(0.0, 50.0, DeltaMode::Pixel, 800.0, 0.0);
        assert_eq!(scroller.sync_native(430.0), None);
    }

    #[test]
    fn wheel_is_left_to_the_browser_when_smoothing_is_off() {
        let mut scroller = ScrollAnimator::new(ScrollOptions {
            smooth_wheel: false,
            ..ScrollOptions::default()
        });
        scroller.set_limit(1_000.0);
        assert!(!scroller.on_wheel(0.0, 50.0, DeltaMode::Pixel, 800.0, 0.0));
        assert_eq!(scroller.target(), 0.0);
    }

    #[test]
    fn touch_is_native_by_default() {
        let mut scroller = animator(1_000.0);
        assert!(!scroller.on_touch(20.0, 0.0));
    }

    #[test]
    fn synced_touch_lerps_to_the_target() {
        let mut scroller = ScrollAnimator::new(ScrollOptions {
            smooth_touch: true,
            sync_touch: true,
            ..ScrollOptions::default()
        });
        scroller.set_limit(1_000.0);
        assert!(scroller.on_touch(50.0, 0.0));
        assert_eq!(scroller.target(), 100.0);

        let first = scroller.frame(16.0).map(|e| e.scroll).unwrap_or_default();
        assert!((first - 10.0).abs() < 1e-9);

        let mut now = 16.0;
        while scroller.is_animating() {
            now += 16.0;
            scroller.frame(now);
        }
        assert_eq!(scroller.scroll(), 100.0);
    }

    #[test]
    fn infinite_mode_wraps() {
        let mut scroller = ScrollAnimator::new(ScrollOptions {
            infinite: true,
            ..ScrollOptions::default()
        });
        scroller.set_limit(1_000.0);
        scroller.scroll_to(1_250.0, true, 0.0);
        assert_eq!(scroller.scroll(), 250.0);
        scroller.scroll_to(-100.0, true, 0.0);
        assert_eq!(scroller.scroll(), 900.0);
    }
}
