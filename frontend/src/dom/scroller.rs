//! Browser driver for [`ScrollAnimator`].
//!
//! Wheel input is intercepted and replayed as an eased scroll on animation
//! frames; everything else (touch, keyboard, scrollbar) scrolls natively and
//! is followed through the window's `scroll` event. Subscribers get one
//! [`ScrollEvent`] per frame in which the offset moved.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, TouchEvent, WheelEvent, Window};
use yew::prelude::*;

use crate::dom;
use crate::error::DomResult;
use crate::motion::smooth_scroll::{DeltaMode, Orientation, ScrollAnimator, ScrollEvent, ScrollOptions};

const ROOT_CLASSES: [&str; 2] = ["lenis", "lenis-smooth"];

struct Inner {
    window: Window,
    root: HtmlElement,
    animator: RefCell<ScrollAnimator>,
    on_scroll: Callback<ScrollEvent>,
    frame: RefCell<Option<AnimationFrame>>,
    touch_origin: Cell<Option<f64>>,
}

impl Inner {
    fn orientation(&self) -> Orientation {
        self.animator.borrow().options().orientation
    }

    fn native_offset(&self) -> f64 {
        let offset = match self.orientation() {
            Orientation::Vertical => self.window.scroll_y(),
            Orientation::Horizontal => self.window.scroll_x(),
        };
        offset.unwrap_or(0.0)
    }

    fn page_extent(&self) -> f64 {
        let viewport = match self.orientation() {
            Orientation::Vertical => self.window.inner_height(),
            Orientation::Horizontal => self.window.inner_width(),
        };
        viewport.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn refresh_limit(&self) {
        let content = match self.orientation() {
            Orientation::Vertical => self.root.scroll_height(),
            Orientation::Horizontal => self.root.scroll_width(),
        } as f64;
        self.animator
            .borrow_mut()
            .set_limit(content - self.page_extent());
    }

    fn write_offset(&self, offset: f64) {
        match self.orientation() {
            Orientation::Vertical => self.window.scroll_to_with_x_and_y(0.0, offset),
            Orientation::Horizontal => self.window.scroll_to_with_x_and_y(offset, 0.0),
        }
    }

    /// Pulls the page back to the top if the browser overscrolled it.
    fn enforce_limits(&self) {
        if self.native_offset() < 0.0 {
            self.animator.borrow_mut().scroll_to(0.0, true, dom::now());
            self.write_offset(0.0);
        }
    }

    fn ensure_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let inner = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            inner.frame.borrow_mut().take();
            inner.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        let (event, animating) = {
            let mut animator = self.animator.borrow_mut();
            (animator.frame(timestamp), animator.is_animating())
        };
        if let Some(event) = event {
            self.write_offset(event.scroll);
            self.on_scroll.emit(event);
        }
        if animating {
            self.ensure_frame();
        }
    }

    fn on_wheel(self: &Rc<Self>, event: &WheelEvent) {
        // Pinch and ctrl+wheel zoom the page.
        if event.ctrl_key() {
            return;
        }
        self.enforce_limits();
        self.refresh_limit();
        let handled = self.animator.borrow_mut().on_wheel(
            event.delta_x(),
            event.delta_y(),
            DeltaMode::from_dom(event.delta_mode()),
            self.page_extent(),
            dom::now(),
        );
        if handled {
            event.prevent_default();
            self.ensure_frame();
        }
    }

    fn on_touch_move(self: &Rc<Self>, event: &TouchEvent) {
        self.enforce_limits();
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        let position = match self.orientation() {
            Orientation::Vertical => touch.client_y(),
            Orientation::Horizontal => touch.client_x(),
        } as f64;
        let Some(origin) = self.touch_origin.replace(Some(position)) else {
            return;
        };
        if self.animator.borrow_mut().on_touch(origin - position, dom::now()) {
            event.prevent_default();
            self.ensure_frame();
        }
    }

    fn on_native_scroll(&self) {
        self.refresh_limit();
        let offset = self.native_offset();
        let event = self.animator.borrow_mut().sync_native(offset);
        if let Some(event) = event {
            self.on_scroll.emit(event);
        }
    }
}

/// Owns the listeners and the animation frame; dropping it restores native
/// scrolling.
pub struct SmoothScroller {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl SmoothScroller {
    pub fn attach(options: ScrollOptions, on_scroll: Callback<ScrollEvent>) -> DomResult<Self> {
        let window = dom::window()?;
        let root = dom::root_element()?;
        for class in ROOT_CLASSES {
            root.class_list().add_1(class)?;
        }

        let inner = Rc::new(Inner {
            window: window.clone(),
            root,
            animator: RefCell::new(ScrollAnimator::new(options)),
            on_scroll,
            frame: RefCell::new(None),
            touch_origin: Cell::new(None),
        });
        inner.refresh_limit();
        let start = inner.native_offset();
        inner.animator.borrow_mut().scroll_to(start, true, dom::now());

        let mut listeners = Vec::new();
        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new_with_options(
                &window,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(event) = event.dyn_ref::<WheelEvent>() {
                        inner.on_wheel(event);
                    }
                },
            ));
        }
        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&window, "scroll", move |_| {
                inner.on_native_scroll();
            }));
        }
        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                inner.refresh_limit();
            }));
        }
        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&window, "touchstart", move |event| {
                let origin = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|e| e.touches().get(0))
                    .map(|t| match inner.orientation() {
                        Orientation::Vertical => t.client_y() as f64,
                        Orientation::Horizontal => t.client_x() as f64,
                    });
                inner.touch_origin.set(origin);
            }));
        }
        {
            let inner = Rc::clone(&inner);
            let touch_options = if options.smooth_touch {
                EventListenerOptions::enable_prevent_default()
            } else {
                EventListenerOptions::default()
            };
            listeners.push(EventListener::new_with_options(
                &window,
                "touchmove",
                touch_options,
                move |event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>() {
                        inner.on_touch_move(event);
                    }
                },
            ));
        }

        log::info!("smooth scroll attached");
        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    /// Reports the current offset to the subscriber without moving.
    pub fn emit_current(&self) {
        let animator = self.inner.animator.borrow();
        let event = ScrollEvent {
            scroll: animator.scroll(),
            limit: animator.limit(),
            velocity: 0.0,
            direction: 0,
        };
        drop(animator);
        self.inner.on_scroll.emit(event);
    }
}

impl Drop for SmoothScroller {
    fn drop(&mut self) {
        self.inner.frame.borrow_mut().take();
        for class in ROOT_CLASSES {
            if let Err(err) = self.inner.root.class_list().remove_1(class) {
                log::warn!("failed to remove {} from <html>: {:?}", class, err);
            }
        }
        log::info!("smooth scroll detached");
    }
}

/// Keeps a [`SmoothScroller`] attached for the lifetime of the calling
/// component. The callback must be stable across renders (memoize it), or
/// the scroller is torn down and attached again.
#[hook]
pub fn use_smooth_scroll(options: ScrollOptions, on_scroll: Callback<ScrollEvent>) {
    use_effect_with_deps(
        move |(options, on_scroll)| {
            let scroller = match SmoothScroller::attach(*options, on_scroll.clone()) {
                Ok(scroller) => {
                    scroller.emit_current();
                    Some(scroller)
                }
                Err(err) => {
                    log::warn!("smooth scroll unavailable, page stays static: {}", err);
                    None
                }
            };
            move || drop(scroller)
        },
        (options, on_scroll),
    );
}
